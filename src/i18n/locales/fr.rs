//! French messages

use crate::i18n::{Language, LanguageEntry, MessageProvider, SpecificMessages};

fn received(label: &str) -> MessageProvider {
    MessageProvider::template(format!("{} : {{received}} reçu", label))
}

fn expected(label: &str) -> MessageProvider {
    MessageProvider::template(format!(
        "{} : {{expected}} attendu mais {{received}} reçu",
        label
    ))
}

pub fn entry() -> LanguageEntry {
    LanguageEntry::new(
        Language::Fr,
        "Type invalide : {expected} attendu mais {received} reçu",
        SpecificMessages {
            bic: received("BIC invalide"),
            bytes: expected("Octets invalides"),
            credit_card: received("Carte de crédit invalide"),
            cuid2: received("Cuid2 invalide"),
            custom: received("Entrée invalide"),
            custom_async: received("Entrée invalide"),
            decimal: received("Décimal invalide"),
            email: received("E-mail invalide"),
            emoji: received("Emoji invalide"),
            ends_with: expected("Fin invalide"),
            equal: expected("Valeur invalide"),
            excludes: expected("Contenu invalide"),
            finite: received("Nombre fini invalide"),
            hash: received("Hash invalide"),
            hex_color: received("Couleur hexadécimale invalide"),
            hexadecimal: received("Hexadécimal invalide"),
            imei: received("IMEI invalide"),
            includes: expected("Contenu invalide"),
            integer: received("Entier invalide"),
            ip: received("IP invalide"),
            ipv4: received("IPv4 invalide"),
            ipv6: received("IPv6 invalide"),
            iso_date: received("Date invalide"),
            iso_date_time: received("Date-heure invalide"),
            iso_time: received("Heure invalide"),
            iso_time_second: received("Heure avec secondes invalide"),
            iso_timestamp: received("Horodatage invalide"),
            iso_week: received("Semaine invalide"),
            length: expected("Longueur invalide"),
            mac: received("MAC invalide"),
            mac48: received("MAC 48 bits invalide"),
            mac64: received("MAC 64 bits invalide"),
            max_bytes: expected("Octets invalides"),
            max_length: expected("Longueur invalide"),
            max_size: expected("Taille invalide"),
            max_value: expected("Valeur invalide"),
            mime_type: expected("Type MIME invalide"),
            min_bytes: expected("Octets invalides"),
            min_length: expected("Longueur invalide"),
            min_size: expected("Taille invalide"),
            min_value: expected("Valeur invalide"),
            multiple_of: expected("Multiple invalide"),
            not_bytes: expected("Octets invalides"),
            not_length: expected("Longueur invalide"),
            not_size: expected("Taille invalide"),
            not_value: expected("Valeur invalide"),
            octal: received("Octal invalide"),
            regex: expected("Format invalide"),
            safe_integer: received("Entier sûr invalide"),
            size: expected("Taille invalide"),
            starts_with: expected("Début invalide"),
            ulid: received("ULID invalide"),
            url: received("URL invalide"),
            uuid: received("UUID invalide"),
            value: expected("Valeur invalide"),
        },
    )
}
