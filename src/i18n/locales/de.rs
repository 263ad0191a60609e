//! German messages

use crate::i18n::{Language, LanguageEntry, MessageProvider, SpecificMessages};

fn received(label: &str) -> MessageProvider {
    MessageProvider::template(format!("{}: {{received}} erhalten", label))
}

fn expected(label: &str) -> MessageProvider {
    MessageProvider::template(format!(
        "{}: {{expected}} erwartet aber {{received}} erhalten",
        label
    ))
}

pub fn entry() -> LanguageEntry {
    LanguageEntry::new(
        Language::De,
        "Ungültiger Typ: {expected} erwartet aber {received} erhalten",
        SpecificMessages {
            bic: received("Ungültige BIC"),
            bytes: expected("Ungültige Bytes"),
            credit_card: received("Ungültige Kreditkarte"),
            cuid2: received("Ungültige Cuid2"),
            custom: received("Ungültige Eingabe"),
            custom_async: received("Ungültige Eingabe"),
            decimal: received("Ungültige Dezimalzahl"),
            email: received("Ungültige E-Mail"),
            emoji: received("Ungültiges Emoji"),
            ends_with: expected("Ungültiges Ende"),
            equal: expected("Ungültiger Wert"),
            excludes: expected("Ungültiger Inhalt"),
            finite: received("Ungültige endliche Zahl"),
            hash: received("Ungültiger Hash"),
            hex_color: received("Ungültige Hex-Farbe"),
            hexadecimal: received("Ungültige Hexadezimalzahl"),
            imei: received("Ungültige IMEI"),
            includes: expected("Ungültiger Inhalt"),
            integer: received("Ungültige Ganzzahl"),
            ip: received("Ungültige IP"),
            ipv4: received("Ungültige IPv4"),
            ipv6: received("Ungültige IPv6"),
            iso_date: received("Ungültiges Datum"),
            iso_date_time: received("Ungültiges Datum mit Uhrzeit"),
            iso_time: received("Ungültige Uhrzeit"),
            iso_time_second: received("Ungültige Uhrzeit mit Sekunden"),
            iso_timestamp: received("Ungültiger Zeitstempel"),
            iso_week: received("Ungültige Woche"),
            length: expected("Ungültige Länge"),
            mac: received("Ungültige MAC"),
            mac48: received("Ungültige 48-Bit-MAC"),
            mac64: received("Ungültige 64-Bit-MAC"),
            max_bytes: expected("Ungültige Bytes"),
            max_length: expected("Ungültige Länge"),
            max_size: expected("Ungültige Größe"),
            max_value: expected("Ungültiger Wert"),
            mime_type: expected("Ungültiger MIME-Typ"),
            min_bytes: expected("Ungültige Bytes"),
            min_length: expected("Ungültige Länge"),
            min_size: expected("Ungültige Größe"),
            min_value: expected("Ungültiger Wert"),
            multiple_of: expected("Ungültiges Vielfaches"),
            not_bytes: expected("Ungültige Bytes"),
            not_length: expected("Ungültige Länge"),
            not_size: expected("Ungültige Größe"),
            not_value: expected("Ungültiger Wert"),
            octal: received("Ungültige Oktalzahl"),
            regex: expected("Ungültiges Format"),
            safe_integer: received("Ungültige sichere Ganzzahl"),
            size: expected("Ungültige Größe"),
            starts_with: expected("Ungültiger Anfang"),
            ulid: received("Ungültige ULID"),
            url: received("Ungültige URL"),
            uuid: received("Ungültige UUID"),
            value: expected("Ungültiger Wert"),
        },
    )
}
