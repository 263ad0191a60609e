//! English messages

use crate::i18n::{Language, LanguageEntry, MessageProvider, SpecificMessages};

fn received(label: &str) -> MessageProvider {
    MessageProvider::template(format!("Invalid {}: Received {{received}}", label))
}

fn expected(label: &str) -> MessageProvider {
    MessageProvider::template(format!(
        "Invalid {}: Expected {{expected}} but received {{received}}",
        label
    ))
}

pub fn entry() -> LanguageEntry {
    LanguageEntry::new(
        Language::En,
        "Invalid type: Expected {expected} but received {received}",
        SpecificMessages {
            bic: received("BIC"),
            bytes: expected("bytes"),
            credit_card: received("credit card"),
            cuid2: received("Cuid2"),
            custom: received("input"),
            custom_async: received("input"),
            decimal: received("decimal"),
            email: received("email"),
            emoji: received("emoji"),
            ends_with: expected("end"),
            equal: expected("value"),
            excludes: expected("content"),
            finite: received("finite number"),
            hash: received("hash"),
            hex_color: received("hex color"),
            hexadecimal: received("hexadecimal"),
            imei: received("IMEI"),
            includes: expected("content"),
            integer: received("integer"),
            ip: received("IP"),
            ipv4: received("IPv4"),
            ipv6: received("IPv6"),
            iso_date: received("date"),
            iso_date_time: received("date-time"),
            iso_time: received("time"),
            iso_time_second: received("time second"),
            iso_timestamp: received("timestamp"),
            iso_week: received("week"),
            length: expected("length"),
            mac: received("MAC"),
            mac48: received("48-bit MAC"),
            mac64: received("64-bit MAC"),
            max_bytes: expected("bytes"),
            max_length: expected("length"),
            max_size: expected("size"),
            max_value: expected("value"),
            mime_type: expected("MIME type"),
            min_bytes: expected("bytes"),
            min_length: expected("length"),
            min_size: expected("size"),
            min_value: expected("value"),
            multiple_of: expected("multiple"),
            not_bytes: expected("bytes"),
            not_length: expected("length"),
            not_size: expected("size"),
            not_value: expected("value"),
            octal: received("octal"),
            regex: expected("format"),
            safe_integer: received("safe integer"),
            size: expected("size"),
            starts_with: expected("start"),
            ulid: received("ULID"),
            url: received("URL"),
            uuid: received("UUID"),
            value: expected("value"),
        },
    )
}
