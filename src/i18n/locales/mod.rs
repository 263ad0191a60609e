//! Locale packs shipped with the crate

use super::LanguageEntry;

pub mod de;
pub mod en;
pub mod fr;

/// Every built-in pack
pub fn builtin() -> Vec<LanguageEntry> {
    vec![de::entry(), en::entry(), fr::entry()]
}
