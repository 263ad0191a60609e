//! The closed rule catalog shared by every locale pack.
//!
//! `RuleId` and `SpecificMessages` are generated from the same listing, so a
//! rule cannot exist without a message slot in every pack. A pack missing a
//! rule (or naming one that does not exist) is a compile error.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::message::MessageProvider;

macro_rules! rule_catalog {
    ($($variant:ident => $field:ident),+ $(,)?) => {
        /// Identifier of a validation rule with a localized message
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum RuleId {
            $($variant,)+
        }

        impl RuleId {
            /// Every rule, in catalog order
            pub const ALL: &'static [RuleId] = &[$(RuleId::$variant,)+];

            /// Stable snake_case name, also the key used in locale pack files
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(RuleId::$variant => stringify!($field),)+
                }
            }

            /// Look up a rule by its name
            pub fn parse(name: &str) -> Option<Self> {
                match name {
                    $(stringify!($field) => Some(RuleId::$variant),)+
                    _ => None,
                }
            }
        }

        /// One message provider per catalog rule
        #[derive(Debug, Clone)]
        pub struct SpecificMessages {
            $(pub $field: MessageProvider,)+
        }

        impl SpecificMessages {
            /// The provider for a rule
            pub fn get(&self, rule: RuleId) -> &MessageProvider {
                match rule {
                    $(RuleId::$variant => &self.$field,)+
                }
            }

            /// Build the full set from a lookup, `None` if any rule is absent
            pub fn try_from_fn<F>(mut lookup: F) -> Option<Self>
            where
                F: FnMut(RuleId) -> Option<MessageProvider>,
            {
                Some(Self {
                    $($field: lookup(RuleId::$variant)?,)+
                })
            }
        }
    };
}

rule_catalog! {
    Bic => bic,
    Bytes => bytes,
    CreditCard => credit_card,
    Cuid2 => cuid2,
    Custom => custom,
    CustomAsync => custom_async,
    Decimal => decimal,
    Email => email,
    Emoji => emoji,
    EndsWith => ends_with,
    Equal => equal,
    Excludes => excludes,
    Finite => finite,
    Hash => hash,
    HexColor => hex_color,
    Hexadecimal => hexadecimal,
    Imei => imei,
    Includes => includes,
    Integer => integer,
    Ip => ip,
    Ipv4 => ipv4,
    Ipv6 => ipv6,
    IsoDate => iso_date,
    IsoDateTime => iso_date_time,
    IsoTime => iso_time,
    IsoTimeSecond => iso_time_second,
    IsoTimestamp => iso_timestamp,
    IsoWeek => iso_week,
    Length => length,
    Mac => mac,
    Mac48 => mac48,
    Mac64 => mac64,
    MaxBytes => max_bytes,
    MaxLength => max_length,
    MaxSize => max_size,
    MaxValue => max_value,
    MimeType => mime_type,
    MinBytes => min_bytes,
    MinLength => min_length,
    MinSize => min_size,
    MinValue => min_value,
    MultipleOf => multiple_of,
    NotBytes => not_bytes,
    NotLength => not_length,
    NotSize => not_size,
    NotValue => not_value,
    Octal => octal,
    Regex => regex,
    SafeInteger => safe_integer,
    Size => size,
    StartsWith => starts_with,
    Ulid => ulid,
    Url => url,
    Uuid => uuid,
    Value => value,
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key selecting a message in a locale pack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    /// The pack's root message, used for schema type mismatches
    Root,
    /// A specific rule's message
    Rule(RuleId),
}

impl MessageKey {
    /// Name of the root sentinel
    pub const ROOT: &'static str = "schema";

    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKey::Root => Self::ROOT,
            MessageKey::Rule(rule) => rule.as_str(),
        }
    }
}

impl From<RuleId> for MessageKey {
    fn from(rule: RuleId) -> Self {
        MessageKey::Rule(rule)
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageKey {
    type Err = crate::error::ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::ROOT {
            return Ok(MessageKey::Root);
        }
        RuleId::parse(s)
            .map(MessageKey::Rule)
            .ok_or_else(|| crate::error::ValidationError::UnknownRule(s.to_string()))
    }
}

impl Serialize for MessageKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MessageKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_size_and_uniqueness() {
        assert_eq!(RuleId::ALL.len(), 55);
        let names: HashSet<_> = RuleId::ALL.iter().map(|r| r.as_str()).collect();
        assert_eq!(names.len(), RuleId::ALL.len());
    }

    #[test]
    fn test_parse_matches_as_str() {
        for rule in RuleId::ALL {
            assert_eq!(RuleId::parse(rule.as_str()), Some(*rule));
        }
        assert_eq!(RuleId::parse("minLength"), None);
        assert_eq!(RuleId::parse("schema"), None);
    }

    #[test]
    fn test_message_key_parse() {
        assert_eq!("schema".parse::<MessageKey>().unwrap(), MessageKey::Root);
        assert_eq!(
            "min_length".parse::<MessageKey>().unwrap(),
            MessageKey::Rule(RuleId::MinLength)
        );
        assert!("bogus".parse::<MessageKey>().is_err());
    }

    #[test]
    fn test_try_from_fn_requires_every_rule() {
        let full = SpecificMessages::try_from_fn(|rule| Some(MessageProvider::constant(rule.as_str())));
        let full = full.unwrap();
        for rule in RuleId::ALL {
            assert!(matches!(full.get(*rule), MessageProvider::Constant(text) if text == rule.as_str()));
        }

        let partial = SpecificMessages::try_from_fn(|rule| {
            (rule != RuleId::Ulid).then(|| MessageProvider::constant("x"))
        });
        assert!(partial.is_none());
    }
}
