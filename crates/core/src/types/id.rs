//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types.
//!
//! IDs travel over the wire as decimal strings (`"5"`), which is what the
//! fixture files and API clients use. Deserialization also accepts JSON
//! integers so hand-edited fixtures with `"categoryId": 2` still load.

use thiserror::Error;

/// Error parsing an ID from its text form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseIdError {
    /// Input was empty.
    #[error("id is empty")]
    Empty,
    /// Input was not a canonical decimal number (digits only, no leading zero).
    #[error("id is not a canonical decimal number: {0:?}")]
    NotCanonical(String),
    /// Input does not fit in 64 bits.
    #[error("id is out of range: {0}")]
    OutOfRange(String),
}

/// Parse the canonical text form of an ID.
///
/// Only plain ASCII digits are accepted, without sign or leading zeros, so
/// every ID has exactly one text form.
///
/// # Errors
///
/// Returns `ParseIdError` if the input is empty, not canonical, or too large.
pub fn parse_canonical(s: &str) -> Result<u64, ParseIdError> {
    if s.is_empty() {
        return Err(ParseIdError::Empty);
    }
    if !s.bytes().all(|b| b.is_ascii_digit()) || (s.len() > 1 && s.starts_with('0')) {
        return Err(ParseIdError::NotCanonical(s.to_string()));
    }
    s.parse::<u64>()
        .map_err(|_| ParseIdError::OutOfRange(s.to_string()))
}

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `u64` with:
/// - `Serialize` as a decimal string, `Deserialize` from a string or integer
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `Ord`
/// - Conversion methods: `new()`, `as_u64()`
/// - `From<u64>`, `Into<u64>`, `FromStr` and `Display` implementations
///
/// # Example
///
/// ```rust
/// # use catalog_mock_core::define_id;
/// define_id!(OrderId);
/// define_id!(ShipmentId);
///
/// let order_id = OrderId::new(1);
/// let shipment_id = ShipmentId::new(1);
///
/// // These are different types, so this won't compile:
/// // let _: OrderId = shipment_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(u64);

        impl $name {
            /// Create a new ID from a u64 value.
            #[must_use]
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            /// Get the underlying u64 value.
            #[must_use]
            pub const fn as_u64(&self) -> u64 {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::types::id::ParseIdError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                $crate::types::id::parse_canonical(s).map(Self)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.collect_str(&self.0)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                match <$crate::types::id::RawId as ::serde::Deserialize>::deserialize(deserializer)? {
                    $crate::types::id::RawId::Number(id) => Ok(Self(id)),
                    $crate::types::id::RawId::Text(text) => text
                        .parse::<Self>()
                        .map_err(<D::Error as ::serde::de::Error>::custom),
                }
            }
        }
    };
}

/// Wire representation accepted when deserializing an ID.
#[doc(hidden)]
#[derive(serde::Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Number(u64),
    Text(String),
}

define_id!(ProductId);
define_id!(BrandId);
define_id!(UserId);
define_id!(TokenId);

/// The first ID handed out by a fresh allocator.
const FIRST_ID: u64 = 1;

/// Sequential ID counter owned by a single entity store.
///
/// IDs start at 1 and increase by one per allocation. The counter can only
/// be rewound from test code (`cfg(test)` or the `test-support` feature).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    /// Create an allocator whose first ID is 1.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: FIRST_ID }
    }

    /// Hand out the next ID.
    pub const fn allocate(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Rewind the counter to its initial value.
    #[cfg(any(test, feature = "test-support"))]
    pub const fn reset(&mut self) {
        self.next = FIRST_ID;
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_id_serializes_as_string() {
        let json = serde_json::to_string(&BrandId::new(2)).unwrap();
        assert_eq!(json, "\"2\"");
    }

    #[test]
    fn test_id_deserializes_from_string_or_number() {
        let from_str: BrandId = serde_json::from_str("\"2\"").unwrap();
        let from_num: BrandId = serde_json::from_str("2").unwrap();
        assert_eq!(from_str, BrandId::new(2));
        assert_eq!(from_num, BrandId::new(2));
    }

    #[test]
    fn test_id_rejects_garbage() {
        assert!(serde_json::from_str::<ProductId>("\"a\"").is_err());
        assert!(serde_json::from_str::<ProductId>("-1").is_err());
        assert!(serde_json::from_str::<ProductId>("null").is_err());
        assert!(serde_json::from_str::<ProductId>("1.5").is_err());
    }

    #[test]
    fn test_parse_canonical() {
        assert_eq!("5".parse::<BrandId>().unwrap(), BrandId::new(5));
        assert_eq!("0".parse::<BrandId>().unwrap(), BrandId::new(0));
        assert_eq!("".parse::<BrandId>(), Err(ParseIdError::Empty));
        assert!(matches!(
            "02".parse::<BrandId>(),
            Err(ParseIdError::NotCanonical(_))
        ));
        assert!(matches!(
            "+2".parse::<BrandId>(),
            Err(ParseIdError::NotCanonical(_))
        ));
        assert!(matches!(
            "a".parse::<BrandId>(),
            Err(ParseIdError::NotCanonical(_))
        ));
        assert!(matches!(
            "99999999999999999999999".parse::<BrandId>(),
            Err(ParseIdError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_allocator_is_sequential() {
        let mut ids = IdAllocator::new();
        assert_eq!(ids.allocate(), 1);
        assert_eq!(ids.allocate(), 2);

        ids.reset();
        assert_eq!(ids.allocate(), 1);
    }
}
