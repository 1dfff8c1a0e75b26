//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are stored as `Decimal` so catalog math never goes through binary
//! floating point. On the wire they stay plain JSON numbers: whole amounts are
//! written as integers (`150`) and fractional amounts as floats (`12.5`), which
//! keeps fixture data byte-for-byte stable when echoed back.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A catalog price in the store's (single) currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(Decimal);

impl Price {
    /// The decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl Serialize for Price {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.0.fract().is_zero()
            && let Some(whole) = self.0.to_i64()
        {
            return serializer.serialize_i64(whole);
        }
        // Parse the decimal text rather than converting arithmetically so the
        // result is the nearest f64 to the exact amount.
        match self.0.to_string().parse::<f64>() {
            Ok(value) => serializer.serialize_f64(value),
            Err(_) => serializer.collect_str(&self.0),
        }
    }
}

/// Wire forms a price may arrive in.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Whole(i64),
    Fractional(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        let amount = match RawPrice::deserialize(deserializer)? {
            RawPrice::Whole(whole) => Decimal::from(whole),
            // Go through the shortest round-trip text form so 12.5 stays 12.5
            // instead of picking up binary noise.
            RawPrice::Fractional(value) => {
                Decimal::from_str(&value.to_string()).map_err(D::Error::custom)?
            }
            RawPrice::Text(text) => Decimal::from_str(&text).map_err(D::Error::custom)?,
        };
        Ok(Self(amount))
    }
}
