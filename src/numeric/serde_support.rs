// ============================================================================
// Serde Support
// Currency amounts embedded in JSON request and response payloads
// ============================================================================

use super::amount::{Amount, CurrencyFormat};
use super::currency::Currency;
use super::errors::{CurrencyError, CurrencyResult};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

impl Serialize for Currency {
    /// Serialized as the canonical 9-digit decimal string.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_decimal_string())
    }
}

struct CurrencyVisitor;

impl CurrencyVisitor {
    fn build<E: de::Error>(amount: Amount) -> Result<Currency, E> {
        Currency::from_whole(amount).map_err(E::custom)
    }
}

impl<'de> Visitor<'de> for CurrencyVisitor {
    type Value = Currency;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a decimal currency string or a whole-unit number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Currency, E> {
        Self::build(Amount::from(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Currency, E> {
        Self::build(Amount::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Currency, E> {
        Self::build(Amount::from(v))
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<Currency, E> {
        Self::build(Amount::from(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Currency, E> {
        Self::build(Amount::from(v))
    }
}

impl<'de> Deserialize<'de> for Currency {
    /// Accepts anything [`Currency::from_whole`] accepts: strings use the
    /// decimal-string rule, numbers are whole units.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(CurrencyVisitor)
    }
}

impl Currency {
    /// Build an amount from an arbitrary JSON payload field.
    ///
    /// # Errors
    /// - `UnsupportedType` for null, booleans, arrays, objects, and for
    ///   anything but an integer under `CurrencyFormat::Nano`
    /// - otherwise as [`Currency::new`]
    pub fn from_json(value: &Value, format: CurrencyFormat) -> CurrencyResult<Self> {
        let amount = match value {
            Value::String(text) => Amount::Decimal(text.clone()),
            Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
                (Some(i), _, _) => Amount::from(i),
                (None, Some(u), _) => Amount::from(u),
                (None, None, Some(f)) => Amount::from(f),
                (None, None, None) => return Err(CurrencyError::UnsupportedType),
            },
            other => {
                tracing::debug!(%other, "cannot construct currency from JSON value");
                return Err(CurrencyError::UnsupportedType);
            },
        };
        Self::new(amount, format)
    }
}
