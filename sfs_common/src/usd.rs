use std::{
    fmt::Display,
    iter::Sum,
    ops::{Add, Mul, Sub, SubAssign},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const USD_CURRENCY_CODE: &str = "USD";
pub const USD_CURRENCY_CODE_LOWER: &str = "usd";

//--------------------------------------     UsdAmount       ---------------------------------------------------------
/// A USD amount in minor currency units (cents).
///
/// All prices and totals in the storefront are integer cents. Decimal strings ("28.00") only appear at the provider
/// boundaries, where [`UsdAmount::parse_decimal`] and [`UsdAmount::to_decimal_string`] do the conversion.
#[derive(Debug, Clone, Copy, Default, Ord, PartialOrd, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UsdAmount(i64);

impl Add for UsdAmount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for UsdAmount {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for UsdAmount {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Mul<i64> for UsdAmount {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl Sum for UsdAmount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

#[derive(Debug, Clone, Error)]
#[error("Value cannot be represented as a USD amount: {0}")]
pub struct UsdConversionError(pub String);

impl From<i64> for UsdAmount {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl Display for UsdAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 < 0 {
            write!(f, "-${}", Self(-self.0).to_decimal_string())
        } else {
            write!(f, "${}", self.to_decimal_string())
        }
    }
}

impl UsdAmount {
    pub fn value(&self) -> i64 {
        self.0
    }

    pub fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub fn from_dollars(dollars: i64) -> Self {
        Self(dollars * 100)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Parses a decimal price string ("28", "28.5", "28.00") into cents. Providers express prices as decimal strings;
    /// anything with more than two fraction digits is rejected rather than silently rounded.
    pub fn parse_decimal(price: &str) -> Result<Self, UsdConversionError> {
        let price = price.trim();
        if price.starts_with('-') {
            return Err(UsdConversionError(format!("Negative price value: {price}.")));
        }
        let mut parts = price.splitn(2, '.');
        let whole = parts
            .next()
            .ok_or_else(|| UsdConversionError(price.to_string()))?
            .parse::<i64>()
            .map_err(|e| UsdConversionError(format!("Invalid price value: {price}. {e}.")))?;
        let cents = match parts.next() {
            None | Some("") => 0,
            Some(frac) if frac.len() > 2 => {
                return Err(UsdConversionError(format!("Too many fraction digits in price: {price}.")));
            },
            Some(frac) => {
                // Digits only: "28.-5" and "28.+5" are malformed, not a signed fraction.
                if !frac.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(UsdConversionError(format!("Invalid price value: {price}.")));
                }
                let parsed = frac
                    .parse::<i64>()
                    .map_err(|e| UsdConversionError(format!("Invalid price value: {price}. {e}.")))?;
                // "28.5" means 50 cents, not 5
                if frac.len() == 1 {
                    parsed * 10
                } else {
                    parsed
                }
            },
        };
        Ok(Self(whole * 100 + cents))
    }

    /// Formats the amount as a plain decimal string without a currency symbol, e.g. "28.00".
    pub fn to_decimal_string(&self) -> String {
        format!("{}.{:02}", self.0 / 100, (self.0 % 100).abs())
    }
}
