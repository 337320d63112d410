// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Exact decimal values for scaled sensor readings.
//!
//! Sensors commonly report fixed-point integers: a temperature of `2315`
//! meaning 23.15 °C, or a voltage of `4980` meaning 4.98 V. [`DecimalValue`]
//! keeps such readings exact instead of going through floating point.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{ParseError, ValueError};

/// Power-of-ten divisor applied to a raw reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scale {
    /// Raw value, no scaling.
    One,
    /// Tenths.
    Ten,
    /// Hundredths.
    Hundred,
    /// Thousandths.
    Thousand,
    /// Millionths.
    Million,
}

impl Scale {
    /// Returns the power of ten this scale divides by.
    #[must_use]
    pub const fn exponent(self) -> u32 {
        match self {
            Self::One => 0,
            Self::Ten => 1,
            Self::Hundred => 2,
            Self::Thousand => 3,
            Self::Million => 6,
        }
    }

    /// Returns the divisor, e.g. `100` for [`Scale::Hundred`].
    #[must_use]
    pub const fn divisor(self) -> u32 {
        10u32.pow(self.exponent())
    }
}

/// An exact decimal number.
///
/// Stored as `mantissa * 10^-scale` and always normalized, so `1.50` and `1.5`
/// compare equal.
///
/// # Examples
///
/// ```
/// use habtools_lib::types::{DecimalValue, Scale};
///
/// let temperature = DecimalValue::scaled(2315, Scale::Hundred);
/// assert_eq!(temperature.to_string(), "23.15");
///
/// let voltage = DecimalValue::from_thousandths(4980);
/// assert_eq!(voltage.to_string(), "4.98");
///
/// let parsed: DecimalValue = "4.980".parse().unwrap();
/// assert_eq!(parsed, voltage);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecimalValue {
    mantissa: i64,
    scale: u32,
}

impl DecimalValue {
    /// Largest supported number of fractional digits.
    pub const MAX_SCALE: u32 = 18;

    /// Zero.
    pub const ZERO: Self = Self {
        mantissa: 0,
        scale: 0,
    };

    /// Creates `mantissa * 10^-scale`.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if `scale` exceeds [`Self::MAX_SCALE`].
    pub fn new(mantissa: i64, scale: u32) -> Result<Self, ValueError> {
        if scale > Self::MAX_SCALE {
            return Err(ValueError::OutOfRange {
                min: 0,
                max: Self::MAX_SCALE,
                actual: scale,
            });
        }
        Ok(Self::normalized(mantissa, scale))
    }

    /// Divides a raw reading by the given power of ten.
    #[must_use]
    pub fn scaled(raw: impl Into<i64>, scale: Scale) -> Self {
        Self::normalized(raw.into(), scale.exponent())
    }

    /// Creates a value from a reading in tenths.
    #[must_use]
    pub fn from_tenths(raw: impl Into<i64>) -> Self {
        Self::scaled(raw, Scale::Ten)
    }

    /// Creates a value from a reading in hundredths.
    #[must_use]
    pub fn from_hundredths(raw: impl Into<i64>) -> Self {
        Self::scaled(raw, Scale::Hundred)
    }

    /// Creates a value from a reading in thousandths.
    #[must_use]
    pub fn from_thousandths(raw: impl Into<i64>) -> Self {
        Self::scaled(raw, Scale::Thousand)
    }

    /// Creates a value from a reading in millionths.
    #[must_use]
    pub fn from_millionths(raw: impl Into<i64>) -> Self {
        Self::scaled(raw, Scale::Million)
    }

    const fn normalized(mut mantissa: i64, mut scale: u32) -> Self {
        while scale > 0 && mantissa % 10 == 0 {
            mantissa /= 10;
            scale -= 1;
        }
        Self { mantissa, scale }
    }

    /// Returns the unscaled integer.
    #[must_use]
    pub const fn mantissa(&self) -> i64 {
        self.mantissa
    }

    /// Returns the number of fractional digits.
    #[must_use]
    pub const fn scale(&self) -> u32 {
        self.scale
    }

    /// Returns true if the value has no fractional part.
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        self.scale == 0
    }

    /// Converts to the nearest `f64`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(&self) -> f64 {
        self.mantissa as f64 / 10f64.powi(self.scale.cast_signed())
    }
}

impl Default for DecimalValue {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<i32> for DecimalValue {
    fn from(value: i32) -> Self {
        Self::scaled(value, Scale::One)
    }
}

impl From<i64> for DecimalValue {
    fn from(value: i64) -> Self {
        Self::scaled(value, Scale::One)
    }
}

impl fmt::Display for DecimalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scale == 0 {
            return write!(f, "{}", self.mantissa);
        }

        let sign = if self.mantissa < 0 { "-" } else { "" };
        let digits = self.mantissa.unsigned_abs().to_string();
        let scale = self.scale as usize;
        if digits.len() > scale {
            let (int, frac) = digits.split_at(digits.len() - scale);
            write!(f, "{sign}{int}.{frac}")
        } else {
            write!(f, "{sign}0.{digits:0>scale$}")
        }
    }
}

impl FromStr for DecimalValue {
    type Err = ParseError;

    /// Parses `[+-]digits[.digits]`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |message: &str| ParseError::InvalidValue {
            field: "decimal".to_string(),
            message: format!("{message}: '{s}'"),
        };

        let (negative, unsigned) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };
        let (int, frac) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        if int.is_empty() && frac.is_empty() {
            return Err(invalid("empty number"));
        }
        if !int.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid("not a decimal number"));
        }

        let scale = u32::try_from(frac.len())
            .ok()
            .filter(|&scale| scale <= Self::MAX_SCALE)
            .ok_or_else(|| invalid("too many fractional digits"))?;
        let magnitude: i64 = format!("{int}{frac}")
            .parse()
            .map_err(|_| invalid("number too large"))?;
        let mantissa = if negative { -magnitude } else { magnitude };

        Ok(Self::normalized(mantissa, scale))
    }
}

impl Serialize for DecimalValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
