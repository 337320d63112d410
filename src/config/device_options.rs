// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Case-insensitive option map for device configuration.

use std::collections::BTreeMap;
use std::fmt::Display;
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;

use crate::error::ParseError;
use crate::led::{LedSelection, parse_led_selection};
use crate::types::DecimalValue;

/// Immutable key/value options attached to a device binding.
///
/// Keys are case-insensitive. Typed getters return `Ok(None)` for a missing
/// key and an error for a value that does not parse, so callers apply their
/// defaults with `unwrap_or`.
///
/// # Examples
///
/// ```
/// use habtools_lib::config::DeviceOptions;
///
/// let options = DeviceOptions::new([("Threshold", "250"), ("leds", "1|4-6")]);
///
/// assert_eq!(options.get_i32("threshold").unwrap(), Some(250));
/// assert_eq!(options.get_i32("callbackPeriod").unwrap().unwrap_or(1000), 1000);
///
/// let leds = options.get_led_selection("LEDS").unwrap().unwrap();
/// assert_eq!(leds.tracking_led(), Some(1));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeviceOptions {
    options: BTreeMap<String, String>,
}

impl DeviceOptions {
    /// Creates options from `(key, value)` pairs.
    ///
    /// When a key appears more than once, ignoring case, the last value wins.
    #[must_use]
    pub fn new<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        pairs.into_iter().collect()
    }

    /// Parses options from a JSON object.
    ///
    /// String values are taken as is, numbers and booleans by their JSON text.
    /// `null` values are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Json`] if `json` is not a JSON object, and
    /// [`ParseError::InvalidValue`] if a value is an array or an object.
    pub fn from_json(json: &str) -> Result<Self, ParseError> {
        let object: serde_json::Map<String, Value> = serde_json::from_str(json)?;
        let mut options = BTreeMap::new();

        for (key, value) in object {
            let value = match value {
                Value::Null => continue,
                Value::String(s) => s,
                Value::Bool(_) | Value::Number(_) => value.to_string(),
                Value::Array(_) | Value::Object(_) => {
                    return Err(ParseError::InvalidValue {
                        field: key,
                        message: "expected a scalar value".to_string(),
                    });
                }
            };
            options.insert(key.to_lowercase(), value);
        }

        tracing::debug!(count = options.len(), "Loaded device options");
        Ok(Self { options })
    }

    /// Returns the number of options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns true if there are no options.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Returns true if an option with this key exists.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.options.contains_key(&key.to_lowercase())
    }

    /// Iterates over `(lower-case key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.options.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the raw value of an option.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.options.get(&key.to_lowercase()).map(String::as_str)
    }

    /// Returns an option as `i16`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidValue`] if the value is not an `i16`.
    pub fn get_i16(&self, key: &str) -> Result<Option<i16>, ParseError> {
        self.get_parsed(key)
    }

    /// Returns an option as `i32`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidValue`] if the value is not an `i32`.
    pub fn get_i32(&self, key: &str) -> Result<Option<i32>, ParseError> {
        self.get_parsed(key)
    }

    /// Returns an option as `i64`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidValue`] if the value is not an `i64`.
    pub fn get_i64(&self, key: &str) -> Result<Option<i64>, ParseError> {
        self.get_parsed(key)
    }

    /// Returns an option as an exact decimal.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidValue`] if the value is not a decimal
    /// number.
    pub fn get_decimal(&self, key: &str) -> Result<Option<DecimalValue>, ParseError> {
        self.get_parsed(key)
    }

    /// Returns an option parsed as a LED selection string.
    ///
    /// # Errors
    ///
    /// Returns the LED parser's error if the value is not a valid selection.
    pub fn get_led_selection(&self, key: &str) -> Result<Option<LedSelection>, ParseError> {
        self.get_str(key).map(parse_led_selection).transpose()
    }

    fn get_parsed<T>(&self, key: &str) -> Result<Option<T>, ParseError>
    where
        T: FromStr,
        T::Err: Display,
    {
        let Some(raw) = self.get_str(key) else {
            return Ok(None);
        };

        raw.trim()
            .parse()
            .map(Some)
            .map_err(|e| ParseError::InvalidValue {
                field: key.to_lowercase(),
                message: format!("'{raw}': {e}"),
            })
    }
}

impl<K, V> FromIterator<(K, V)> for DeviceOptions
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            options: iter
                .into_iter()
                .map(|(key, value)| (key.as_ref().to_lowercase(), value.into()))
                .collect(),
        }
    }
}
