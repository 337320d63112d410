// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! LED selection value types.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ParseError;

/// Maximum number of LEDs the hardware can address in one instruction.
pub const MAX_LED_RANGE: u8 = 16;

/// One unit of LED addressing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LedInstruction {
    /// A single LED.
    Single(u16),
    /// A run of `count` consecutive LEDs starting at `start`.
    ///
    /// `count` is always within `1..=MAX_LED_RANGE`.
    Range {
        /// First LED of the run.
        start: u16,
        /// Number of LEDs in the run.
        count: u8,
    },
}

impl LedInstruction {
    /// Returns the first LED addressed by this instruction.
    #[must_use]
    pub const fn first_led(&self) -> u16 {
        match *self {
            Self::Single(led) => led,
            Self::Range { start, .. } => start,
        }
    }

    /// Returns how many LEDs this instruction addresses.
    #[must_use]
    pub const fn led_count(&self) -> u8 {
        match *self {
            Self::Single(_) => 1,
            Self::Range { count, .. } => count,
        }
    }

    /// Returns an iterator over every LED number addressed by this instruction.
    pub fn leds(&self) -> impl Iterator<Item = u16> + use<> {
        let first = u32::from(self.first_led());
        let count = u32::from(self.led_count());
        // Ranges are built from u16 endpoints, so every member fits in u16.
        (first..first + count).filter_map(|led| u16::try_from(led).ok())
    }
}

impl fmt::Display for LedInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Single(led) => write!(f, "{led}"),
            Self::Range { start, count } => {
                write!(f, "{start}-{}", u32::from(start) + u32::from(count) - 1)
            }
        }
    }
}

/// The parsed form of a LED selection string.
///
/// Instructions keep the order in which their LEDs appear in the input, since
/// that order drives the transfer sequence to the LED strip.
///
/// # Examples
///
/// ```
/// use habtools_lib::led::{LedInstruction, LedSelection};
///
/// let selection: LedSelection = "1|2|4-6|8-9".parse().unwrap();
///
/// assert_eq!(selection.tracking_led(), Some(1));
/// assert_eq!(selection.instructions()[2], LedInstruction::Range { start: 4, count: 3 });
/// assert_eq!(selection.leds().collect::<Vec<_>>(), vec![1, 2, 4, 5, 6, 8, 9]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct LedSelection {
    tracking_led: Option<u16>,
    instructions: Vec<LedInstruction>,
}

impl LedSelection {
    pub(crate) fn new(tracking_led: Option<u16>, instructions: Vec<LedInstruction>) -> Self {
        Self {
            tracking_led,
            instructions,
        }
    }

    /// Returns the LED used to report tracking feedback.
    ///
    /// This is the first LED named in the selection string, or `None` when
    /// the selection is empty.
    #[must_use]
    pub const fn tracking_led(&self) -> Option<u16> {
        self.tracking_led
    }

    /// Returns the addressing instructions in transfer order.
    #[must_use]
    pub fn instructions(&self) -> &[LedInstruction] {
        &self.instructions
    }

    /// Returns true if the selection addresses no LED.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Returns every addressed LED number, in transfer order.
    pub fn leds(&self) -> impl Iterator<Item = u16> + '_ {
        self.instructions.iter().flat_map(LedInstruction::leds)
    }

    /// Returns the total number of addressed LEDs.
    #[must_use]
    pub fn len_leds(&self) -> usize {
        self.instructions
            .iter()
            .map(|instruction| usize::from(instruction.led_count()))
            .sum()
    }
}

impl FromStr for LedSelection {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::parse_led_selection(s)
    }
}

impl fmt::Display for LedSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, instruction) in self.instructions.iter().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            write!(f, "{instruction}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_addresses_one_led() {
        let instruction = LedInstruction::Single(7);
        assert_eq!(instruction.first_led(), 7);
        assert_eq!(instruction.led_count(), 1);
        assert_eq!(instruction.leds().collect::<Vec<_>>(), vec![7]);
    }

    #[test]
    fn range_expands_to_consecutive_leds() {
        let instruction = LedInstruction::Range { start: 4, count: 3 };
        assert_eq!(instruction.leds().collect::<Vec<_>>(), vec![4, 5, 6]);
    }

    #[test]
    fn range_at_upper_bound_does_not_overflow() {
        let instruction = LedInstruction::Range {
            start: u16::MAX - 1,
            count: 2,
        };
        assert_eq!(
            instruction.leds().collect::<Vec<_>>(),
            vec![u16::MAX - 1, u16::MAX]
        );
        assert_eq!(instruction.to_string(), "65534-65535");
    }

    #[test]
    fn instruction_display() {
        assert_eq!(LedInstruction::Single(3).to_string(), "3");
        assert_eq!(
            LedInstruction::Range { start: 5, count: 16 }.to_string(),
            "5-20"
        );
    }

    #[test]
    fn empty_selection() {
        let selection = LedSelection::default();
        assert!(selection.is_empty());
        assert_eq!(selection.tracking_led(), None);
        assert_eq!(selection.len_leds(), 0);
        assert_eq!(selection.to_string(), "");
    }

    #[test]
    fn selection_display_joins_with_pipes() {
        let selection = LedSelection::new(
            Some(1),
            vec![
                LedInstruction::Single(1),
                LedInstruction::Range { start: 4, count: 3 },
            ],
        );
        assert_eq!(selection.to_string(), "1|4-6");
        assert_eq!(selection.len_leds(), 4);
    }

    #[test]
    fn instruction_serializes_externally_tagged() {
        let json = serde_json::to_value(LedInstruction::Range { start: 2, count: 4 }).unwrap();
        assert_eq!(json, serde_json::json!({ "range": { "start": 2, "count": 4 } }));

        let json = serde_json::to_value(LedInstruction::Single(9)).unwrap();
        assert_eq!(json, serde_json::json!({ "single": 9 }));
    }
}
