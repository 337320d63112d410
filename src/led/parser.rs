// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parser for LED selection strings.

use crate::error::ParseError;

use super::selection::{LedInstruction, LedSelection, MAX_LED_RANGE};

/// A token of a LED selection string.
enum LedToken {
    Single(u16),
    Range { start: u16, end: u16 },
}

/// Parses a LED selection string into addressing instructions.
///
/// # Format
///
/// The input is a list of tokens separated by `|`. Each token is trimmed and
/// is then one of:
/// - empty, which is ignored
/// - a LED number, e.g. `"4"`
/// - an inclusive range of LED numbers, e.g. `"4-6"`
///
/// The first LED named in the input becomes the tracking LED. For a range this
/// is its start. Ranges longer than [`MAX_LED_RANGE`] are split into
/// consecutive chunks of at most [`MAX_LED_RANGE`] LEDs.
///
/// # Examples
///
/// ```
/// use habtools_lib::led::{parse_led_selection, LedInstruction};
///
/// let selection = parse_led_selection("1|2|4-6|8-9").unwrap();
/// assert_eq!(selection.tracking_led(), Some(1));
/// assert_eq!(
///     selection.instructions(),
///     &[
///         LedInstruction::Single(1),
///         LedInstruction::Single(2),
///         LedInstruction::Range { start: 4, count: 3 },
///         LedInstruction::Range { start: 8, count: 2 },
///     ]
/// );
///
/// // An empty string selects nothing
/// let selection = parse_led_selection("").unwrap();
/// assert!(selection.is_empty());
/// assert_eq!(selection.tracking_led(), None);
/// ```
///
/// # Errors
///
/// Returns [`ParseError::InvalidToken`] if a token is neither a LED number nor
/// a range, and [`ParseError::InvalidRange`] if a range ends before it starts.
pub fn parse_led_selection(input: &str) -> Result<LedSelection, ParseError> {
    let mut tracking_led = None;
    let mut instructions = Vec::new();

    for token in input.split('|').map(str::trim) {
        tracing::trace!(token, "LED token");
        if token.is_empty() {
            tracing::trace!("Ignoring empty token");
            continue;
        }

        match parse_token(token)? {
            LedToken::Single(led) => {
                if tracking_led.is_none() {
                    tracking_led = Some(led);
                }
                instructions.push(LedInstruction::Single(led));
            }
            LedToken::Range { start, end } => {
                tracing::debug!(start, end, "Found LED range");
                if tracking_led.is_none() {
                    tracking_led = Some(start);
                }
                push_range(&mut instructions, start, end);
            }
        }
    }

    Ok(LedSelection::new(tracking_led, instructions))
}

fn parse_token(token: &str) -> Result<LedToken, ParseError> {
    let invalid = || ParseError::InvalidToken {
        token: token.to_string(),
    };

    let Some((start, end)) = token.split_once('-') else {
        return token.parse().map(LedToken::Single).map_err(|_| invalid());
    };

    let start: u16 = start.trim().parse().map_err(|_| invalid())?;
    let end: u16 = end.trim().parse().map_err(|_| invalid())?;
    if end < start {
        return Err(ParseError::InvalidRange {
            token: token.to_string(),
            start,
            end,
        });
    }

    Ok(LedToken::Range { start, end })
}

/// Appends `start..=end` as chunks of at most [`MAX_LED_RANGE`] LEDs.
fn push_range(instructions: &mut Vec<LedInstruction>, start: u16, end: u16) {
    let mut chunk_start = start;
    loop {
        let remaining = end - chunk_start;
        let count = u8::try_from(remaining)
            .map_or(MAX_LED_RANGE, |rest| rest.saturating_add(1).min(MAX_LED_RANGE));
        tracing::trace!(start = chunk_start, count, "Adding LED range chunk");
        instructions.push(LedInstruction::Range {
            start: chunk_start,
            count,
        });

        // Last LED of this chunk, never past `end`.
        let chunk_end = chunk_start + (u16::from(count) - 1);
        if chunk_end == end {
            break;
        }
        chunk_start = chunk_end + 1;
    }
}
