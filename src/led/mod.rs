// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! LED selection strings.
//!
//! LED strip bindings are configured with a compact notation naming the LEDs
//! to switch: a pipe separated list of LED numbers and inclusive ranges, e.g.
//! `"0|1|4-6|8-9"`. This module turns such a string into the list of
//! addressing instructions the hardware accepts.
//!
//! The LED strip API can address at most [`MAX_LED_RANGE`] LEDs in a single
//! transfer, so longer ranges are split into consecutive chunks.
//!
//! # Examples
//!
//! ```
//! use habtools_lib::led::{parse_led_selection, LedInstruction};
//!
//! let selection = parse_led_selection("5-25").unwrap();
//! assert_eq!(selection.tracking_led(), Some(5));
//! assert_eq!(
//!     selection.instructions(),
//!     &[
//!         LedInstruction::Range { start: 5, count: 16 },
//!         LedInstruction::Range { start: 21, count: 5 },
//!     ]
//! );
//! ```

mod parser;
mod selection;

pub use parser::parse_led_selection;
pub use selection::{LedInstruction, LedSelection, MAX_LED_RANGE};
