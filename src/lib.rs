// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `habtools` Lib - Configuration helpers for home-automation device bindings.
//!
//! Device bindings receive their configuration as plain strings. This library
//! turns those strings into typed values and reports precisely what is wrong
//! when they are malformed. Everything here is pure and synchronous: no
//! hardware access, no I/O, no shared state.
//!
//! # Features
//!
//! - **LED selections**: `"1|2|4-6|8-9"` into addressing instructions that
//!   respect the 16-LED transfer limit of LED strips
//! - **Line/position text**: `"TFNUM<213>Hello"` into a display line,
//!   position and text, with bounds validation
//! - **Device options**: case-insensitive option maps with typed getters
//! - **Scaled readings**: exact decimals from fixed-point sensor integers
//! - **Device types**: MAX! device type codes
//! - **Provider iteration**: visit the items of several binding providers
//!
//! # Quick Start
//!
//! ## LED selection
//!
//! ```
//! use habtools_lib::led::{parse_led_selection, LedInstruction};
//!
//! fn main() -> habtools_lib::Result<()> {
//!     let selection = parse_led_selection("1|2|4-6|8-9")?;
//!
//!     assert_eq!(selection.tracking_led(), Some(1));
//!     for instruction in selection.instructions() {
//!         match instruction {
//!             LedInstruction::Single(led) => println!("LED {led}"),
//!             LedInstruction::Range { start, count } => println!("{count} LEDs from {start}"),
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Line/position text
//!
//! ```
//! use habtools_lib::text::parse_line_position_text;
//!
//! fn main() -> habtools_lib::Result<()> {
//!     let parsed = parse_line_position_text("TFNUM<213>Hello", "TFNUM<", ">", 1, 2, 3, 19)?;
//!
//!     assert_eq!(parsed.line_number(), 2);
//!     assert_eq!(parsed.position(), 13);
//!     assert_eq!(parsed.text(), "Hello");
//!     Ok(())
//! }
//! ```
//!
//! ## Device options
//!
//! ```
//! use habtools_lib::config::DeviceOptions;
//! use habtools_lib::types::DecimalValue;
//!
//! fn main() -> habtools_lib::Result<()> {
//!     let options = DeviceOptions::from_json(r#"{"Threshold": "2.5", "Leds": "0-40"}"#)?;
//!
//!     let threshold = options.get_decimal("threshold")?.unwrap_or(DecimalValue::ZERO);
//!     assert_eq!(threshold.to_string(), "2.5");
//!
//!     let leds = options.get_led_selection("leds")?.unwrap_or_default();
//!     assert_eq!(leds.instructions().len(), 3);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod led;
pub mod provider;
pub mod text;
pub mod types;

pub use config::DeviceOptions;
pub use error::{Error, ParseError, Result, ValueError};
pub use led::{LedInstruction, LedSelection, MAX_LED_RANGE, parse_led_selection};
pub use provider::{BindingItem, BindingProvider, ConverterFactory, ProviderItemIterator};
pub use text::{LinePositionFormat, LinePositionText, parse_line_position_text};
pub use types::{DecimalValue, DeviceType, Scale};
