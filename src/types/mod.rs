// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types shared by device bindings.
//!
//! # Types
//!
//! - [`DecimalValue`] - Exact decimal reading, scaled by a power of ten
//! - [`Scale`] - Power-of-ten divisor (1, 10, 100, 1000, 1 000 000)
//! - [`DeviceType`] - MAX! device type with its numeric code

mod decimal;
mod device_type;

pub use decimal::{DecimalValue, Scale};
pub use device_type::DeviceType;
