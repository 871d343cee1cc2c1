// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Resolve which recurring class events actually occur in the current
//! week and rewrite them: parse the recurrence rule embedded in each
//! event caption, keep or drop the instance, apply user time overrides,
//! and splice in a location-aware reminder alarm.

mod alarm;
mod config;
mod datetime;
mod document;
mod error;
mod fix;
mod recurrence;
mod roman;
mod wishes;

pub use crate::alarm::{Location, detect_location, inject_alarm};
pub use crate::config::{DEFAULT_TERM_WEEKS, Settings, TravelTimes};
pub use crate::datetime::to_local;
pub use crate::document::{Calendar, EventBlock};
pub use crate::error::Error;
pub use crate::fix::fix_calendar;
pub use crate::recurrence::{ClassifierState, OneOff, Recurrence, one_off, week_delta};
pub use crate::roman::decode as decode_roman;
pub use crate::wishes::{TimeWish, apply_wishes};
