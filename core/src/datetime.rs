// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{FixedOffset, NaiveDateTime, TimeZone, Utc};

/// Convert a UTC timestamp to local wall-clock time at `offset`.
///
/// The caller samples the offset once at process start, so an event on
/// the far side of a daylight-saving transition is shifted by today's
/// offset rather than the offset in force on its own date. Known
/// limitation, kept for parity with the source timetable tooling.
pub fn to_local(utc: NaiveDateTime, offset: FixedOffset) -> NaiveDateTime {
    Utc.from_utc_datetime(&utc).with_timezone(&offset).naive_local()
}
