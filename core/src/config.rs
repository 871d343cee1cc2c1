// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use serde::Deserialize;

use crate::alarm::Location;
use crate::wishes::TimeWish;

/// Fallback term length, in weeks, bounding odd-week recurrences.
pub const DEFAULT_TERM_WEEKS: i64 = 30;

/// The user's settings document. Reading and writing the file is the
/// caller's concern; the core only consumes the typed values.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Timetable group identifier, as it appears in the export URL.
    pub group_id: String,

    /// Upper bound on term length in weeks.
    #[serde(default = "default_term_weeks")]
    pub term_weeks: i64,

    /// Travel lead time per building, in minutes.
    #[serde(default)]
    pub travel: TravelTimes,

    /// Start/end overrides, applied in order.
    #[serde(default)]
    pub time_wishes: Vec<TimeWish>,
}

/// Minutes to leave before an event, keyed by building.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct TravelTimes {
    pub pentagon: i64,
    pub weii: i64,
    pub centech: i64,
    pub oxford: i64,
    pub rdzewiak: i64,
    pub mechaniczny: i64,
    pub random: i64,
}

impl TravelTimes {
    pub fn minutes(&self, location: Location) -> i64 {
        match location {
            Location::Pentagon => self.pentagon,
            Location::Weii => self.weii,
            Location::Centech => self.centech,
            Location::Oxford => self.oxford,
            Location::Rdzewiak => self.rdzewiak,
            Location::Mechaniczny => self.mechaniczny,
            Location::Random => self.random,
        }
    }
}

fn default_term_weeks() -> i64 {
    DEFAULT_TERM_WEEKS
}
