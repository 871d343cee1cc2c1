// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Classify what an event caption says about when the event recurs.
//!
//! The rule is not structured data: the export embeds it in the
//! human-readable caption, as a digit range (`"... - tyg.3-5"`), a
//! Roman-numeral interval (`"... - tyg.II"`) or a one-off date
//! (`"... - 05.03"`). Each caption is parsed exactly once into a tagged
//! descriptor; the inclusion test is a separate pure function so both
//! halves stay independently testable.

use std::sync::OnceLock;

use chrono::NaiveDateTime;
use regex::Regex;

use crate::roman;

/// A one-off exception pinned to a `DD.MM` date in the caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OneOff {
    pub day: u32,
    pub month: u32,
}

/// Match the trailing `"- DD.MM"` single-date pattern.
pub fn one_off(summary: &str) -> Option<OneOff> {
    const RE: &str = r"- (\d{2})\.(\d{2})";
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let re = REGEX.get_or_init(|| Regex::new(RE).unwrap());

    let c = re.captures(summary)?;
    let day = c.get(1)?.as_str().parse().ok()?;
    let month = c.get(2)?.as_str().parse().ok()?;
    Some(OneOff { day, month })
}

/// A caption-derived recurrence rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recurrence {
    /// Occurs on weeks `low..=high` of the term.
    WeekRange { name: String, low: i64, high: i64 },

    /// Occurs every `period` weeks; a period of one means the odd weeks
    /// of the term (the export's biweekly convention).
    EveryNWeeks { name: String, period: i64 },
}

impl Recurrence {
    /// Parse a caption into a recurrence descriptor. Not matching is a
    /// normal outcome, never an error.
    pub fn parse(summary: &str) -> Option<Self> {
        const RANGE: &str = r"^(.*?)- tyg\.(\d+)-(\d+)";
        static RANGE_REGEX: OnceLock<Regex> = OnceLock::new();
        let range = RANGE_REGEX.get_or_init(|| Regex::new(RANGE).unwrap());

        if let Some(c) = range.captures(summary) {
            return Some(Self::WeekRange {
                name: c[1].to_string(),
                low: c[2].parse().ok()?,
                high: c[3].parse().ok()?,
            });
        }

        // Some captions use Roman numerals for the interval instead.
        const INTERVAL: &str = r"^(.*?)- tyg\.([MDCLXVI]+)";
        static INTERVAL_REGEX: OnceLock<Regex> = OnceLock::new();
        let interval = INTERVAL_REGEX.get_or_init(|| Regex::new(INTERVAL).unwrap());

        interval.captures(summary).map(|c| Self::EveryNWeeks {
            name: c[1].to_string(),
            period: roman::decode(&c[2]),
        })
    }

    /// The caption prefix naming the recurrence group.
    pub fn name(&self) -> &str {
        match self {
            Self::WeekRange { name, .. } | Self::EveryNWeeks { name, .. } => name,
        }
    }

    /// Whether the instance on week `week_delta` of the term occurs.
    pub fn includes(&self, week_delta: i64, term_weeks: i64) -> bool {
        match self {
            Self::WeekRange { low, high, .. } => (*low..=*high).contains(&week_delta),
            Self::EveryNWeeks { period: 1, .. } => {
                week_delta % 2 == 1 && (1..term_weeks).contains(&week_delta)
            }
            Self::EveryNWeeks { period, .. } => *period != 0 && week_delta % period == 0,
        }
    }
}

/// One-based week offset between a group's first instance and the
/// current instance. The added week compensates for comparing instances
/// that fall inside the reference week itself.
pub fn week_delta(first: NaiveDateTime, current: NaiveDateTime) -> i64 {
    let delta = (current - first).num_days() + 7;
    (delta + 6).div_euclid(7)
}

/// Carried classifier state for the sequential pass: the name of the
/// recurrence group currently being walked and the local start of its
/// first-seen instance. The anchor is only valid across a contiguous
/// run of events sharing the group name and resets whenever the name
/// changes.
#[derive(Debug, Clone, Default)]
pub struct ClassifierState {
    group: Option<String>,
    first_seen: Option<NaiveDateTime>,
}

impl ClassifierState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record which group the current event belongs to. A name change
    /// (including to or from "no group") anchors the group at
    /// `local_start`.
    pub fn observe(&mut self, name: Option<&str>, local_start: Option<NaiveDateTime>) {
        if self.group.as_deref() != name {
            self.group = name.map(str::to_owned);
            self.first_seen = local_start;
        }
    }

    /// Local start of the current group's first instance.
    pub fn first_seen(&self) -> Option<NaiveDateTime> {
        self.first_seen
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Days, NaiveDate};

    use super::*;

    fn monday_8am() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 2)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_one_off_caption() {
        assert_eq!(one_off("Fizyka - 05.03 PE"), Some(OneOff { day: 5, month: 3 }));
        assert_eq!(one_off("Fizyka - tyg.1-4 PE"), None);
        assert_eq!(one_off("Fizyka PE"), None);
    }

    #[test]
    fn test_parse_week_range() {
        let rule = Recurrence::parse("Analiza matematyczna - tyg.3-5 E").unwrap();
        assert_eq!(
            rule,
            Recurrence::WeekRange { name: "Analiza matematyczna ".to_string(), low: 3, high: 5 }
        );
    }

    #[test]
    fn test_parse_roman_interval() {
        let rule = Recurrence::parse("Seminarium - tyg.II CT").unwrap();
        assert_eq!(
            rule,
            Recurrence::EveryNWeeks { name: "Seminarium ".to_string(), period: 2 }
        );
    }

    #[test]
    fn test_parse_plain_caption_is_none() {
        assert!(Recurrence::parse("Wychowanie fizyczne").is_none());
        assert!(Recurrence::parse("Fizyka - 05.03 PE").is_none());
    }

    #[test]
    fn test_week_delta_is_one_based() {
        let first = monday_8am();
        assert_eq!(week_delta(first, first), 1);
        assert_eq!(week_delta(first, first + Days::new(7)), 2);
        assert_eq!(week_delta(first, first + Days::new(14)), 3);
        assert_eq!(week_delta(first, first + Days::new(28)), 5);
        assert_eq!(week_delta(first, first + Days::new(35)), 6);
    }

    #[test]
    fn test_week_range_inclusion() {
        let rule = Recurrence::parse("Analiza - tyg.3-5 E").unwrap();
        assert!(!rule.includes(1, 30));
        assert!(!rule.includes(2, 30));
        assert!(rule.includes(3, 30));
        assert!(rule.includes(5, 30));
        assert!(!rule.includes(6, 30));
    }

    #[test]
    fn test_interval_one_keeps_odd_weeks_within_term() {
        let rule = Recurrence::parse("Seminarium - tyg.I CT").unwrap();
        assert!(rule.includes(1, 30));
        assert!(!rule.includes(2, 30));
        assert!(rule.includes(29, 30));
        // Odd but past the configured term length
        assert!(!rule.includes(31, 30));
        // Shortened term
        assert!(!rule.includes(29, 20));
    }

    #[test]
    fn test_interval_two_keeps_divisible_weeks() {
        let rule = Recurrence::parse("Laboratorium - tyg.II Ox").unwrap();
        assert!(!rule.includes(1, 30));
        assert!(rule.includes(2, 30));
        assert!(!rule.includes(3, 30));
        assert!(rule.includes(4, 30));
    }

    #[test]
    fn test_state_anchors_on_group_change() {
        let mut state = ClassifierState::new();
        let first = monday_8am();
        state.observe(Some("Analiza "), Some(first));
        assert_eq!(state.first_seen(), Some(first));

        // Same group a week later keeps the anchor
        state.observe(Some("Analiza "), Some(first + Days::new(7)));
        assert_eq!(state.first_seen(), Some(first));

        // A different group re-anchors
        let other = first + Days::new(1);
        state.observe(Some("Fizyka "), Some(other));
        assert_eq!(state.first_seen(), Some(other));

        // A pattern-less event breaks group continuity
        state.observe(None, Some(first));
        assert_eq!(state.first_seen(), Some(first));
        state.observe(Some("Fizyka "), Some(first + Days::new(2)));
        assert_eq!(state.first_seen(), Some(first + Days::new(2)));
    }
}
