// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! The sequential keep/drop-and-rewrite pass over a parsed timetable.
//!
//! Events must be walked in document order: the classifier carries the
//! current recurrence group and its first-seen start between
//! iterations, because consecutive blocks of the same group share a
//! reference date.

use chrono::{Datelike, FixedOffset, NaiveDateTime};

use crate::alarm;
use crate::config::Settings;
use crate::datetime;
use crate::document::{Calendar, EventBlock};
use crate::recurrence::{self, ClassifierState, Recurrence};
use crate::wishes;

/// Resolve every event of `calendar` against the current week: drop
/// stale one-off exceptions and off-week recurrence instances, apply
/// time wishes to the survivors and give each exactly one reminder
/// alarm. Block order is preserved.
pub fn fix_calendar(calendar: Calendar, settings: &Settings, offset: FixedOffset) -> Calendar {
    let mut state = ClassifierState::new();
    let mut kept = Vec::with_capacity(calendar.events.len());

    for event in calendar.events {
        if let Some(block) = resolve_event(event, settings, offset, &mut state) {
            kept.push(block);
        }
    }

    Calendar { header: calendar.header, events: kept }
}

/// Classify one event and, when it survives, rewrite it. Dropping an
/// instance is an expected control outcome, not a failure.
fn resolve_event(
    event: EventBlock,
    settings: &Settings,
    offset: FixedOffset,
    state: &mut ClassifierState,
) -> Option<EventBlock> {
    let summary = event.summary().unwrap_or_default().to_owned();
    tracing::debug!(summary = %summary, "classifying event");

    let local_start = event.start_utc().map(|utc| datetime::to_local(utc, offset));

    // One-off exceptions are pinned to the date in their caption; a
    // mismatch means the exception belongs to some other week.
    if let Some(exception) = recurrence::one_off(&summary) {
        return resolve_one_off(event, settings, &summary, exception, local_start);
    }

    let rule = Recurrence::parse(&summary);
    state.observe(rule.as_ref().map(Recurrence::name), local_start);

    if let Some(rule) = rule {
        if let (Some(start), Some(first)) = (local_start, state.first_seen()) {
            let week = recurrence::week_delta(first, start);
            if rule.includes(week, settings.term_weeks) {
                tracing::info!(group = rule.name(), week, "keeping recurring event");
            } else {
                tracing::info!(group = rule.name(), week, "dropping off-week instance");
                return None;
            }
        } else {
            // Without a start timestamp the instance cannot be placed
            // in the term, so it falls through to unconditional
            // inclusion.
            tracing::warn!(summary = %summary, "recurring caption without DTSTART, keeping as-is");
        }
    }

    Some(finish(event, settings, &summary))
}

fn resolve_one_off(
    event: EventBlock,
    settings: &Settings,
    summary: &str,
    exception: recurrence::OneOff,
    local_start: Option<NaiveDateTime>,
) -> Option<EventBlock> {
    match local_start {
        Some(start) if start.day() == exception.day && start.month() == exception.month => {
            tracing::info!(
                summary = %summary,
                day = exception.day,
                month = exception.month,
                "keeping single-date exception"
            );
            Some(finish(event, settings, summary))
        }
        Some(start) => {
            tracing::info!(
                summary = %summary,
                date = %start.date(),
                "dropping single-date exception outside its week"
            );
            None
        }
        None => {
            tracing::warn!(summary = %summary, "single-date caption without DTSTART, keeping as-is");
            Some(finish(event, settings, summary))
        }
    }
}

/// Rewrite a surviving block: time wishes first, then the reminder.
fn finish(event: EventBlock, settings: &Settings, summary: &str) -> EventBlock {
    let rewritten = wishes::apply_wishes(event, &settings.time_wishes);
    let location = alarm::detect_location(summary);
    alarm::inject_alarm(rewritten, settings.travel.minutes(location))
}
