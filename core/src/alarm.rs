// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Derive a travel-time reminder from the location code at the end of
//! the caption and splice it into the event block.

use crate::document::EventBlock;

/// A building inferred from the caption's location code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Weii,
    Centech,
    Pentagon,
    Rdzewiak,
    Oxford,
    Mechaniczny,
    /// No known code matched.
    Random,
}

/// Caption tokens in check order; the first hit wins. Kept as an
/// ordered table so the priority between overlapping codes stays
/// visible and testable.
const LOCATION_RULES: &[(&str, Location)] = &[
    (" E", Location::Weii),
    (" CT", Location::Centech),
    (" PE", Location::Pentagon),
    (" CI", Location::Rdzewiak),
    (" Ox", Location::Oxford),
    (" Aula", Location::Mechaniczny),
    (" M", Location::Mechaniczny),
];

/// Resolve the caption's location code, falling back to
/// [`Location::Random`] when nothing matches.
pub fn detect_location(summary: &str) -> Location {
    LOCATION_RULES
        .iter()
        .find(|(token, _)| summary.contains(token))
        .map_or(Location::Random, |(_, location)| *location)
}

const ALARM_MARKER: &str = "BEGIN:VALARM";

/// Splice a reminder sub-block in front of the event terminator.
///
/// The insertion point is the block's second-to-last newline, leaving
/// the terminator line untouched. A block that already carries an alarm
/// is returned unchanged, so injection is idempotent; so is a block too
/// short to locate a terminator in.
pub fn inject_alarm(event: EventBlock, minutes: i64) -> EventBlock {
    let raw = event.raw();
    if raw.contains(ALARM_MARKER) {
        return event;
    }

    let bytes = raw.as_bytes();
    if bytes.len() < 2 {
        return event;
    }
    let Some(cut) = bytes[..bytes.len() - 1].iter().rposition(|&b| b == b'\n') else {
        return event;
    };

    let alarm = format!(
        "BEGIN:VALARM\nTRIGGER:-PT{minutes}M\nATTACH;VALUE=URI:Chord\nACTION:AUDIO\nEND:VALARM"
    );
    EventBlock::new(format!("{}{}{}", &raw[..=cut], alarm, &raw[cut..]))
}
