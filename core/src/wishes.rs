// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use serde::Deserialize;

use crate::document::EventBlock;

/// A user-declared start/end override, matched by caption substring.
/// Times are six-digit `HHMMSS` wall-clock readings.
#[derive(Debug, Clone, Deserialize)]
pub struct TimeWish {
    pub subject: String,
    pub original_start: u32,
    pub original_end: u32,
    pub new_start: u32,
    pub new_end: u32,
}

// The export serializes local wall-clock time as UTC, which lands one
// or two hours below the nominal reading depending on the daylight rule
// in force. Each boundary is therefore tried at both bases.
const SERIALIZATION_BASES: [i64; 2] = [10_000, 20_000];

/// Apply every wish whose subject occurs in the event caption, in
/// configuration order. Later wishes may re-rewrite earlier output; a
/// base that is absent from the block is a no-op.
pub fn apply_wishes(event: EventBlock, wishes: &[TimeWish]) -> EventBlock {
    let summary = event.summary().unwrap_or_default().to_owned();
    let mut raw = event.raw().to_owned();

    for wish in wishes.iter().filter(|w| summary.contains(&w.subject)) {
        let boundaries = [
            (wish.original_start, wish.new_start),
            (wish.original_end, wish.new_end),
        ];
        for (original, new) in boundaries {
            for base in SERIALIZATION_BASES {
                raw = raw.replace(&shifted(original, base), &shifted(new, base));
            }
        }
        tracing::info!(subject = %wish.subject, "rewrote start and end times as requested");
    }

    EventBlock::new(raw)
}

fn shifted(time: u32, base: i64) -> String {
    format!("{:06}", i64::from(time) - base)
}
