// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Split the raw export into a header and atomic event blocks, and glue
//! the surviving blocks back together. Blocks stay opaque text spans;
//! fields are extracted on demand and transforms always produce a new
//! block, so the round trip is byte-exact when nothing is rewritten.

use std::sync::OnceLock;

use chrono::NaiveDateTime;
use regex::Regex;

use crate::error::Error;

const EVENT_START: &str = "BEGIN:VEVENT";
const CLOSING_MARKER: &str = "END:VCALENDAR";

const START_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// A parsed timetable document: preamble plus event blocks in document
/// order. Order is significant and preserved on output.
#[derive(Debug, Clone)]
pub struct Calendar {
    /// Everything up to the first event-start marker, marker stripped.
    pub header: String,

    /// Every event span, in document order.
    pub events: Vec<EventBlock>,
}

impl Calendar {
    /// Split a raw export into header and event blocks.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoEvents`] when the document carries no
    /// event-start marker (malformed or empty export).
    pub fn parse(text: &str) -> Result<Self, Error> {
        let start = text.find(EVENT_START).ok_or(Error::NoEvents)?;
        let header = text[..start].to_string();

        const RE: &str = r"(?s)BEGIN:VEVENT.*?END:VEVENT\n";
        static REGEX: OnceLock<Regex> = OnceLock::new();
        let re = REGEX.get_or_init(|| Regex::new(RE).unwrap());

        let events = re
            .find_iter(text)
            .map(|span| EventBlock::new(span.as_str()))
            .collect();

        Ok(Self { header, events })
    }

    /// Concatenate header, blocks in order and the closing marker.
    pub fn assemble(&self) -> String {
        let blocks: usize = self.events.iter().map(|e| e.raw().len()).sum();
        let mut out = String::with_capacity(self.header.len() + blocks + CLOSING_MARKER.len());
        out.push_str(&self.header);
        for event in &self.events {
            out.push_str(event.raw());
        }
        out.push_str(CLOSING_MARKER);
        out
    }
}

/// One atomic calendar entry, kept as the delimited text span it was
/// cut from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventBlock {
    raw: String,
}

impl EventBlock {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The caption line, without the property name.
    pub fn summary(&self) -> Option<&str> {
        const RE: &str = r"SUMMARY:([^\r\n]*)";
        static REGEX: OnceLock<Regex> = OnceLock::new();
        let re = REGEX.get_or_init(|| Regex::new(RE).unwrap());
        re.captures(&self.raw)
            .map(|c| c.get(1).map_or("", |m| m.as_str()))
    }

    /// The UTC start timestamp, when present and well-formed.
    pub fn start_utc(&self) -> Option<NaiveDateTime> {
        const RE: &str = r"DTSTART:([^\r\n]*)";
        static REGEX: OnceLock<Regex> = OnceLock::new();
        let re = REGEX.get_or_init(|| Regex::new(RE).unwrap());
        let c = re.captures(&self.raw)?;
        NaiveDateTime::parse_from_str(c.get(1)?.as_str(), START_FORMAT).ok()
    }
}
