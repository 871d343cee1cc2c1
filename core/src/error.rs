// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Errors raised while parsing the timetable export.
///
/// A caption pattern failing to match is never an error: classification
/// falls back to keeping the event. Only a document with no event block
/// at all is fatal, and it aborts before anything is written.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document contains no event-start marker.
    #[error("no event blocks found in calendar document")]
    NoEvents,
}
