// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! The external collaborators around the core engine: settings
//! read/bootstrap, timetable retrieval, logging and the final file
//! write.

mod cli;
mod config;
mod source;

pub use crate::cli::Cli;
pub use crate::config::parse_settings;
pub use crate::source::{DEFAULT_TIMETABLE_URL, fetch_remote, read_local};

use std::error::Error;

use chrono::Local;
use planfix_core::{Calendar, fix_calendar};

/// Fetch, fix and write the timetable. A fatal parse aborts before
/// anything is written; the output itself is a single buffered write.
pub async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let settings = config::parse_settings(&cli.config).await?;

    let text = match &cli.input {
        Some(path) => {
            tracing::info!(path = %path.display(), "reading local timetable export");
            source::read_local(path).await?
        }
        None => {
            let base = cli.url.as_deref().unwrap_or(DEFAULT_TIMETABLE_URL);
            tracing::info!(group_id = %settings.group_id, "downloading timetable for cleanup and fixes");
            source::fetch_remote(base, &settings.group_id).await?
        }
    };

    let calendar = Calendar::parse(&text)?;
    tracing::debug!(events = calendar.events.len(), "parsed timetable export");

    // Sampled once; events past a DST switch get today's offset.
    let offset = *Local::now().offset();
    let fixed = fix_calendar(calendar, &settings, offset);

    tracing::info!(
        events = fixed.events.len(),
        path = %cli.output.display(),
        "writing corrected calendar"
    );
    tokio::fs::write(&cli.output, fixed.assemble()).await?;
    Ok(())
}
