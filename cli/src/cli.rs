// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use clap::Parser;

/// Command-line interface.
#[derive(Debug, Clone, Parser)]
#[command(name = "planfix", version, about = "Normalize a university timetable export into a corrected, term-accurate calendar")]
pub struct Cli {
    /// Path to the settings file
    #[arg(short, long, default_value = "settings.toml")]
    pub config: PathBuf,

    /// Process a local timetable export instead of downloading one
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Where to write the corrected calendar
    #[arg(short, long, default_value = "newcal.ics")]
    pub output: PathBuf,

    /// Override the timetable endpoint
    #[arg(long)]
    pub url: Option<String>,
}
