// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::Path;

use planfix_core::Settings;
use tokio::fs;

const SETTINGS_TEMPLATE: &str = r#"# Timetable group identifier, as it appears in the export URL
group_id = "00000"

# A term is assumed to never run longer than this many weeks
term_weeks = 30

# Minutes of travel time to leave before an event, by building
[travel]
pentagon = 0
weii = 0
centech = 0
oxford = 0
rdzewiak = 0
mechaniczny = 0
random = 0

# Start/end overrides matched by caption substring, applied in order.
# Times are six-digit HHMMSS wall-clock readings.
# [[time_wishes]]
# subject = "Analiza"
# original_start = 80000
# original_end = 93000
# new_start = 90000
# new_end = 103000
"#;

/// Load the settings document, bootstrapping a commented template on
/// first run so the user has something to edit.
pub async fn parse_settings(path: &Path) -> Result<Settings, Box<dyn Error>> {
    if !fs::try_exists(path).await.unwrap_or(false) {
        fs::write(path, SETTINGS_TEMPLATE)
            .await
            .map_err(|e| format!("Failed to write settings template: {e}"))?;
        return Err(format!("See and edit the newly created settings at {}", path.display()).into());
    }

    let content = fs::read_to_string(path)
        .await
        .map_err(|e| format!("Failed to read settings file at {}: {e}", path.display()))?;
    let settings = toml::from_str(&content)
        .map_err(|e| format!("Failed to parse settings file: {e}"))?;
    Ok(settings)
}
