// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::Path;

use tokio::fs;

/// Timetable endpoint of the source system.
pub const DEFAULT_TIMETABLE_URL: &str = "http://planwe.pollub.pl/plan.php";

/// Download the raw timetable export for a group.
///
/// # Errors
///
/// Returns an error when the request fails or the endpoint answers
/// with a non-success status.
pub async fn fetch_remote(base_url: &str, group_id: &str) -> Result<String, Box<dyn Error>> {
    let resp = reqwest::Client::new()
        .get(base_url)
        .query(&[("type", "0"), ("id", group_id), ("cvsfile", "true"), ("wd", "10")])
        .send()
        .await?;

    if !resp.status().is_success() {
        return Err(format!("Timetable endpoint returned {}", resp.status()).into());
    }
    Ok(resp.text().await?)
}

/// Read a previously downloaded export from disk.
pub async fn read_local(path: &Path) -> Result<String, Box<dyn Error>> {
    fs::read_to_string(path)
        .await
        .map_err(|e| format!("Failed to read {}: {e}", path.display()).into())
}
