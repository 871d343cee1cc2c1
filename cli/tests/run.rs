// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end run from a local export file to the written calendar.

use planfix_cli::{Cli, run};

const SETTINGS: &str = r#"
group_id = "12345"

[travel]
weii = 20
random = 5

[[time_wishes]]
subject = "Analiza"
original_start = 80000
original_end = 93000
new_start = 90000
new_end = 103000
"#;

fn export() -> String {
    let event = |dtstart: &str, dtend: &str, summary: &str| {
        format!("BEGIN:VEVENT\nDTSTART:{dtstart}\nDTEND:{dtend}\nSUMMARY:{summary}\nEND:VEVENT\n")
    };
    format!(
        "BEGIN:VCALENDAR\nVERSION:2.0\n{}{}{}END:VCALENDAR",
        // Stale one-off exception, pinned to a date weeks away
        event("20260101T070000Z", "20260101T083000Z", "Obrona cywilna - 09.03 CI"),
        event("20260302T070000Z", "20260302T083000Z", "Analiza - tyg.1-4 E"),
        event("20260303T070000Z", "20260303T083000Z", "WF"),
    )
}

#[tokio::test]
async fn run_writes_corrected_calendar() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("plan.ics");
    let config = dir.path().join("settings.toml");
    let output = dir.path().join("newcal.ics");

    std::fs::write(&config, SETTINGS).unwrap();
    std::fs::write(&input, export()).unwrap();

    let cli = Cli {
        config,
        input: Some(input),
        output: output.clone(),
        url: None,
    };
    run(cli).await.expect("run failed");

    let out = std::fs::read_to_string(&output).unwrap();
    assert!(out.starts_with("BEGIN:VCALENDAR\nVERSION:2.0\n"));
    assert!(out.ends_with("END:VCALENDAR"));
    // The stale exception is gone, the survivors carry alarms
    assert!(!out.contains("Obrona cywilna"));
    assert!(out.contains("SUMMARY:Analiza - tyg.1-4 E"));
    assert!(out.contains("SUMMARY:WF"));
    assert_eq!(out.matches("BEGIN:VALARM").count(), 2);
}

#[tokio::test]
async fn run_bootstraps_settings_on_first_use() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("settings.toml");

    let cli = Cli {
        config: config.clone(),
        input: None,
        output: dir.path().join("newcal.ics"),
        url: None,
    };
    let err = run(cli).await.unwrap_err();
    assert!(err.to_string().contains("newly created settings"));
    assert!(config.exists());
}
