//! End-to-end pipeline tests: JSONL export in, month summaries and the
//! display rollup out.

use chrono::{DateTime, FixedOffset, TimeZone};
use kintai_cli::{config::Config, run, source::ExportFileSource};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

fn jst() -> FixedOffset {
    FixedOffset::east_opt(9 * 3600).unwrap()
}

fn write_export(dir: &Path, lines: &[&str]) -> std::path::PathBuf {
    let path = dir.join("messages.jsonl");
    let mut file = std::fs::File::create(&path).unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    path
}

fn config_for(dir: &Path, export: &Path) -> Config {
    Config {
        source_path: export.to_path_buf(),
        data_dir: dir.join("data"),
        ..Config::default()
    }
}

// Epochs (JST = UTC+9):
//   1579046400 = 2020-01-15T09:00 JST
//   1579077000 = 2020-01-15T17:30 JST
//   1579492800 = 2020-01-20T13:00 JST
//   1579500000 = 2020-01-20T15:00 JST
//   1580734800 = 2020-02-03T22:00 JST
const EXPORT: &[&str] = &[
    // newest-first delivery, the sequencer sorts
    r#"{"text": "開始", "ts": "1580734800.000500"}"#,
    r#"{"text": "終了 2020-01-20T15:00:00", "ts": "1579500000.000400"}"#,
    r#"{"text": "開始", "ts": "1579492800.000300"}"#,
    r#"{"text": "終了", "ts": "1579077000.000200"}"#,
    r#"{"text": "開始", "ts": "1579046400.000100"}"#,
];

fn now() -> DateTime<FixedOffset> {
    jst().with_ymd_and_hms(2020, 2, 10, 12, 0, 0).unwrap()
}

#[test]
fn full_run_writes_both_months_and_rollup() {
    let dir = tempfile::tempdir().unwrap();
    let export = write_export(dir.path(), EXPORT);
    let config = config_for(dir.path(), &export);
    let source = ExportFileSource::new(&export);

    let rollup = run::run(&config, &source, now()).unwrap();

    // Month files
    let jan: BTreeMap<String, f64> = serde_json::from_str(
        &std::fs::read_to_string(config.data_dir.join("2020-01.json")).unwrap(),
    )
    .unwrap();
    let feb: BTreeMap<String, f64> = serde_json::from_str(
        &std::fs::read_to_string(config.data_dir.join("2020-02.json")).unwrap(),
    )
    .unwrap();

    assert_eq!(jan.len(), 31);
    assert_eq!(feb.len(), 29);
    assert_eq!(jan["2020-01-15"], 8.5);
    // 13:00 to backdated 15:00
    assert_eq!(jan["2020-01-20"], 2.0);
    assert_eq!(jan["2020-01-16"], 0.0);
    // open session on a past day runs to 23:59:59
    assert!((feb["2020-02-03"] - 7199.0 / 3600.0).abs() < 1e-9);
    assert_eq!(feb["2020-02-04"], 0.0);

    // Rollup: [current, previous], cumulative prefix sums
    let display: kintai_types::Rollup = serde_json::from_str(
        &std::fs::read_to_string(config.data_dir.join("display.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(display, rollup);
    assert_eq!(display.updated_at, now());
    assert_eq!(display.months.len(), 2);
    assert_eq!(display.months[0].year_month, "2020-02");
    assert_eq!(display.months[1].year_month, "2020-01");
    assert_eq!(*display.months[1].cumulative_hours.last().unwrap(), 10.5);
    assert!(
        display.months[0]
            .cumulative_hours
            .windows(2)
            .all(|w| w[0] <= w[1])
    );
}

#[test]
fn run_is_idempotent_for_fixed_now() {
    let dir = tempfile::tempdir().unwrap();
    let export = write_export(dir.path(), EXPORT);
    let config = config_for(dir.path(), &export);
    let source = ExportFileSource::new(&export);

    let first = run::run(&config, &source, now()).unwrap();
    let second = run::run(&config, &source, now()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn corrupt_history_aborts_before_any_output() {
    let dir = tempfile::tempdir().unwrap();
    // two consecutive starts in January
    let export = write_export(
        dir.path(),
        &[
            r#"{"text": "開始", "ts": "1579046400"}"#,
            r#"{"text": "開始", "ts": "1579077000"}"#,
        ],
    );
    let config = config_for(dir.path(), &export);
    let source = ExportFileSource::new(&export);

    let err = run::run(&config, &source, now()).unwrap_err();
    assert!(err.to_string().contains("corrupt marker history"));
    // nothing is written on failure
    assert!(!config.data_dir.exists());
}

#[test]
fn unrecognized_marker_aborts_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let export = write_export(
        dir.path(),
        &[r#"{"text": "lunch", "ts": "1579046400"}"#],
    );
    let config = config_for(dir.path(), &export);
    let source = ExportFileSource::new(&export);

    let err = run::run(&config, &source, now()).unwrap_err();
    let chain = format!("{err:#}");
    assert!(chain.contains("invalid message"), "got: {chain}");
}

#[test]
fn months_with_no_messages_are_all_zero() {
    let dir = tempfile::tempdir().unwrap();
    let export = write_export(dir.path(), &[]);
    let config = config_for(dir.path(), &export);
    let source = ExportFileSource::new(&export);

    run::run(&config, &source, now()).unwrap();

    let feb: BTreeMap<String, f64> = serde_json::from_str(
        &std::fs::read_to_string(config.data_dir.join("2020-02.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(feb.len(), 29);
    assert!(feb.values().all(|h| *h == 0.0));
}
