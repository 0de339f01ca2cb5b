use std::fs;
use std::path::PathBuf;

use wintrace_testing::{session_context, steamvr_event, unknown_event, vsync_event};
use wintrace_types::{Error, WdatConfig};
use wintrace_wdat::{EventOutcome, WDAT_VERSION, WdatEntryId, WdatWriter};

fn out_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join("out.wdat")
}

#[test]
fn end_to_end_stream_matches_the_contract() {
    let dir = tempfile::tempdir().unwrap();
    let path = out_path(&dir);

    let mut writer = WdatWriter::create(&path, WdatConfig::default()).unwrap();
    writer.write_header().unwrap();
    writer.write_context(&session_context()).unwrap();

    let outcomes = [
        writer.write_event(&steamvr_event("ok")).unwrap(),
        writer.write_event(&vsync_event("0x10", "2", "0xFF")).unwrap(),
        writer.write_event(&unknown_event()).unwrap(),
    ];
    writer.close().unwrap();

    assert!(matches!(
        outcomes[0],
        EventOutcome::Written(WdatEntryId::SteamVr)
    ));
    assert!(matches!(
        outcomes[1],
        EventOutcome::Written(WdatEntryId::Vsync)
    ));
    assert!(matches!(outcomes[2], EventOutcome::Rejected));

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    // header + context + two accepted events; the reject adds nothing.
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], format!("id=`0` version=`{}`", WDAT_VERSION));
    assert!(lines[1].starts_with("id=`1` file=`capture.jsonl` os_version=`10.0.19045` num_cpu=`8` start_time=`"));
    assert!(lines[2].contains("vrevent=`ok`"));
    assert!(lines[3].contains("adapter=`16` display=`2` address=`255`"));
}

#[test]
fn header_is_always_the_first_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = out_path(&dir);

    let mut writer = WdatWriter::create(&path, WdatConfig::default()).unwrap();
    writer.write_header().unwrap();
    writer.close().unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with(&format!("id=`0` version=`{}`", WDAT_VERSION)));
}

#[test]
fn writes_out_of_stage_fail() {
    let dir = tempfile::tempdir().unwrap();

    let mut writer = WdatWriter::create(&out_path(&dir), WdatConfig::default()).unwrap();

    // Context and events before the header are sequencing bugs.
    let err = writer.write_context(&session_context()).unwrap_err();
    assert!(matches!(err, Error::StreamState { .. }), "got: {}", err);
    let err = writer.write_event(&steamvr_event("ok")).unwrap_err();
    assert!(matches!(err, Error::StreamState { .. }), "got: {}", err);

    writer.write_header().unwrap();
    let err = writer.write_header().unwrap_err();
    assert!(matches!(err, Error::StreamState { .. }), "got: {}", err);

    let err = writer.write_event(&steamvr_event("ok")).unwrap_err();
    assert!(matches!(err, Error::StreamState { .. }), "got: {}", err);
}

#[test]
fn malformed_event_is_skipped_and_the_stream_continues() {
    let dir = tempfile::tempdir().unwrap();
    let path = out_path(&dir);

    let mut writer = WdatWriter::create(&path, WdatConfig::default()).unwrap();
    writer.write_header().unwrap();
    writer.write_context(&session_context()).unwrap();

    let skipped = writer
        .write_event(&vsync_event("junk", "2", "0xFF"))
        .unwrap();
    match skipped {
        EventOutcome::Skipped(err) => assert!(err.is_event_scoped()),
        other => panic!("expected skip, got {:?}", other),
    }

    let written = writer.write_event(&steamvr_event("still fine")).unwrap();
    assert!(matches!(
        written,
        EventOutcome::Written(WdatEntryId::SteamVr)
    ));
    writer.close().unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 3);
    assert!(!text.contains("junk"));
    assert!(text.contains("vrevent=`still fine`"));
}

#[test]
fn flush_makes_written_lines_durable() {
    let dir = tempfile::tempdir().unwrap();
    let path = out_path(&dir);

    let mut writer = WdatWriter::create(&path, WdatConfig::default()).unwrap();
    writer.write_header().unwrap();
    writer.write_context(&session_context()).unwrap();
    writer.write_event(&steamvr_event("ok")).unwrap();
    writer.flush().unwrap();

    // The writer is still open; everything written so far must be on disk.
    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 3);

    writer.close().unwrap();
}

#[test]
fn create_truncates_a_previous_run() {
    let dir = tempfile::tempdir().unwrap();
    let path = out_path(&dir);
    fs::write(&path, "stale contents\n").unwrap();

    let mut writer = WdatWriter::create(&path, WdatConfig::default()).unwrap();
    writer.write_header().unwrap();
    writer.close().unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(!text.contains("stale"));
    assert_eq!(text.lines().count(), 1);
}

#[test]
fn create_failure_reports_io() {
    let dir = tempfile::tempdir().unwrap();
    let missing_dir = dir.path().join("no-such-dir").join("out.wdat");

    let err = WdatWriter::create(&missing_dir, WdatConfig::default()).unwrap_err();
    assert!(matches!(err, Error::Io(_)), "got: {}", err);
    assert!(!err.is_event_scoped());
}
