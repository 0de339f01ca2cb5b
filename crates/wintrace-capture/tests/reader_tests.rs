use wintrace_capture::CaptureReader;
use wintrace_testing::{
    capture_event_line, capture_session_line, session_context, steamvr_event, unknown_event,
    vsync_event, write_capture_file,
};
use wintrace_types::Opcode;

#[test]
fn reads_session_context_then_events_in_arrival_order() {
    let dir = tempfile::tempdir().unwrap();
    let dump = dir.path().join("capture.jsonl");
    let events = vec![
        steamvr_event("ok"),
        vsync_event("0x10", "2", "0xFF"),
        unknown_event(),
    ];
    write_capture_file(&dump, &session_context(), &events).unwrap();

    let reader = CaptureReader::open(&dump).unwrap();
    let context = reader.context().clone();
    assert_eq!(context.file, "capture.jsonl");
    assert_eq!(context.os_version, "10.0.19045");
    assert_eq!(context.num_cpu, 8);

    let read: Vec<_> = reader.collect::<Result<_, _>>().unwrap();
    assert_eq!(read.len(), 3);
    assert_eq!(read[0].provider, "SteamVR");
    assert_eq!(read[0].opcode, Opcode::Info);
    assert_eq!(read[0].payload_named("Event"), Some("ok"));
    assert_eq!(read[1].ename, "VSyncInterrupt");
    assert_eq!(read[1].payload_string(0), Some("0x10"));
    assert_eq!(read[2].provider, "Mystery");
}

#[test]
fn dump_path_stands_in_for_missing_file_field() {
    let dir = tempfile::tempdir().unwrap();
    let dump = dir.path().join("capture.jsonl");
    let session =
        r#"{"os_version":"10.0.19045","num_cpu":4,"start_time":"2024-03-01T12:00:00Z","end_time":"2024-03-01T12:00:30Z"}"#;
    std::fs::write(&dump, format!("{}\n", session)).unwrap();

    let reader = CaptureReader::open(&dump).unwrap();
    assert_eq!(reader.context().file, dump.display().to_string());
    assert_eq!(reader.count(), 0);
}

#[test]
fn blank_lines_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let dump = dir.path().join("capture.jsonl");
    let content = format!(
        "{}\n\n{}\n\n",
        capture_session_line(&session_context()),
        capture_event_line(&steamvr_event("ok")),
    );
    std::fs::write(&dump, content).unwrap();

    let reader = CaptureReader::open(&dump).unwrap();
    assert_eq!(reader.count(), 1);
}

#[test]
fn malformed_event_line_reports_line_number() {
    let dir = tempfile::tempdir().unwrap();
    let dump = dir.path().join("capture.jsonl");
    let content = format!("{}\n{{not json}}\n", capture_session_line(&session_context()));
    std::fs::write(&dump, content).unwrap();

    let mut reader = CaptureReader::open(&dump).unwrap();
    let err = reader.next().unwrap().unwrap_err();
    assert!(err.to_string().contains(":2"), "got: {}", err);
}

#[test]
fn empty_dump_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let dump = dir.path().join("capture.jsonl");
    std::fs::write(&dump, "").unwrap();

    let err = CaptureReader::open(&dump).unwrap_err();
    assert!(err.to_string().contains("empty"), "got: {}", err);
}

#[test]
fn missing_dump_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let dump = dir.path().join("nope.jsonl");

    let err = CaptureReader::open(&dump).unwrap_err();
    assert!(err.to_string().contains("nope.jsonl"), "got: {}", err);
}
