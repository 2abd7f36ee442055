//! End-to-end run of the log processor over the public API, covering the
//! lifetime of one dated log file: first run, an appended delta, and a
//! rotation.
use std::fs;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::Result;
use weblog_alert::processor::{log_path_for_date, process_logs, ProcessorConfig};
use weblog_alert::record::ErrorEvent;
use weblog_alert::sink::NotifySink;
use weblog_alert::state::OffsetStore;

#[derive(Default)]
struct RecordingSink {
    events: Vec<ErrorEvent>,
}
impl NotifySink for RecordingSink {
    fn notify(&mut self, event: &ErrorEvent) -> Result<()> {
        self.events.push(event.clone());
        Ok(())
    }
}

fn config(dir: &Path) -> ProcessorConfig {
    ProcessorConfig { log_dir: dir.to_path_buf(), webhook_url: String::from("") }
}

#[test]
fn full_log_lifecycle_first_run_append_and_rotation() {
    let dir = tempfile::tempdir().unwrap();
    let date = "2025-08-29";
    let log_path = log_path_for_date(dir.path(), date);
    let mut sink = RecordingSink::default();

    // run before the log file exists: clean no-op, no state file
    let summary = process_logs(&config(dir.path()), date, &mut sink).unwrap();
    assert_eq!(summary.lines_read, 0);
    assert!(!OffsetStore::for_log(&log_path).path.exists());

    // first run over a fresh file
    fs::write(&log_path, concat!(
        r#"{"status":200,"request_uri":"/"}"#, "\n",
        r#"{"status":"502","request_uri":"/api/posts","remote_addr":"10.0.0.7"}"#, "\n",
        r#"{"status":404,"request_uri":"/favicon.ico"}"#, "\n",
    )).unwrap();
    let summary = process_logs(&config(dir.path()), date, &mut sink).unwrap();
    assert_eq!(summary.lines_read, 3);
    assert_eq!(summary.notifications_sent, 1);
    assert_eq!(sink.events.len(), 1);
    assert_eq!(sink.events[0].status, 502);
    assert_eq!(sink.events[0].client, "10.0.0.7");
    let first_offset = OffsetStore::for_log(&log_path).load();
    assert_eq!(first_offset, fs::metadata(&log_path).unwrap().len());

    // append a delta; only the new lines are read
    let mut file = OpenOptions::new().append(true).open(&log_path).unwrap();
    file.write_all(concat!(
        r#"{"status":301,"request_uri":"/old"}"#, "\n",
        r#"{"status":500,"request_uri":"/login"}"#, "\n",
    ).as_bytes()).unwrap();
    drop(file);
    let summary = process_logs(&config(dir.path()), date, &mut sink).unwrap();
    assert_eq!(summary.lines_read, 2);
    assert_eq!(summary.notifications_sent, 1);
    assert_eq!(sink.events.last().unwrap().uri, "/login");
    assert!(OffsetStore::for_log(&log_path).load() > first_offset);

    // replay with no new content: nothing happens
    let summary = process_logs(&config(dir.path()), date, &mut sink).unwrap();
    assert_eq!(summary.lines_read, 0);
    assert_eq!(sink.events.len(), 2);

    // rotation: the file shrinks below the persisted offset
    fs::write(&log_path, concat!(
        r#"{"status":503,"request_uri":"/after-rotation"}"#, "\n",
    )).unwrap();
    let summary = process_logs(&config(dir.path()), date, &mut sink).unwrap();
    assert_eq!(summary.lines_read, 1);
    assert_eq!(sink.events.last().unwrap().uri, "/after-rotation");
    assert_eq!(OffsetStore::for_log(&log_path).load(), fs::metadata(&log_path).unwrap().len());
}
