use std::{fs, io};

use tempfile::tempdir;

use crate::{document::Document, Error};

fn message(err: &Error) -> String {
	let mut out = Vec::new();
	err.write_message(&mut out).unwrap();
	String::from_utf8(out).unwrap()
}

#[test]
fn missing_log_is_a_clean_exit() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("Chat Log for Cursed.html");

	let err = Error::from(Document::open(&path).unwrap_err());
	assert_eq!(message(&err), format!("Error: File '{}' not found.\n", path.display()));
	assert!(err.is_clean_exit());
}

#[test]
fn unreadable_log_is_a_failure() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("log.html");
	fs::write(&path, b"<html><body>\xff\xfe</body></html>").unwrap();

	let err = Error::from(Document::open(&path).unwrap_err());
	let message = message(&err);
	assert!(message.starts_with("An unexpected error occurred: unable to parse '"));
	assert!(message.contains(&path.display().to_string()));
	assert!(message.ends_with('\n'));
	assert_eq!(message.lines().count(), 1);
	assert!(!err.is_clean_exit());
}

#[test]
fn failed_report_is_a_failure() {
	let err = Error::from(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
	assert_eq!(message(&err), "An unexpected error occurred: unable to write report: pipe closed\n");
	assert!(!err.is_clean_exit());
}
