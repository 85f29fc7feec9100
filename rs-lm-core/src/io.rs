use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{LmError, Result};

/// Reads a corpus file and returns its full content.
///
/// - Reads the entire file into memory
/// - Line breaks are kept: they are characters like any other and windows
///   are allowed to span lines
pub fn read_corpus<P: AsRef<Path>>(filename: P) -> Result<String> {
	let path = filename.as_ref();
	let mut contents = String::new();
	File::open(path)
		.and_then(|mut file| file.read_to_string(&mut contents))
		.map_err(|e| LmError::io(e, Some(path.to_path_buf())))?;
	Ok(contents)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;

	#[test]
	fn read_corpus_keeps_line_breaks() {
		let dir = tempfile::tempdir().expect("create tempdir");
		let path = dir.path().join("corpus.txt");
		fs::write(&path, "ab\ncd\r\n").unwrap();

		assert_eq!(read_corpus(&path).unwrap(), "ab\ncd\r\n");
	}

	#[test]
	fn read_corpus_reports_missing_path() {
		let err = read_corpus("/definitely/not/here.txt").unwrap_err();
		match err {
			LmError::Io { path, .. } => {
				assert_eq!(path.unwrap().to_str(), Some("/definitely/not/here.txt"))
			}
			other => panic!("unexpected error: {other}"),
		}
	}
}
