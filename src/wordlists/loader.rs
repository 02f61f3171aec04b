//! Word list loading utilities
//!
//! Dictionaries are plain text, one word per line. Lines that are not
//! 5-letter words, including lines that are not valid UTF-8, are skipped.

use super::Dictionary;
use log::{debug, info, warn};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Load a dictionary from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use wordle_hints::wordlists::load_from_file;
///
/// let dictionary = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let dictionary = load_from_reader(BufReader::new(file))?;

    info!(
        target: "wordlists",
        "loaded {} words from {}",
        dictionary.len(),
        path.display()
    );
    Ok(dictionary)
}

/// Load a dictionary from any line-based reader
///
/// # Errors
///
/// Returns an I/O error if reading fails. Line contents never cause an error.
pub fn load_from_reader<R: BufRead>(reader: R) -> io::Result<Dictionary> {
    let mut dictionary = Dictionary::default();
    let mut lines = 0usize;
    let mut skipped = 0usize;

    for raw in reader.split(b'\n') {
        let raw = raw?;
        lines += 1;
        let Ok(line) = std::str::from_utf8(&raw) else {
            skipped += 1;
            continue;
        };
        if line.trim().is_empty() {
            continue;
        }
        if !dictionary.insert(line) {
            skipped += 1;
        }
    }

    debug!(
        target: "wordlists",
        "read {lines} lines, kept {}, skipped {skipped}",
        dictionary.len()
    );
    if dictionary.is_empty() {
        warn!(target: "wordlists", "dictionary has no usable words");
    }
    Ok(dictionary)
}
