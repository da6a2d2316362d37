//! Decompressing Line Source: lazy lines out of a gzip file.
//!
//! The file handle lives inside the [`LineSource`]; dropping the source closes it, so every
//! exit path of a load (success, format error, duplicate key) releases the file.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;
use tracing::trace;

use crate::error::{ImdbxError, ImdbxResult};

/// Default read buffer size (256 KiB).
pub const DEFAULT_READ_BUFFER_BYTES: usize = 256 * 1024;

/// One line with its terminator stripped and its 1-based position in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub number: u64,
    pub text: &'a str,
}

/// Streaming reader over the decompressed lines of one file.
///
/// Finite and non-restartable: once exhausted it keeps returning `None`.
pub struct LineSource {
    path: PathBuf,
    reader: BufReader<MultiGzDecoder<File>>,
    buf: String,
    line_number: u64,
    exhausted: bool,
}

impl LineSource {
    /// Opens `path` with the default buffer size.
    pub fn open(path: impl AsRef<Path>) -> ImdbxResult<Self> {
        Self::open_with_capacity(path, DEFAULT_READ_BUFFER_BYTES)
    }

    /// Opens `path` with a read buffer of `capacity` bytes.
    pub fn open_with_capacity(path: impl AsRef<Path>, capacity: usize) -> ImdbxResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ImdbxError::io(path, source))?;
        trace!(path = %path.display(), capacity, "opened gzip source");

        Ok(Self {
            path: path.to_path_buf(),
            reader: BufReader::with_capacity(capacity.max(1), MultiGzDecoder::new(file)),
            buf: String::new(),
            line_number: 0,
            exhausted: false,
        })
    }

    /// Path this source reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of lines handed out so far.
    pub fn lines_read(&self) -> u64 {
        self.line_number
    }

    /// Returns the next line, reusing one internal buffer.
    ///
    /// A corrupt gzip stream or non UTF-8 content surfaces here as an `Io` error.
    pub fn next_line(&mut self) -> ImdbxResult<Option<Line<'_>>> {
        if self.exhausted {
            return Ok(None);
        }

        self.buf.clear();
        let read = self
            .reader
            .read_line(&mut self.buf)
            .map_err(|source| ImdbxError::io(&self.path, source))?;
        if read == 0 {
            self.exhausted = true;
            trace!(path = %self.path.display(), lines = self.line_number, "gzip source exhausted");
            return Ok(None);
        }

        self.line_number += 1;
        Ok(Some(Line {
            number: self.line_number,
            text: strip_terminator(&self.buf),
        }))
    }
}

impl Iterator for LineSource {
    type Item = ImdbxResult<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self
            .next_line()
            .map(|line| line.map(|line| line.text.to_string()));
        match next {
            Ok(Some(text)) => Some(Ok(text)),
            Ok(None) => None,
            Err(err) => {
                self.exhausted = true;
                Some(Err(err))
            }
        }
    }
}

impl std::fmt::Debug for LineSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineSource")
            .field("path", &self.path)
            .field("line_number", &self.line_number)
            .field("exhausted", &self.exhausted)
            .finish()
    }
}

fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
