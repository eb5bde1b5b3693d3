//! Lockstep filtering of one document pair.
//!
//! Lines are read as raw bytes, classified by their word counts and, when
//! accepted, appended verbatim to the two aggregate outputs.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use bitext_core::bounds::{count_words, LengthBounds};
use bitext_core::error::{FilterError, Result};
use bitext_core::stats::CorpusStats;
use tracing::debug;

// ── Options ───────────────────────────────────────────────────────────────────

/// Per-pair filtering options.
#[derive(Debug, Clone, Copy, Default)]
pub struct PairOptions {
    pub bounds: LengthBounds,
    /// Fail on differing line counts instead of padding the target side.
    pub strict_alignment: bool,
}

// ── Line I/O ──────────────────────────────────────────────────────────────────

/// Buffered raw-line reader that remembers its path for error reporting.
struct LineSource {
    path: PathBuf,
    reader: BufReader<File>,
}

impl LineSource {
    /// Open `path` for reading. A directory opens fine on Unix but cannot be
    /// read as lines, so it is rejected here as an open failure.
    fn open(path: &Path) -> Result<Self> {
        let open_error = |source| FilterError::OpenRead {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(open_error)?;
        if file.metadata().map_err(open_error)?.is_dir() {
            return Err(open_error(std::io::Error::other("is a directory")));
        }
        Ok(Self {
            path: path.to_path_buf(),
            reader: BufReader::new(file),
        })
    }

    /// Replace `buf` with the next line, terminator included.
    ///
    /// Returns `false` at end of file, leaving `buf` empty.
    fn next_line(&mut self, buf: &mut Vec<u8>) -> Result<bool> {
        buf.clear();
        let read = self
            .reader
            .read_until(b'\n', buf)
            .map_err(|source| FilterError::ReadLine {
                path: self.path.clone(),
                source,
            })?;
        Ok(read > 0)
    }

    /// Count the lines left in the file.
    fn count_remaining(&mut self) -> Result<usize> {
        let mut buf = Vec::new();
        let mut count = 0;
        while self.next_line(&mut buf)? {
            count += 1;
        }
        Ok(count)
    }
}

/// Buffered append-only writer for one aggregate output.
struct LineSink {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl LineSink {
    fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| FilterError::OpenAppend {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
        })
    }

    fn append(&mut self, line: &[u8]) -> Result<()> {
        self.writer
            .write_all(line)
            .map_err(|source| FilterError::WriteLine {
                path: self.path.clone(),
                source,
            })
    }

    fn finish(mut self) -> Result<()> {
        self.writer.flush().map_err(|source| FilterError::WriteLine {
            path: self.path,
            source,
        })
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Filter one document pair into the two aggregate outputs.
///
/// Both inputs are opened for reading and both outputs for appending (created
/// when absent); any open failure is returned before a line is read. Lines are
/// read in lockstep until the source file ends. A target file that ends first
/// yields empty lines for the remaining source lines, which are discarded;
/// extra target lines are ignored. With `strict_alignment` either mismatch is
/// a [`FilterError::MisalignedPair`] instead.
///
/// Returns the statistics for this pair alone, with `documents == 1`.
pub fn process_document_pair(
    source_path: &Path,
    target_path: &Path,
    out_source_path: &Path,
    out_target_path: &Path,
    options: &PairOptions,
) -> Result<CorpusStats> {
    let mut source = LineSource::open(source_path)?;
    let mut target = LineSource::open(target_path)?;
    let mut out_source = LineSink::open(out_source_path)?;
    let mut out_target = LineSink::open(out_target_path)?;

    let mut stats = CorpusStats {
        documents: 1,
        ..Default::default()
    };
    let mut source_line = Vec::new();
    let mut target_line = Vec::new();
    let mut target_lines = 0usize;

    while source.next_line(&mut source_line)? {
        if target.next_line(&mut target_line)? {
            target_lines += 1;
        } else if options.strict_alignment {
            let source_lines = stats.total_lines as usize + 1 + source.count_remaining()?;
            return Err(misaligned(source_path, target_path, source_lines, target_lines));
        }

        let source_words = count_words(&source_line);
        let target_words = count_words(&target_line);
        let accepted = options.bounds.accepts(source_words, target_words);

        if accepted {
            out_source.append(&source_line)?;
            out_target.append(&target_line)?;
        }
        stats.record(source_words, target_words, accepted);
    }

    if options.strict_alignment {
        let extra = target.count_remaining()?;
        if extra > 0 {
            return Err(misaligned(
                source_path,
                target_path,
                stats.total_lines as usize,
                target_lines + extra,
            ));
        }
    }

    out_source.finish()?;
    out_target.finish()?;

    debug!(
        "{}: {} approved, {} discarded",
        source_path.display(),
        stats.approved,
        stats.discarded
    );

    Ok(stats)
}

fn misaligned(
    source_path: &Path,
    target_path: &Path,
    source_lines: usize,
    target_lines: usize,
) -> FilterError {
    FilterError::MisalignedPair {
        source_path: source_path.to_path_buf(),
        target_path: target_path.to_path_buf(),
        source_lines,
        target_lines,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
