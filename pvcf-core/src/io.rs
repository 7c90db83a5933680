use std::ffi::OsStr;
use std::fs::{File, OpenOptions, create_dir_all};
use std::io::prelude::*;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;

use crate::consts::TAB_STRING;
use crate::errors::PvcfError;
use crate::models::RawTranscript;

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path).with_context(|| format!("Failed to open file: {:?}", path))?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

/// Get a reader for either a gzipped, non-gzipped file, or stdin
///
/// # Arguments
///
/// - file_path: path to the file to read, or '-' for stdin
pub fn get_dynamic_reader_w_stdin(file_path_str: &str) -> Result<BufReader<Box<dyn Read>>> {
    if file_path_str == "-" {
        Ok(BufReader::new(Box::new(std::io::stdin()) as Box<dyn Read>))
    } else {
        get_dynamic_reader(Path::new(file_path_str))
    }
}

///
/// Load every transcript record of a haplotype JSON file.
///
/// # Arguments
///
/// - path: path to a JSON array of transcripts (optionally gzipped), or '-' for stdin
///
pub fn load_transcripts(path: &str) -> Result<Vec<RawTranscript>> {
    let reader = get_dynamic_reader_w_stdin(path)?;
    let transcripts: Vec<RawTranscript> = serde_json::from_reader(reader)
        .map_err(PvcfError::Json)
        .with_context(|| format!("Failed to parse haplotype JSON: {}", path))?;

    Ok(transcripts)
}

///
/// Open a file for appending, creating it and its parent folders if needed.
/// Existing content is never truncated.
///
pub fn open_append(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent)
                .with_context(|| format!("Failed to create output folder: {:?}", parent))?;
        }
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open output file: {:?}", path))
}

/// Writes tab-separated rows, one per line.
pub struct TsvWriter<W: Write> {
    inner: BufWriter<W>,
}

impl<W: Write> TsvWriter<W> {
    pub fn new(inner: W) -> Self {
        TsvWriter {
            inner: BufWriter::new(inner),
        }
    }

    pub fn write_row<S: AsRef<str>>(&mut self, row: &[S]) -> std::io::Result<()> {
        for (i, cell) in row.iter().enumerate() {
            if i > 0 {
                self.inner.write_all(TAB_STRING.as_bytes())?;
            }
            self.inner.write_all(cell.as_ref().as_bytes())?;
        }
        self.inner.write_all(b"\n")?;

        Ok(())
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }

    pub fn into_inner(self) -> std::io::Result<W> {
        self.inner.into_inner().map_err(|e| e.into_error())
    }
}
