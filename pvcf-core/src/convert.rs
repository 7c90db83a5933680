//! Transcript-by-transcript conversion of haplotype records into table rows.

use std::fmt::{self, Display};
use std::io::Write;
use std::path::Path;

use anyhow::Context;
use indexmap::IndexSet;
use log::{debug, info, warn};

use crate::aggregate::aggregate;
use crate::consts::DEFAULT_PLOIDY;
use crate::errors::{PvcfError, Result};
use crate::fill::fill_samples;
use crate::haplotype::normalize_transcript;
use crate::io::{TsvWriter, load_transcripts, open_append};
use crate::models::RawTranscript;
use crate::render::{Header, render_row};

/// Where the sample columns of the header come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderMode {
    /// Samples of the first transcript only. Samples first seen in a later
    /// transcript are left out of the table.
    #[default]
    FirstTranscript,
    /// Union of the samples of every transcript, in first-seen order.
    AllTranscripts,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    pub ploidy: usize,
    pub header_mode: HeaderMode,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            ploidy: DEFAULT_PLOIDY,
            header_mode: HeaderMode::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionStats {
    pub transcripts: usize,
    pub haplotypes: usize,
    /// Data rows only; the header row isn't counted.
    pub rows: usize,
    pub dropped_diffs: usize,
    /// Distinct samples that had no header column.
    pub omitted_samples: usize,
}

impl Display for ConversionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} transcripts, {} haplotypes, {} rows, {} dropped diffs, {} omitted samples",
            self.transcripts, self.haplotypes, self.rows, self.dropped_diffs, self.omitted_samples
        )
    }
}

///
/// Streams transcripts into a table. The header is written before the
/// first transcript's rows and reused for every later transcript.
///
pub struct Converter {
    options: ConvertOptions,
    header: Option<Header>,
    header_written: bool,
    omitted: IndexSet<String>,
    stats: ConversionStats,
}

impl Converter {
    pub fn new(options: ConvertOptions) -> Result<Self> {
        if options.ploidy == 0 {
            return Err(PvcfError::InvalidPloidy(options.ploidy));
        }

        Ok(Converter {
            options,
            header: None,
            header_written: false,
            omitted: IndexSet::new(),
            stats: ConversionStats::default(),
        })
    }

    /// Use a fixed header instead of deriving one from the first transcript.
    pub fn with_header(mut self, header: Header) -> Self {
        self.header = Some(header);
        self
    }

    ///
    /// Convert one transcript and append its rows to `writer`. The writer is
    /// flushed afterwards, so a later failure leaves complete transcripts
    /// behind.
    ///
    pub fn convert_transcript<W: Write>(
        &mut self,
        raw: &RawTranscript,
        writer: &mut TsvWriter<W>,
    ) -> Result<()> {
        let transcript = normalize_transcript(raw)?;
        let mut items = aggregate(&transcript.haplotypes);

        let header = self
            .header
            .get_or_insert_with(|| Header::new(&transcript.sample_ids));
        if !self.header_written {
            writer.write_row(&header.names())?;
            self.header_written = true;
        }

        let missing = missing_from_header(header, &transcript.sample_ids);
        if !missing.is_empty() {
            warn!(
                "Samples not in the header will be left out of this transcript's rows: {}",
                missing
                    .iter()
                    .map(|s| s.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            self.omitted.extend(missing.into_iter().cloned());
        }

        let mut sample_ids = transcript.sample_ids.clone();
        sample_ids.extend(header.sample_ids().cloned());

        fill_samples(&mut items, &sample_ids, self.options.ploidy);

        for item in items.values() {
            writer.write_row(&render_row(item, header)?)?;
        }
        writer.flush()?;

        debug!(
            "Converted transcript with {} haplotypes into {} rows",
            transcript.haplotypes.len(),
            items.len()
        );

        self.stats.transcripts += 1;
        self.stats.haplotypes += transcript.haplotypes.len();
        self.stats.rows += items.len();
        self.stats.dropped_diffs += transcript.dropped_diffs;
        self.stats.omitted_samples = self.omitted.len();

        Ok(())
    }

    pub fn finish(self) -> ConversionStats {
        self.stats
    }
}

/// Samples of a transcript that have no column in `header`, in first-seen order.
pub fn missing_from_header<'a>(
    header: &Header,
    sample_ids: &'a IndexSet<String>,
) -> Vec<&'a String> {
    sample_ids
        .iter()
        .filter(|sample_id| !header.contains_sample(sample_id))
        .collect()
}

/// Every sample id across all transcripts, in first-seen order.
pub fn collect_sample_ids(transcripts: &[RawTranscript]) -> IndexSet<String> {
    transcripts
        .iter()
        .flat_map(|transcript| transcript.haplotypes())
        .flat_map(|haplotype| haplotype.samples.iter().flatten())
        .map(|(sample_id, _)| sample_id.clone())
        .collect()
}

///
/// Convert all transcripts, in order, into rows written to `writer`.
///
/// Nothing is written, not even a header, when there are no transcripts.
///
pub fn convert<W: Write>(
    transcripts: &[RawTranscript],
    writer: &mut TsvWriter<W>,
    options: &ConvertOptions,
) -> Result<ConversionStats> {
    let mut converter = Converter::new(options.clone())?;
    if options.header_mode == HeaderMode::AllTranscripts {
        converter = converter.with_header(Header::new(&collect_sample_ids(transcripts)));
    }

    for transcript in transcripts {
        converter.convert_transcript(transcript, writer)?;
    }

    Ok(converter.finish())
}

///
/// Convert a haplotype JSON file and append the table to `output`.
///
/// # Arguments
///
/// - input: path to the JSON input (optionally gzipped), or '-' for stdin
/// - output: path to the output table; created if missing, never truncated
/// - options: conversion options
///
pub fn convert_file(
    input: &str,
    output: &Path,
    options: &ConvertOptions,
) -> anyhow::Result<ConversionStats> {
    info!("Converting {} to VCF format", input);

    let transcripts = load_transcripts(input)?;
    let file = open_append(output)?;
    let mut writer = TsvWriter::new(file);

    let stats = convert(&transcripts, &mut writer, options)
        .with_context(|| format!("Failed to convert {} into {:?}", input, output))?;

    info!("Wrote {:?}: {}", output, stats);
    if stats.omitted_samples > 0 {
        warn!(
            "{} samples appear only after the first transcript and were omitted; use all-samples headers to keep them",
            stats.omitted_samples
        );
    }

    Ok(stats)
}
