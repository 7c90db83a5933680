use indexmap::IndexSet;

use crate::diff::parse_diff;
use crate::errors::Result;
use crate::models::{Haplotype, RawHaplotype, RawTranscript};

/// All haplotypes of one transcript, ready for aggregation.
#[derive(Debug, Clone, Default)]
pub struct NormalizedTranscript {
    pub haplotypes: Vec<Haplotype>,
    /// Every sample id seen in the transcript, in first-seen order.
    pub sample_ids: IndexSet<String>,
    /// Non-empty diff tokens that couldn't be parsed.
    pub dropped_diffs: usize,
}

///
/// Build a `Haplotype` from its raw record, parsing every diff token
/// against the first aligned sequence.
///
/// # Returns
///
/// The haplotype and the number of diff tokens that were dropped.
///
pub fn normalize_haplotype(raw: &RawHaplotype) -> Result<(Haplotype, usize)> {
    let mut haplotype = Haplotype {
        frequency: raw.frequency.unwrap_or_default(),
        samples: raw.samples.clone().unwrap_or_default(),
        aligned_sequences: raw.aligned_sequences.clone().unwrap_or_default(),
        diffs: Vec::new(),
        name: raw.name.clone().unwrap_or_default(),
    };

    let mut diffs = Vec::new();
    let mut dropped = 0;
    for raw_diff in raw.diffs.iter().flatten() {
        let token = raw_diff.diff.as_deref();
        match parse_diff(token, haplotype.reference_sequence())? {
            Some(diff) => diffs.push(diff),
            None if token.is_some_and(|t| !t.is_empty()) => dropped += 1,
            None => {}
        }
    }
    haplotype.diffs = diffs;

    Ok((haplotype, dropped))
}

pub fn normalize_transcript(raw: &RawTranscript) -> Result<NormalizedTranscript> {
    let mut transcript = NormalizedTranscript::default();

    for raw_haplotype in raw.haplotypes() {
        let (haplotype, dropped) = normalize_haplotype(raw_haplotype)?;
        transcript
            .sample_ids
            .extend(haplotype.samples.keys().cloned());
        transcript.dropped_diffs += dropped;
        transcript.haplotypes.push(haplotype);
    }

    Ok(transcript)
}
