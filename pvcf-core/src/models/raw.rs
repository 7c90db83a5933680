//! Deserialization targets for haplotype-caller JSON.
//!
//! Every field is optional: haplotype callers omit empty lists and write
//! `null` for missing values, and both mean "use the default". Fields the
//! converter has no use for are ignored.

use indexmap::IndexMap;
use serde::Deserialize;

/// One transcript record of the input array.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct RawTranscript {
    #[serde(default)]
    pub protein_haplotypes: Option<Vec<RawHaplotype>>,
}

impl RawTranscript {
    pub fn haplotypes(&self) -> &[RawHaplotype] {
        self.protein_haplotypes.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct RawHaplotype {
    #[serde(default)]
    pub frequency: Option<f64>,
    /// Sample id to the number of copies of this haplotype the sample carries.
    #[serde(default)]
    pub samples: Option<IndexMap<String, u32>>,
    #[serde(default)]
    pub aligned_sequences: Option<Vec<String>>,
    #[serde(default)]
    pub diffs: Option<Vec<RawDiff>>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct RawDiff {
    #[serde(default)]
    pub diff: Option<String>,
}
