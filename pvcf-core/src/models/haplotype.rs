use indexmap::IndexMap;

use super::variant::{Diff, protein_id};

///
/// A called haplotype with its parsed diffs.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Haplotype {
    /// Observed frequency. Carried through but not used for output.
    pub frequency: f64,
    pub samples: IndexMap<String, u32>,
    /// Element 0 is the reference sequence deletions are resolved against.
    pub aligned_sequences: Vec<String>,
    pub diffs: Vec<Diff>,
    pub name: String,
}

impl Haplotype {
    pub fn protein_id(&self) -> &str {
        protein_id(&self.name)
    }

    pub fn reference_sequence(&self) -> &str {
        self.aligned_sequences
            .first()
            .map(String::as_str)
            .unwrap_or_default()
    }
}
