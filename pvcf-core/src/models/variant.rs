use std::fmt::{self, Display};

use indexmap::IndexMap;

use crate::consts::NAME_SEPARATOR;

///
/// One parsed change from a haplotype diff token.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diff {
    /// Position exactly as written in the token (leading zeros kept).
    pub pos: String,
    pub ref_allele: String,
    /// Alternate allele, or the deletion sentinel.
    pub alt: String,
    pub info: String,
}

impl Diff {
    pub fn key(&self) -> VariantKey {
        VariantKey {
            pos: self.pos.clone(),
            ref_allele: self.ref_allele.clone(),
        }
    }
}

///
/// Identity of an output row: position and reference allele.
///
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VariantKey {
    pub pos: String,
    pub ref_allele: String,
}

impl Display for VariantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.pos, self.ref_allele)
    }
}

///
/// One row of the output table, accumulated from every diff sharing a key.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub prot: String,
    pub pos: String,
    pub ref_allele: String,
    /// Distinct alternate alleles in the order they were first seen.
    pub alt: Vec<String>,
    pub info: String,
    /// Sample id to genotype allele indices (0 is the reference allele).
    pub samples: IndexMap<String, Vec<usize>>,
}

impl Item {
    pub fn new(key: &VariantKey) -> Self {
        Item {
            prot: String::new(),
            pos: key.pos.clone(),
            ref_allele: key.ref_allele.clone(),
            alt: Vec::new(),
            info: String::new(),
            samples: IndexMap::new(),
        }
    }

    ///
    /// Get the 1-based genotype index of `allele`, appending it to the
    /// allele list if it has not been seen for this row yet.
    ///
    pub fn allele_index(&mut self, allele: &str) -> usize {
        match self.alt.iter().position(|a| a == allele) {
            Some(idx) => idx + 1,
            None => {
                self.alt.push(allele.to_string());
                self.alt.len()
            }
        }
    }

    /// Append `index` to a sample's genotype `copies` times.
    pub fn add_genotype(&mut self, sample_id: &str, index: usize, copies: u32) {
        if copies == 0 {
            return;
        }
        let genotype = self.samples.entry(sample_id.to_string()).or_default();
        genotype.extend(std::iter::repeat_n(index, copies as usize));
    }
}

/// The protein id of a haplotype name: everything before the first `:`.
pub fn protein_id(name: &str) -> &str {
    name.split(NAME_SEPARATOR).next().unwrap_or(name)
}
