//! # pvcf-core
//!
//! Converts protein haplotype calls (JSON records with compact diff
//! notation, e.g. `12A>T` or `5del{3}`) into a VCF-like tab-separated
//! table: one row per distinct (position, reference allele) and one
//! genotype column per sample.
//!
//! Each transcript goes through the same steps:
//!
//! 1. [`haplotype::normalize_transcript`] parses every diff token
//! 2. [`aggregate::aggregate`] merges diffs sharing a position and reference
//! 3. [`fill::fill_samples`] gives every row a genotype for every sample
//! 4. [`render::render_row`] lays each row out in header order
//!
//! [`convert::convert_file`] wires these together with file I/O.

pub mod aggregate;
pub mod consts;
pub mod convert;
pub mod diff;
pub mod errors;
pub mod fill;
pub mod haplotype;
pub mod io;
pub mod models;
pub mod render;

pub use convert::{ConversionStats, ConvertOptions, Converter, HeaderMode, convert, convert_file};
pub use diff::parse_diff;
pub use errors::PvcfError;
pub use models::{Diff, Haplotype, Item, VariantKey};
pub use render::{Column, Header};
