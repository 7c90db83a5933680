use thiserror::Error;

#[derive(Error, Debug)]
pub enum PvcfError {
    #[error("Reference sequence index {pos} is out of range for a sequence of length {len}")]
    ReferenceOutOfRange { pos: usize, len: usize },

    #[error("Diff position doesn't fit a machine integer: {0}")]
    InvalidPosition(String),

    #[error("Sample {0} has no genotype for this row. Fill samples before rendering.")]
    MissingSample(String),

    #[error("Ploidy must be at least 1, got {0}")]
    InvalidPloidy(usize),

    #[error("Malformed haplotype JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for pvcf-core operations.
pub type Result<T> = std::result::Result<T, PvcfError>;
