pub const PROT_COLUMN: &str = "PROT";
pub const POS_COLUMN: &str = "POS";
pub const REF_COLUMN: &str = "REF";
pub const ALT_COLUMN: &str = "ALT";
pub const INFO_COLUMN: &str = "INFO";

/// Fixed leading columns of every output table, in output order.
pub const FIXED_COLUMNS: [&str; 5] = [
    PROT_COLUMN,
    POS_COLUMN,
    REF_COLUMN,
    ALT_COLUMN,
    INFO_COLUMN,
];

pub const ALT_SEPARATOR: &str = ",";
pub const SAMPLE_SEPARATOR: &str = "|";
pub const TAB_STRING: &str = "\t";

pub const SUBSTITUTION_OPERATOR: &str = ">";
pub const DELETION_OPERATOR: &str = "del";
pub const DELETION_ALLELE: &str = "<DEL>";

/// Genotype index of the reference allele.
pub const REFERENCE_INDEX: usize = 0;
pub const DEFAULT_PLOIDY: usize = 2;

/// Separator between the protein id and the rest of a haplotype name.
pub const NAME_SEPARATOR: char = ':';

pub const CONVERT_CMD: &str = "convert";
