pub mod haplotype;
pub mod raw;
pub mod variant;

// re-export for cleaner imports
pub use self::haplotype::Haplotype;
pub use self::raw::{RawDiff, RawHaplotype, RawTranscript};
pub use self::variant::{Diff, Item, VariantKey};
