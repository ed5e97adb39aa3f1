//! In-memory tables produced by the loaders.

pub mod codebook;
pub mod sequence;
pub mod table;

pub use codebook::{BarcodeRecord, BarcodeTable, Codebook};
pub use sequence::{SequenceRecord, SequenceTable};
pub use table::Table;
