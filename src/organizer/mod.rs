//! Walking the font cache and exporting or installing what it holds

pub mod processor;

pub use processor::{load_record, process_cache, run, RunSummary, Target};
