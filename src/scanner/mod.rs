pub mod tree_scanner;

pub use tree_scanner::{ScanOutcome, ScanStatistics, SourceFile, TreeScanner};
