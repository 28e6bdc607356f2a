pub mod document;
pub mod package;
pub mod report;

pub use document::{AnalysisDocument, Entry};
pub use package::Package;
pub use report::Report;
