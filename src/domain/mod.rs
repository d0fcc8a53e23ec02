pub mod report;

pub use report::{FileSummary, ProcessingRequest, SummaryReport};
