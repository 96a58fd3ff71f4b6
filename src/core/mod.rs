pub mod summary;

pub use summary::{MonthSummary, summarize};
