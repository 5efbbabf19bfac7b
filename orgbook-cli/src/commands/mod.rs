//! CLI command implementations

mod count;
mod report;
mod toc;

pub use count::count;
pub use report::{report, ReportOptions};
pub use toc::toc;
