// Data types shared across commands: operation errors and the run report.

pub mod errors;
pub mod report;
