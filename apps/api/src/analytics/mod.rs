pub mod handlers;
pub mod report;
