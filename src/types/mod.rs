pub mod answers;
pub mod category;
pub mod config;
pub mod criterion;
pub mod report;
pub mod scoring;
