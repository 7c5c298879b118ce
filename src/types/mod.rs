pub mod config;
pub mod report;
pub mod scores;
pub mod table;
