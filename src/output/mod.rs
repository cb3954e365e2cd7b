//! Output module for run reporting
//!
//! This module handles:
//! - Collecting per-run counters and failure records
//! - Printing the end-of-run summary

mod report;

pub use report::{print_report, write_report, FailureRecord, PublishedPage, RunReport};
