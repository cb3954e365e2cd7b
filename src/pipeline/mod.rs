//! Pipeline module for run orchestration
//!
//! This module contains the coordinator that drives one run:
//! 1. Fetch primary records for every identifier in the range
//! 2. Fetch species detail for every primary record
//! 3. Map and publish every eligible entity, paced by the rate limiter
//!
//! Each phase finishes before the next begins, and every request is awaited
//! one at a time.

mod coordinator;

pub use coordinator::{Pipeline, PublishMode};
