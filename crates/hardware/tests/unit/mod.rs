//! # Unit Tests
//!
//! Organizes the fine-grained tests by crate module.
