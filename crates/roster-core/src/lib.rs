//! Core types and trait definitions for the Roster person service.
//!
//! This crate is free of HTTP and database dependencies. The storage backend
//! and the API layer both depend on it.

pub mod person;
pub mod store;
