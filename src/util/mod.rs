//! Shared helpers for the crate's unit tests.
