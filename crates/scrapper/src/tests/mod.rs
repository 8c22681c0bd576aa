//! Crate-level tests for scrapper.

mod behaviour;
