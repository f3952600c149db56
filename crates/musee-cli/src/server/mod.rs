//! HTTP API over the catalog and assistant.

pub mod app;
pub mod error;
pub mod handlers;
pub mod state;
