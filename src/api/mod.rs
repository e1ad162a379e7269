//! HTTP client for communicating with the events API

mod client;
mod query;

pub use client::*;
pub use query::*;
