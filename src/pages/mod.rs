//! Application pages

mod dashboard;

pub use dashboard::*;
