//! Browser-side services talking to the same-origin API routes

pub mod evaluation;
pub mod fetch;
pub mod upload;
