//! Search, sort and paginate a directory of countries.
//!
//! The heart of the crate is [`engine::derive`], a pure
//! filter → sort → paginate pipeline. Around it sit a data source for the
//! REST Countries API with a static fallback ([`source`]), an async
//! controller that debounces searches and drops stale responses
//! ([`explorer`]), and the pieces of the `countrylens` binary.

pub mod cli;
pub mod config;
pub mod engine;
pub mod explorer;
pub mod logging;
pub mod model;
pub mod source;
