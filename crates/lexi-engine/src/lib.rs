//! # lexi-engine
//!
//! The word-data aggregation engine.
//!
//! - [`Aggregator`] runs one field through cached → sources → synthesis →
//!   filter/format, with a private [`FieldState`] per run. Source responses
//!   are fetched once per word and shared read-only between fields.
//! - [`WordGenerator`] fans all nine fields out concurrently and assembles a
//!   [`lexi_core::WordRecord`], failing the whole word on the first fatal
//!   field error. It also drives the image pipeline.
//! - [`HttpWordGenerator::open`] wires everything to one shared HTTP client.

pub mod aggregator;
pub mod generator;
pub mod images;
pub mod policy;
pub mod session;
pub mod state;

mod error;
mod memo;

pub use aggregator::{Aggregator, FieldValue};
pub use error::EngineError;
pub use generator::WordGenerator;
pub use session::HttpWordGenerator;
pub use state::FieldState;
