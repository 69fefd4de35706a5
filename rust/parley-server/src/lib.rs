#![cfg(not(target_arch = "wasm32"))]

//! # Parley Server
//!
//! Front ends for the [`parley_nlu`] predictor:
//!
//! - an HTTP/1 service answering `POST /predict` with
//!   `{intent, confidence, entities}` JSON, with permissive CORS for browser
//!   clients;
//! - the `parley` command line tool, which can run that service or predict a
//!   single utterance.
//!
//! ## Usage
//!
//! ```bash
//! parley serve --addr 127.0.0.1:8787
//! curl -s localhost:8787/predict -d '{"text": "Book a table for 3 people tonight"}'
//!
//! parley predict --explain "I want to book flight to Paris tomorrow"
//! ```
//!
//! The listen address can also come from `PARLEY_ADDR`, and the log filter
//! from `RUST_LOG`.

mod config;
pub use config::*;

mod error;
pub use error::*;

mod handler;
pub use handler::*;

mod output;
pub use output::*;

mod server;
pub use server::*;
