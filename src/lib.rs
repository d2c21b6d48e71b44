//! case-transcriber - transcription of recorded case audio
//!
//! Looks up a doctor's case in a graph service, downloads the attached audio,
//! sends it to a speech-to-text engine and writes the text back to the case.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Case graph model, file id extraction, query payloads, envelopes
//! - **Application**: The transcribe case use case and port interfaces (traits)
//! - **Infrastructure**: HTTP adapters, config file store, logging setup
//! - **API**: axum router exposing the use case over HTTP
//! - **CLI**: Command-line interface, argument parsing, and signal handling

pub mod api;
pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
