//! Transcription engine adapters

pub mod http;

pub use http::HttpTranscriber;
