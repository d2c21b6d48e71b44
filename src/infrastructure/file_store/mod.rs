//! File store adapters

pub mod http;

pub use http::HttpFileStore;
