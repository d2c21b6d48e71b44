//! Configuration store adapters

pub mod xdg;

pub use xdg::XdgConfigStore;
