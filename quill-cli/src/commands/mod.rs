//! Command implementations for the quill CLI

pub mod serve;

pub use serve::run_serve;
