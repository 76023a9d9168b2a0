//! Adapters for parsing [`clap`] arguments to various types.

mod error_message;
mod namespace_prefix;

pub use error_message::value_validation_error;
