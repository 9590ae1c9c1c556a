pub mod builtin;
pub mod config;
pub mod error;
pub mod feature;
pub mod pipeline;
pub mod runtime;
