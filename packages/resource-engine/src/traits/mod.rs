//! Core trait abstractions.

pub mod source;

pub use source::ResourceSource;
