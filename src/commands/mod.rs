//! Command implementations for the tex2svg CLI

pub mod combine;
pub mod completions;
pub mod render;
pub mod version;
