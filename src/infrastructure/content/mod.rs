//! Content document loaders

mod json;

pub use json::JsonContentRepository;
