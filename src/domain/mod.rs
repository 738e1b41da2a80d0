//! Domain Layer
//!
//! Pure content logic without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Content records, details, site copy, the store, build manifest
//! - `value_objects/` - Slug, Route, ContentHash, ContentWarning
//! - `services/` - Resolver, section renderer, accordion state, validation, lint
//! - `ports/` - Interface definitions for infrastructure

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
