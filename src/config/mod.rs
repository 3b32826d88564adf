//! Configuration management for template-init
//!
//! - `types`: the placeholder set and supported file formats
//! - `loader`: configuration file loading and validation

pub mod loader;
pub mod types;


pub use loader::TemplateConfig;
pub use types::{ConfigFormat, Placeholders};
