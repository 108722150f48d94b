//! Application layer for pagekit.
//!
//! This layer contains:
//! - **Ports**: the product and factory traits every template family implements
//! - **Services**: client code that drives one family without knowing which
//! - **Errors**: application-specific error types

pub mod error;
pub mod ports;
pub mod services;

pub use services::TemplateService;

pub use ports::{DynTemplateFactory, PageTemplate, TemplateFactory, TitleTemplate};

pub use error::ApplicationError;
