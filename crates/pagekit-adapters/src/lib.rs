//! Template families for pagekit.
//!
//! This crate implements the ports defined in `pagekit-core::application::ports`.
//! Each module is one family: a factory plus the products it creates.

pub mod php_template;
pub mod registry;
pub mod twig;

// Re-export commonly used adapters
pub use php_template::{PhpTemplatePageTemplate, PhpTemplateTitleTemplate, PhpTemplateFactory};
pub use registry::FactoryRegistry;
pub use twig::{TwigPageTemplate, TwigTemplateFactory, TwigTitleTemplate};
