//! pagekit Core - families of page templates behind one factory port.
//!
//! This crate provides the domain and application layers for pagekit,
//! following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           pagekit-cli (CLI)             │
//! │     (picks a variant at runtime)        │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Service             │
//! │            (TemplateService)            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (TemplateFactory, TitleTemplate, Page…) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    pagekit-adapters (Template families) │
//! │  (TwigTemplateFactory, PhpTemplate…)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use pagekit_core::prelude::*;
//!
//! fn print_page(factory: Arc<dyn DynTemplateFactory>) {
//!     let service = TemplateService::new(factory);
//!     println!("{}", service.render_page());
//! }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        TemplateService,
        ports::{DynTemplateFactory, PageTemplate, TemplateFactory, TitleTemplate},
    };
    pub use crate::domain::{TemplateKind, TemplateSet, Variant};
    pub use crate::error::{PagekitError, PagekitResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
