//! Domain value objects: Variant, TemplateKind, TemplateSet.
//!
//! # Adding a new variant
//!
//! 1. Add the enum variant and its `as_str` / `FromStr` arms here
//! 2. Append it to [`Variant::ALL`]
//! 3. Add a factory/product pair in `pagekit-adapters` and register it

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Variant ──────────────────────────────────────────────────────────────────

/// A templating technology. Every product created by one factory belongs to
/// the same variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Twig,
    PhpTemplate,
}

impl Variant {
    /// Every known variant, in canonical order.
    pub const ALL: [Variant; 2] = [Variant::Twig, Variant::PhpTemplate];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Twig => "twig",
            Self::PhpTemplate => "phptemplate",
        }
    }

    /// Human-facing name of the templating engine.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Twig => "Twig",
            Self::PhpTemplate => "PHPTemplate",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "twig" => Ok(Self::Twig),
            "phptemplate" | "php" => Ok(Self::PhpTemplate),
            _ => Err(DomainError::UnknownVariant { input: s.into() }),
        }
    }
}

// ── TemplateKind ─────────────────────────────────────────────────────────────

/// Which product of a family is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    Title,
    Page,
}

impl TemplateKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Page => "page",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "title" => Ok(Self::Title),
            "page" => Ok(Self::Page),
            _ => Err(DomainError::UnknownTemplateKind { input: s.into() }),
        }
    }
}

// ── TemplateSet ──────────────────────────────────────────────────────────────

/// Snapshot of one family's template strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSet {
    pub variant: Variant,
    pub title: String,
    pub page: String,
}

impl TemplateSet {
    pub fn get(&self, kind: TemplateKind) -> &str {
        match kind {
            TemplateKind::Title => &self.title,
            TemplateKind::Page => &self.page,
        }
    }
}
