//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::str::FromStr;

use clap::{Args, Parser, Subcommand, ValueEnum};

use pagekit_core::domain::{DomainError, TemplateKind, Variant};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "pagekit",
    bin_name = "pagekit",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Page templates, one consistent family per templating engine",
    long_about = "pagekit prints the title and page templates of one templating \
                  engine. Every template printed in one call comes from the same family.",
    after_help = "EXAMPLES:\n\
        \x20 pagekit show twig\n\
        \x20 pagekit show php --part title\n\
        \x20 pagekit --output-format json show phptemplate\n\
        \x20 pagekit list --format csv",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the templates of one family.
    #[command(
        visible_alias = "s",
        about = "Print the templates of one variant",
        after_help = "EXAMPLES:\n\
            \x20 pagekit show twig\n\
            \x20 pagekit show phptemplate --part page\n\
            \x20 pagekit show              # uses defaults.variant from config"
    )]
    Show(ShowArgs),

    /// List registered variants.
    #[command(
        visible_alias = "ls",
        about = "List available variants",
        after_help = "EXAMPLES:\n\
            \x20 pagekit list\n\
            \x20 pagekit list --format json"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 pagekit completions bash > ~/.local/share/bash-completion/completions/pagekit\n\
            \x20 pagekit completions zsh  > ~/.zfunc/_pagekit"
    )]
    Completions(CompletionsArgs),

    /// Inspect the pagekit configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 pagekit config get defaults.variant\n\
            \x20 pagekit config list\n\
            \x20 pagekit config path"
    )]
    Config(ConfigCommands),
}

// ── show ──────────────────────────────────────────────────────────────────────

/// Arguments for `pagekit show`.
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Templating engine.  Falls back to `defaults.variant` from config.
    #[arg(value_name = "VARIANT", value_enum, help = "Template variant")]
    pub variant: Option<VariantArg>,

    /// Which template(s) to print.
    #[arg(
        short = 'p',
        long = "part",
        value_name = "PART",
        value_parser = Part::from_str,
        default_value = "all",
        help = "Template to print: title, page or all"
    )]
    pub part: Part,
}

/// Templating engines selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum VariantArg {
    Twig,
    /// Also accepted as `php`.
    #[value(alias = "php")]
    PhpTemplate,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Twig => Variant::Twig,
            VariantArg::PhpTemplate => Variant::PhpTemplate,
        }
    }
}

/// Template selection for `show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    One(TemplateKind),
    /// Both templates of the family.
    All,
}

impl Part {
    /// The single template kind selected, or `None` for the whole family.
    pub fn kind(self) -> Option<TemplateKind> {
        match self {
            Self::One(kind) => Some(kind),
            Self::All => None,
        }
    }
}

/// `all`, or anything [`TemplateKind`] parses.
impl FromStr for Part {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        TemplateKind::from_str(s).map(Self::One)
    }
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `pagekit list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `pagekit completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `pagekit config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.variant`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
