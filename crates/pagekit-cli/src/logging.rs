//! Tracing subscriber for the `pagekit` binary.
//!
//! Only `pagekit`, `pagekit_core` and `pagekit_adapters` are logged; their
//! spans cover factory lookup (`FactoryRegistry::get`) and template creation
//! (`TemplateService::render_*`).  Output goes to stderr so stdout carries
//! nothing but templates.
//!
//! `RUST_LOG` replaces the `-v`/`-q` mapping entirely when set.

use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::GlobalArgs;

/// Crates whose events reach the terminal.
const LOGGED_CRATES: [&str; 3] = ["pagekit", "pagekit_core", "pagekit_adapters"];

/// Log level chosen on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// `--quiet`: errors only.
    Quiet,
    /// No flag: warnings, e.g. a malformed `.env`.
    Normal,
    /// `-v`: which variant was picked and from where.
    Info,
    /// `-vv`: config path, each template created.
    Debug,
    /// `-vvv` and beyond.
    Trace,
}

impl Verbosity {
    pub fn from_args(args: &GlobalArgs) -> Self {
        if args.quiet {
            return Self::Quiet;
        }
        match args.verbose {
            0 => Self::Normal,
            1 => Self::Info,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    fn level(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::ERROR,
            Self::Normal => LevelFilter::WARN,
            Self::Info => LevelFilter::INFO,
            Self::Debug => LevelFilter::DEBUG,
            Self::Trace => LevelFilter::TRACE,
        }
    }

    /// `EnvFilter` directives giving each pagekit crate this level.
    fn directives(self) -> String {
        let level = self.level().to_string().to_ascii_lowercase();
        LOGGED_CRATES
            .iter()
            .map(|krate| format!("{krate}={level}"))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Install the global subscriber.  `color` is the already-resolved colour
/// decision (flag, `NO_COLOR`, config, terminal).
pub fn init_logging(verbosity: Verbosity, color: bool) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(from_env) => from_env,
        Err(_) => EnvFilter::try_new(verbosity.directives())?,
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .compact()
        .without_time()
        .with_target(false)
        .with_ansi(color)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing subscriber already installed: {e}"))
}
