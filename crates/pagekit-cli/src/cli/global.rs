//! Flags shared by every pagekit subcommand, and the colour policy built
//! from them.

use std::ffi::OsStr;
use std::path::PathBuf;

use clap::Args;

/// Environment variable from <https://no-color.org>.
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// Global arguments for all commands.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log more about factory lookup and rendering (`-v` info, `-vv` debug,
    /// `-vvv` trace).
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Log more (-v, -vv, -vvv)"
    )]
    pub verbose: u8,

    /// Hide headers and log only errors.  Templates are still printed.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Hide headers; templates are still printed"
    )]
    pub quiet: bool,

    /// Never emit ANSI escapes, in templates listings or logs.
    ///
    /// `NO_COLOR` is read separately by [`GlobalArgs::color_enabled`], so
    /// any non-empty value works there, not just `true`.
    #[arg(long = "no-color", global = true, help = "Disable colored output")]
    pub no_color: bool,

    /// TOML file to read instead of the per-user default.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,

    /// How templates and listings are written to stdout.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Output format"
    )]
    pub output_format: OutputFormat,
}

impl GlobalArgs {
    /// Whether ANSI colour may be used at all.
    ///
    /// Off when any of these hold: `--no-color`, a non-empty `NO_COLOR`,
    /// `output.no_color = true` in the config.  Terminal detection is left to
    /// the caller.
    pub fn color_enabled(&self, config_no_color: bool) -> bool {
        let env = std::env::var_os(NO_COLOR_ENV);
        !(self.no_color || config_no_color || no_color_requested(env.as_deref()))
    }
}

/// `NO_COLOR` semantics: present and non-empty disables colour, whatever the
/// value.
pub fn no_color_requested(value: Option<&OsStr>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// How the CLI should render its output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human when stdout is a terminal, plain otherwise.
    #[default]
    Auto,
    /// Headers, labels and colour.
    Human,
    /// Labels without colour.
    Plain,
    /// `TemplateSet` or listing as JSON.
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_color_any_non_empty_value() {
        assert!(no_color_requested(Some(OsStr::new("1"))));
        assert!(no_color_requested(Some(OsStr::new("yes"))));
        assert!(no_color_requested(Some(OsStr::new("false"))));
    }

    #[test]
    fn no_color_empty_or_unset_keeps_color() {
        assert!(!no_color_requested(Some(OsStr::new(""))));
        assert!(!no_color_requested(None));
    }

    #[test]
    fn flag_and_config_disable_color() {
        let mut args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: true,
            config: None,
            output_format: OutputFormat::Auto,
        };
        assert!(!args.color_enabled(false));

        args.no_color = false;
        assert!(!args.color_enabled(true));
    }
}
