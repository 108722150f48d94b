//! Implementation of the `pagekit show` command.

use pagekit_adapters::FactoryRegistry;
use pagekit_core::{
    application::TemplateService,
    domain::{TemplateKind, Variant},
};
use serde::Serialize;
use tracing::info;

use crate::{
    cli::{OutputFormat, ShowArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// JSON shape for a single template.
#[derive(Debug, Serialize)]
struct SingleTemplate<'a> {
    variant: Variant,
    kind: TemplateKind,
    template: &'a str,
}

pub fn execute(args: ShowArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let variant = match args.variant {
        Some(arg) => arg.into(),
        None => config.default_variant()?,
    };

    let registry = FactoryRegistry::with_builtin();
    let service = TemplateService::new(registry.get(variant)?);
    info!(%variant, part = ?args.part, "showing templates");

    match (output.format(), args.part.kind()) {
        (OutputFormat::Json, None) => output.json(&service.template_set())?,
        (OutputFormat::Json, Some(kind)) => output.json(&SingleTemplate {
            variant,
            kind,
            template: &service.render(kind),
        })?,

        // A single template is printed bare so it can be piped into a file.
        (_, Some(kind)) => output.data(&service.render(kind))?,

        (_, None) => {
            let set = service.template_set();
            output.header(&format!("{} templates", variant.display_name()))?;
            for kind in [TemplateKind::Title, TemplateKind::Page] {
                output.data(&format!(
                    "{} {}",
                    output.label(&format!("{kind}:")),
                    set.get(kind)
                ))?;
            }
        }
    }

    Ok(())
}
