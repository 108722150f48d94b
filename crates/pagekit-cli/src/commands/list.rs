//! Implementation of the `pagekit list` command.

use pagekit_adapters::FactoryRegistry;
use pagekit_core::domain::Variant;
use serde::Serialize;

use crate::{
    cli::{ListArgs, ListFormat},
    error::CliResult,
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct VariantRow {
    name: Variant,
    engine: &'static str,
}

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    let registry = FactoryRegistry::with_builtin();
    let rows: Vec<VariantRow> = registry
        .variants()
        .into_iter()
        .map(|name| VariantRow {
            name,
            engine: name.display_name(),
        })
        .collect();

    match args.format {
        ListFormat::Table => {
            output.header("Available variants:")?;
            for row in &rows {
                output.data(&format!("  {:<12} {}", row.name.as_str(), row.engine))?;
            }
        }

        ListFormat::Json => output.json(&rows)?,

        ListFormat::List => {
            for row in &rows {
                output.data(row.name.as_str())?;
            }
        }

        ListFormat::Csv => {
            output.data("name,engine")?;
            for row in &rows {
                output.data(&format!("{},{}", row.name, row.engine))?;
            }
        }
    }

    Ok(())
}
