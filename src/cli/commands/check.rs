//! `partpromo check` command - Validate a data directory

use console::style;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;
use tabled::{builder::Builder, settings::Style};

use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::dataset::DatasetSummary;
use crate::core::loader::load_dataset;

#[derive(clap::Args, Debug)]
pub struct CheckArgs {
    /// Directory holding supplier, nation, part, partsupp and lineitem tables
    pub data_dir: PathBuf,
}

pub fn run(args: CheckArgs, global: &GlobalOpts) -> Result<()> {
    let dataset = load_dataset(&args.data_dir)?;
    let summary = dataset.summary();

    match global.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summary).into_diagnostic()?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&summary).into_diagnostic()?);
        }
        OutputFormat::Md => {
            println!("{}", summary_table(&summary).with(Style::markdown()));
        }
        OutputFormat::Csv => {
            println!("table,rows");
            for (table, rows) in table_rows(&summary) {
                println!("{},{}", table, rows);
            }
        }
        OutputFormat::Tsv => {
            for (table, rows) in table_rows(&summary) {
                println!("{}\t{}", table, rows);
            }
        }
        OutputFormat::Auto => {
            println!("{}", summary_table(&summary).with(Style::rounded()));
        }
    }

    dataset.validate()?;

    if summary.unresolved_suppliers > 0 && !global.quiet {
        eprintln!(
            "{} {} supplier(s) reference an unknown nation and will never qualify",
            style("!").yellow(),
            summary.unresolved_suppliers
        );
    }
    if !global.quiet {
        eprintln!("{} Dataset is valid", style("✓").green());
    }

    Ok(())
}

fn table_rows(summary: &DatasetSummary) -> [(&'static str, usize); 5] {
    [
        ("supplier", summary.suppliers),
        ("nation", summary.nations),
        ("part", summary.parts),
        ("partsupp", summary.part_supplies),
        ("lineitem", summary.line_items),
    ]
}

fn summary_table(summary: &DatasetSummary) -> tabled::Table {
    let mut builder = Builder::default();
    builder.push_record(["Table", "Rows"]);
    for (table, rows) in table_rows(summary) {
        builder.push_record([table.to_string(), rows.to_string()]);
    }
    builder.build()
}
