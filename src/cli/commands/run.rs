//! `partpromo run` command - Evaluate the query against a data directory

use console::style;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;
use tabled::{builder::Builder, settings::Style};
use tracing::info;

use crate::cli::helpers::{escape_csv, escape_md};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::config::Config;
use crate::core::loader::load_dataset;
use crate::query::{PartPromotion, PromotionCandidate};

#[derive(clap::Args, Debug)]
pub struct RunArgs {
    /// Directory holding supplier, nation, part, partsupp and lineitem tables
    pub data_dir: PathBuf,

    /// Part name prefix (default: midnight)
    #[arg(long, short = 'p')]
    pub prefix: Option<String>,

    /// Nation name suppliers must be located in (default: IRAN)
    #[arg(long, short = 'n')]
    pub nation: Option<String>,

    /// First day of the one-year shipment window (default: 1994-01-01)
    #[arg(long, short = 's')]
    pub start: Option<String>,

    /// Number of suppliers to return (default: 1)
    #[arg(long, short = 'l', conflicts_with = "all")]
    pub limit: Option<usize>,

    /// Return every qualifying supplier
    #[arg(long)]
    pub all: bool,
}

pub fn run(args: RunArgs, global: &GlobalOpts) -> Result<()> {
    let mut config = Config::load(Some(&args.data_dir));
    config.merge(Config {
        prefix: args.prefix,
        nation: args.nation,
        window_start: args.start,
        limit: args.limit,
        default_format: None,
    });

    let params = config.query_params()?;
    let limit = if args.all { usize::MAX } else { params.limit };
    info!(?params, "evaluating");

    let dataset = load_dataset(&args.data_dir)?;
    let query = PartPromotion::new(params);
    let results = query.evaluate_ranked(&dataset, limit)?;

    let format = match global.format.or_configured(config.default_format.as_deref()) {
        OutputFormat::Auto => OutputFormat::Tsv,
        f => f,
    };

    print!("{}", render(&results, format)?);

    if format == OutputFormat::Tsv && !global.quiet && !results.is_empty() {
        println!();
        println!(
            "{} supplier(s) found in {} (window {}).",
            style(results.len()).cyan(),
            style(&query.params().nation).cyan(),
            query.params().window()
        );
    }

    Ok(())
}

/// Render results in the requested format
pub fn render(results: &[PromotionCandidate], format: OutputFormat) -> Result<String> {
    let mut output = String::new();

    match format {
        OutputFormat::Json => {
            output.push_str(&serde_json::to_string_pretty(results).into_diagnostic()?);
            output.push('\n');
        }
        OutputFormat::Yaml => {
            output.push_str(&serde_yml::to_string(&results).into_diagnostic()?);
        }
        OutputFormat::Csv => {
            output.push_str("name,address\n");
            for candidate in results {
                output.push_str(&format!(
                    "{},{}\n",
                    escape_csv(&candidate.name),
                    escape_csv(&candidate.address)
                ));
            }
        }
        OutputFormat::Md => {
            if results.is_empty() {
                output.push_str("No qualifying supplier.\n");
            } else {
                let mut builder = Builder::default();
                builder.push_record(["Name", "Address"]);
                for candidate in results {
                    builder.push_record([escape_md(&candidate.name), escape_md(&candidate.address)]);
                }
                output.push_str(&builder.build().with(Style::markdown()).to_string());
                output.push('\n');
            }
        }
        OutputFormat::Tsv | OutputFormat::Auto => {
            if results.is_empty() {
                output.push_str("No qualifying supplier.\n");
            }
            for candidate in results {
                output.push_str(&format!("{}\t{}\n", candidate.name, candidate.address));
            }
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates() -> Vec<PromotionCandidate> {
        vec![PromotionCandidate {
            name: "Supplier#000000001".into(),
            address: "12 Elm St, Tehran".into(),
        }]
    }

    #[test]
    fn test_render_tsv() {
        let out = render(&candidates(), OutputFormat::Tsv).unwrap();
        assert_eq!(out, "Supplier#000000001\t12 Elm St, Tehran\n");
    }

    #[test]
    fn test_render_csv_escapes() {
        let out = render(&candidates(), OutputFormat::Csv).unwrap();
        assert_eq!(out, "name,address\nSupplier#000000001,\"12 Elm St, Tehran\"\n");
    }

    #[test]
    fn test_render_json() {
        let out = render(&candidates(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["name"], "Supplier#000000001");
        assert_eq!(value[0]["address"], "12 Elm St, Tehran");
    }

    #[test]
    fn test_render_md_table() {
        let out = render(&candidates(), OutputFormat::Md).unwrap();
        assert!(out.contains("| Name"));
        assert!(out.contains("Supplier#000000001"));
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(
            render(&[], OutputFormat::Tsv).unwrap(),
            "No qualifying supplier.\n"
        );
        assert_eq!(render(&[], OutputFormat::Json).unwrap(), "[]\n");
        assert_eq!(render(&[], OutputFormat::Csv).unwrap(), "name,address\n");
    }
}
