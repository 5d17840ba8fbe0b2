//! Command-line icon discovery.
//!
//! Finds icons for a URL and prints their format, size and URL. Results
//! are printed as an aligned table by default, or as JSON, CSV or TSV.

use anyhow::bail;
use clap::Parser;
use favscan::filter::SquareOnly;
use favscan::{Finder, Icon};

#[derive(Debug, Parser)]
#[command(name = "favscan")]
#[command(about = "Find favicons for a web page")]
struct Cli {
    /// Page URL (http or https).
    url: String,

    /// Output the icon list as JSON.
    #[arg(long, conflicts_with_all = ["csv", "tsv"])]
    json: bool,

    /// Output the icon list as CSV.
    #[arg(long, conflicts_with = "tsv")]
    csv: bool,

    /// Output the icon list as TSV.
    #[arg(long)]
    tsv: bool,

    /// Only show square icons.
    #[arg(long)]
    square: bool,

    /// Skip the manifest lookup.
    #[arg(long = "no-manifest")]
    no_manifest: bool,

    /// Skip well-known path probing.
    #[arg(long = "no-well-known")]
    no_well_known: bool,

    /// Show informational messages.
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let lowered = cli.url.to_ascii_lowercase();
    if !lowered.starts_with("http://") && !lowered.starts_with("https://") {
        bail!("invalid URL: {:?}", cli.url);
    }

    let mut builder = Finder::builder()
        .manifest(!cli.no_manifest)
        .well_known(!cli.no_well_known);
    if cli.square {
        builder = builder.filter(SquareOnly);
    }
    let icons = builder.build()?.find(&cli.url).await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&icons)?);
    } else if cli.csv {
        print!("{}", render_separated(&icons, ","));
    } else if cli.tsv {
        print!("{}", render_separated(&icons, "\t"));
    } else {
        print!("{}", render_table(&icons));
    }
    Ok(())
}

const HEADER: [&str; 5] = ["#", "format", "width", "height", "url"];

fn rows(icons: &[Icon]) -> Vec<[String; 5]> {
    icons
        .iter()
        .enumerate()
        .map(|(i, icon)| {
            [
                (i + 1).to_string(),
                icon.mime_type.clone(),
                icon.width.to_string(),
                icon.height.to_string(),
                icon.url.clone(),
            ]
        })
        .collect()
}

fn render_separated(icons: &[Icon], sep: &str) -> String {
    let mut out = HEADER.join(sep);
    out.push('\n');
    for row in rows(icons) {
        out.push_str(&row.join(sep));
        out.push('\n');
    }
    out
}

fn render_table(icons: &[Icon]) -> String {
    let rows = rows(icons);
    let mut widths: Vec<usize> = HEADER.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let render_row = |cells: &[String]| -> String {
        let mut line = String::new();
        for (i, (cell, &width)) in cells.iter().zip(&widths).enumerate() {
            if i > 0 {
                line.push_str("  ");
            }
            line.push_str(&format!("{cell:<width$}"));
        }
        line.trim_end().to_owned() + "\n"
    };

    let header: Vec<String> = HEADER.iter().map(|&h| h.to_owned()).collect();
    let mut out = render_row(&header);
    for row in &rows {
        out.push_str(&render_row(row));
    }
    out
}
