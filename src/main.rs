use clap::{Parser, Subcommand};
use folio::{config, generate, jsonld, output, source};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Static generator for single-page portfolio sites")]
#[command(long_about = "\
Static generator for single-page portfolio sites

One JSON document describes the whole page: person, projects,
publications, experience and skills. folio renders it into a single
index.html with embedded styles, JSON-LD structured data and a small
runtime for email copy, resume downloads and scroll-synced navigation.

Source structure:

  site/
  ├── data.json            # The data document (path configurable)
  ├── config.toml          # Optional: about text, colors, sections, timings
  └── assets/              # Copied verbatim to <output>/assets/
      ├── icons/           # Overrides the stock icons (email.svg, ...)
      ├── img/             # Project thumbnails referenced from data.json
      └── resume/          # Resume files referenced from person.resumes

Run 'folio gen-config' to print a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Directory holding data.json, config.toml and assets/
    #[arg(long, default_value = ".", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the site into the output directory
    Build,
    /// Load and validate the data document and config without writing anything
    Check,
    /// Print the JSON-LD structured data for the site
    Jsonld,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            println!("==> Building {}", cli.source.display());
            let report = generate::generate(&cli.source, &cli.output)?;
            output::print_build_output(&report);
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let site_config = config::load_config(&cli.source)?;
            let data = source::load(&cli.source.join(&site_config.data))?;
            output::print_check_output(&data);
            println!("==> Content is valid");
        }
        Command::Jsonld => {
            let site_config = config::load_config(&cli.source)?;
            let data = source::load(&cli.source.join(&site_config.data))?;
            println!("{}", serde_json::to_string_pretty(&jsonld::build(&data))?);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
