//! mdpress CLI - markdown-subset report to PDF

use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;

use mdpress::{JsonFormat, Mdpress};

#[derive(Parser)]
#[command(name = "mdpress")]
#[command(version)]
#[command(about = "Press a markdown-subset report into a paginated PDF", long_about = None)]
struct Cli {
    /// Input report file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Output file (derived from the input name if not specified)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Directory containing the font family
    #[arg(long, value_name = "DIR")]
    fonts_dir: Option<PathBuf>,

    /// Font family name (expects FAMILY-Regular.ttf and friends)
    #[arg(long, value_name = "NAME")]
    font_family: Option<String>,

    /// Base directory for resolving image references
    #[arg(long, value_name = "DIR")]
    image_dir: Option<PathBuf>,

    /// Emit the classified block sequence as JSON instead of a PDF
    #[arg(long)]
    json: bool,

    /// Output compact JSON
    #[arg(long, requires = "json")]
    compact: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut press = Mdpress::new();
    if let Some(dir) = &cli.fonts_dir {
        press = press.with_fonts_dir(dir);
    }
    if let Some(family) = &cli.font_family {
        press = press.with_font_family(family.clone());
    }
    if let Some(dir) = &cli.image_dir {
        press = press.with_image_dir(dir);
    }

    let result = press.parse(&cli.input)?;

    if cli.json {
        let format = if cli.compact {
            JsonFormat::Compact
        } else {
            JsonFormat::Pretty
        };
        let json = result.to_json(format)?;
        match &cli.output {
            Some(path) => {
                std::fs::write(path, &json)?;
                println!("{} {}", "Saved to".green(), path.display());
            }
            None => println!("{}", json),
        }
        return Ok(());
    }

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| derive_output(&cli.input));
    let rendered = result.to_pdf_file(&output)?;

    for warning in &rendered.warnings {
        eprintln!("{}: {}", "Warning".yellow().bold(), warning);
    }
    println!(
        "{} PDF report generated: {}",
        "\u{2713}".green().bold(),
        output.display()
    );
    if rendered.stats.images_skipped > 0 {
        println!(
            "  {} image(s) skipped, {} embedded",
            rendered.stats.images_skipped, rendered.stats.images_embedded
        );
    }

    Ok(())
}

/// Output path derived from the report name: `report.md` → `report.pdf`.
fn derive_output(input: &Path) -> PathBuf {
    input.with_extension("pdf")
}
