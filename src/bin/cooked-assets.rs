use std::path::PathBuf;

use clap::Parser;
use cooked_assets::GenerateOpts;

#[derive(Parser, Debug)]
#[command(
    name = "cooked-assets",
    version,
    about = "Regenerate the site's OG image, favicons and touch icon"
)]
struct Cli {
    /// Output directory (created if missing; existing files are overwritten).
    #[arg(long, default_value = GenerateOpts::DEFAULT_OUT_DIR)]
    out_dir: PathBuf,

    /// Print the generated files as a JSON array instead of one line per file.
    #[arg(long)]
    json: bool,

    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let opts = GenerateOpts {
        out_dir: cli.out_dir,
    };
    let written = cooked_assets::generate_all_with(&opts, |asset| {
        if !cli.json {
            println!("{}", asset.summary_line());
        }
    })?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&written)?);
    } else {
        println!("\nAll assets generated!");
    }
    Ok(())
}
