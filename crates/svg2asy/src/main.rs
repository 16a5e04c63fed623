use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use env_logger::Env;
use log::warn;
use svg2asy_path::translate;

#[derive(Parser)]
#[command(name = "svg2asy")]
#[command(about = "Convert SVG cubic-Bezier paths to Asymptote path declarations", long_about = None)]
#[command(version)]
struct Cli {
    /// SVG document to convert
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    file: PathBuf,

    /// Append a dot(...) marker for every anchor and control point
    #[arg(long)]
    debug: bool,

    /// Skip paths that fail to translate instead of aborting the run
    #[arg(long)]
    skip_unsupported: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "Error:".red());
        for cause in e.chain().skip(1) {
            eprintln!("  {cause}");
        }
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Default level overridden by RUST_LOG
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let commands = svg2asy_svg::load_path_commands(&cli.file)
        .with_context(|| format!("Failed to load paths from {}", cli.file.display()))?;

    for (i, command) in commands.iter().enumerate() {
        let path_name = format!("path{}", i + 1);
        match translate(command, cli.debug, &path_name) {
            Ok(asy) => println!("{asy}"),
            Err(e) if cli.skip_unsupported => warn!("skipping {path_name}: {e}"),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to translate {path_name}"));
            }
        }
    }

    Ok(())
}
