mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "arcanaut",
    version,
    about = "Extract character kits from the 3DeT Victory Manual do Arcanauta PDF"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract all kits from the PDF and write them as JSON
    Extract {
        /// Path to the book PDF
        pdf_file: PathBuf,

        /// Output JSON file (removed first if it already exists)
        #[arg(short = 'O', long = "out", value_name = "FILE", default_value = "kits.json")]
        out: PathBuf,

        /// What to do with a title-shaped line that ends a power's text:
        /// discard (default) or reuse it as the next power's first fragment
        #[arg(long = "heading-boundary", default_value = "discard")]
        heading_boundary: String,
    },
    /// Dump the extracted per-page text (what the parser will see)
    Pages {
        /// Path to the book PDF
        pdf_file: PathBuf,

        /// Only show this page (1-based)
        #[arg(short, long)]
        page: Option<usize>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            pdf_file,
            out,
            heading_boundary,
        } => commands::extract::run(pdf_file, out, &heading_boundary),
        Commands::Pages { pdf_file, page } => commands::pages::run(pdf_file, page),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
