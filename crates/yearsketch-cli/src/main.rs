use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod clipboard;
mod commands;
mod common;

#[derive(Parser)]
#[command(name = "yearsketch", version, about = "Yearsketch -- sketch your year in nine questions")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive questionnaire
    Run {
        /// Locale for prompts and the report (zh or en)
        #[arg(long)]
        locale: Option<String>,
        /// Skip the presentation pauses between questions
        #[arg(long)]
        fast: bool,
    },
    /// Render the shareable report from a saved answers JSON document
    Report {
        /// Answers JSON file ("-" or absent reads stdin)
        input: Option<PathBuf>,
        #[arg(long)]
        locale: Option<String>,
    },
    /// Render emoji art from a saved answers JSON document
    Art {
        /// Answers JSON file ("-" or absent reads stdin)
        input: Option<PathBuf>,
        /// bear, person, or random
        #[arg(long, default_value = "random")]
        shape: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Run { locale, fast } => commands::run::run(locale, fast),
        Commands::Report { input, locale } => commands::report::run(input, locale),
        Commands::Art { input, shape } => commands::art::run(input, &shape),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
