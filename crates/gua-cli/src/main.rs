//! CLI frontend for the hexagram engine.

mod commands;
mod logging;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "gua",
    about = "Cast I Ching hexagrams and analyze their element relations",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cast a hexagram and print the full reading
    Cast {
        /// The question being asked
        #[arg(short, long)]
        topic: String,

        /// RNG seed for a reproducible cast
        #[arg(short, long)]
        seed: Option<u64>,

        /// Casting time as "YYYY-MM-DD HH:MM" (default: now)
        #[arg(long)]
        time: Option<String>,

        /// Interpretation context: general, career, relationship, health, wealth
        #[arg(short, long, default_value = "general")]
        context: String,

        /// Output format: markdown, json
        #[arg(short, long, default_value = "markdown")]
        format: String,

        /// Markdown template: modern, traditional
        #[arg(long, default_value = "modern")]
        template: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// JSON text table to use instead of the bundled one
        #[arg(long)]
        texts: Option<PathBuf>,
    },

    /// Analyze an explicit line sequence
    Show {
        /// Six lines bottom first, 1 = yang, 0 = yin (e.g. 111000)
        #[arg(short, long)]
        lines: String,

        /// Comma-separated 0-based changing-line indices (e.g. 0,5)
        #[arg(long)]
        changing: Option<String>,

        /// The question being asked
        #[arg(short, long, default_value = "")]
        topic: String,

        /// Interpretation context: general, career, relationship, health, wealth
        #[arg(short, long, default_value = "general")]
        context: String,

        /// Output format: markdown, json
        #[arg(short, long, default_value = "markdown")]
        format: String,

        /// Markdown template: modern, traditional
        #[arg(long, default_value = "modern")]
        template: String,

        /// Casting time as "YYYY-MM-DD HH:MM" (default: now)
        #[arg(long)]
        time: Option<String>,
    },

    /// List the eight trigrams
    Trigrams,

    /// Walk a five-element relation cycle
    Cycle {
        /// Starting element (metal, wood, water, fire, earth or 金木水火土)
        element: String,

        /// Relation to follow (generating, overcoming, draining, transforming);
        /// all four when omitted
        relation: Option<String>,
    },
}

fn main() {
    logging::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Cast {
            topic,
            seed,
            time,
            context,
            format,
            template,
            output,
            texts,
        } => commands::cast::run(&commands::cast::CastArgs {
            topic: &topic,
            seed,
            time: time.as_deref(),
            context: &context,
            format: &format,
            template: &template,
            output: output.as_deref(),
            texts: texts.as_deref(),
        }),
        Commands::Show {
            lines,
            changing,
            topic,
            context,
            format,
            template,
            time,
        } => commands::show::run(&commands::show::ShowArgs {
            lines: &lines,
            changing: changing.as_deref(),
            topic: &topic,
            context: &context,
            format: &format,
            template: &template,
            time: time.as_deref(),
        }),
        Commands::Trigrams => commands::trigrams::run(),
        Commands::Cycle { element, relation } => {
            commands::cycle::run(&element, relation.as_deref())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
