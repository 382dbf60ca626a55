mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "blanda",
    version,
    about = "Catalog browser and blend calculator for haircare chemical products"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the weighted profile of a blend
    Mix {
        /// Blend JSON file (array of entries)
        blend_file: Option<PathBuf>,

        /// Inline entry, PRODUCT_ID:GRAMS (repeatable)
        #[arg(short = 'e', long = "entry", value_name = "ID:GRAMS")]
        entries: Vec<String>,

        /// Custom catalog JSON file (overrides --preset)
        #[arg(short, long, value_name = "FILE")]
        catalog: Option<PathBuf>,

        /// Predefined catalog (default: demo)
        #[arg(short, long, default_value = "demo")]
        preset: String,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// List catalog products, optionally filtered
    Products {
        /// Filter by brand id or name
        #[arg(long)]
        brand: Option<String>,

        /// Filter by line id or name
        #[arg(long)]
        line: Option<String>,

        /// Filter by target hair type tag
        #[arg(long)]
        hair: Option<String>,

        /// Filter by product-name substring
        #[arg(short, long)]
        query: Option<String>,

        /// Custom catalog JSON file (overrides --preset)
        #[arg(short, long, value_name = "FILE")]
        catalog: Option<PathBuf>,

        /// Predefined catalog (default: demo)
        #[arg(short, long, default_value = "demo")]
        preset: String,

        /// Write a zero-gram blend JSON for the filtered products
        #[arg(long, value_name = "FILE")]
        prefill: Option<PathBuf>,
    },
    /// Manage and inspect catalogs
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List predefined catalogs
    List,
    /// Show a catalog's brands, lines and products
    Show {
        /// Preset name (e.g., "demo")
        #[arg(short, long, default_value = "demo")]
        preset: String,

        /// Custom catalog JSON file (overrides --preset)
        #[arg(short, long, value_name = "FILE")]
        catalog: Option<PathBuf>,
    },
    /// Print the catalog JSON schema with field descriptions and example
    Schema,
    /// Validate a custom catalog file
    Validate {
        /// Path to JSON catalog file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Mix {
            blend_file,
            entries,
            catalog,
            preset,
            output,
        } => commands::mix::run(blend_file, entries, catalog, &preset, &output),
        Commands::Products {
            brand,
            line,
            hair,
            query,
            catalog,
            preset,
            prefill,
        } => commands::products::run(brand, line, hair, query, catalog, &preset, prefill),
        Commands::Catalog { action } => match action {
            CatalogAction::List => commands::catalog::list(),
            CatalogAction::Show { preset, catalog } => {
                commands::catalog::show(&preset, catalog)
            }
            CatalogAction::Schema => commands::catalog::schema(),
            CatalogAction::Validate { file } => commands::catalog::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
