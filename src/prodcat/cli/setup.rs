use clap::{Args, Parser, Subcommand, ValueEnum};
use prodcat::view::SortKey;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "prodcat", bin_name = "prodcat", version)]
#[command(about = "Local product catalog manager", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to $PRODCAT_DATA, then the OS data dir)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logging to stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Core(CoreCommands),

    #[command(flatten)]
    Product(ProductCommands),

    #[command(flatten)]
    View(ViewCommands),

    #[command(flatten)]
    Data(DataCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

/// Editable product fields, shared by `create` and `edit`.
#[derive(Args, Debug, Default, Clone)]
pub struct ProductFields {
    /// Product name
    #[arg(long)]
    pub name: Option<String>,

    /// Price, e.g. 29.99
    #[arg(long)]
    pub price: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub category: Option<String>,

    #[arg(long)]
    pub subcategory: Option<String>,

    /// Image URL (repeatable, first is the primary image)
    #[arg(long = "image", value_name = "URL")]
    pub images: Vec<String>,

    /// Available size (repeatable)
    #[arg(long = "size", value_name = "SIZE")]
    pub sizes: Vec<String>,

    /// Mark as bestseller (`--bestseller false` to unmark)
    #[arg(long, value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    pub bestseller: Option<bool>,

    /// External product code
    #[arg(long, value_name = "CODE")]
    pub code: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum CoreCommands {
    /// Create a new product
    #[command(alias = "n", display_order = 1)]
    Create {
        #[command(flatten)]
        fields: ProductFields,
    },

    /// List products in the current view
    #[command(alias = "ls", display_order = 2)]
    List {
        /// Search name, description and product code
        #[arg(short, long)]
        search: Option<String>,

        /// Only this category (empty string clears)
        #[arg(short, long)]
        category: Option<String>,

        /// Bestseller filter
        #[arg(short, long, value_enum)]
        bestseller: Option<BestsellerFilter>,

        /// Restore the default view before listing
        #[arg(long)]
        reset: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProductCommands {
    /// Show one or more products in full
    #[command(alias = "v", display_order = 10)]
    View {
        /// Positions, ranges, ids or product codes (e.g. 1 2-4 SAMPLE-001)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Change fields of a product
    #[command(alias = "e", display_order = 11)]
    Edit {
        /// Position, id or product code
        selector: String,

        #[command(flatten)]
        fields: ProductFields,

        /// Remove all images
        #[arg(long, conflicts_with = "images")]
        clear_images: bool,

        /// Remove all sizes
        #[arg(long, conflicts_with = "sizes")]
        clear_sizes: bool,
    },

    /// Delete one or more products
    #[command(alias = "rm", display_order = 12)]
    Delete {
        /// Positions, ranges, ids or product codes (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Move a product to another position (manual order only)
    #[command(alias = "mv", display_order = 13)]
    Move {
        /// Current position
        from: usize,

        /// New position
        to: usize,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum ViewCommands {
    /// Sort by a field; repeating the same field flips the direction
    #[command(display_order = 20)]
    Sort {
        #[arg(value_enum)]
        field: SortField,
    },

    /// Toggle manual order (stored order, enables `move`)
    #[command(display_order = 21)]
    Manual,
}

#[derive(Subcommand, Debug)]
pub enum DataCommands {
    /// Export the whole catalog as JSON
    #[command(display_order = 30)]
    Export {
        /// Output file (defaults to the `export-file` setting)
        #[arg(short, long, value_name = "FILE", conflicts_with = "stdout")]
        output: Option<PathBuf>,

        /// Write to stdout instead of a file
        #[arg(long)]
        stdout: bool,
    },

    /// Import products from an exported JSON file
    #[command(display_order = 31)]
    Import {
        path: PathBuf,

        /// Replace the catalog instead of adding new products
        #[arg(long)]
        replace: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// List categories in use
    #[command(display_order = 40)]
    Categories,

    /// Get or set configuration
    #[command(display_order = 41)]
    Config {
        /// Configuration key (e.g., currency)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SortField {
    Name,
    Price,
    Date,
}

impl From<SortField> for SortKey {
    fn from(field: SortField) -> Self {
        match field {
            SortField::Name => SortKey::Name,
            SortField::Price => SortKey::Price,
            SortField::Date => SortKey::Date,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum BestsellerFilter {
    #[value(name = "true")]
    Only,
    #[value(name = "false")]
    Exclude,
    All,
}

impl BestsellerFilter {
    pub fn as_filter(self) -> Option<bool> {
        match self {
            BestsellerFilter::Only => Some(true),
            BestsellerFilter::Exclude => Some(false),
            BestsellerFilter::All => None,
        }
    }
}
