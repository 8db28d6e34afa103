use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "medstock", bin_name = "medstock", version = get_version())]
#[command(about = "Pharmacy inventory and sales ledger", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the inventory, sales and config documents
    #[arg(long, global = true, env = "MEDSTOCK_HOME", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a medicine to the inventory
    #[command(alias = "a")]
    Add {
        #[command(flatten)]
        fields: MedicineFields,
    },

    /// List medicines
    #[command(alias = "ls")]
    List {
        /// Only show medicines whose name contains this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Search medicines by name (case-insensitive)
    Search { query: String },

    /// Edit a medicine by its row number in the listing
    #[command(alias = "e")]
    Edit {
        /// Row number as shown by `list` (with the same --search, if any)
        row: usize,

        /// Resolve the row against this search instead of the full list
        #[arg(short, long)]
        search: Option<String>,

        #[command(flatten)]
        fields: MedicineFields,
    },

    /// Delete a medicine by its row number in the listing
    #[command(alias = "rm")]
    Delete {
        /// Row number as shown by `list` (with the same --search, if any)
        row: usize,

        /// Resolve the row against this search instead of the full list
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Record a sale
    #[command(alias = "o")]
    Order {
        /// Medicine name
        #[arg(short, long)]
        medicine: String,

        /// Units sold
        #[arg(short, long)]
        quantity: String,

        /// Price per unit, e.g. 4.50
        #[arg(short, long)]
        price: String,
    },

    /// List recorded sales
    Sales,

    /// Show sales totals
    Summary,

    /// Get or set configuration
    Config {
        /// Configuration key (currency, low-stock)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

/// Medicine form fields. All optional at the parser level; the library
/// decides what is required.
#[derive(Args, Debug, Default)]
pub struct MedicineFields {
    /// Medicine name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Units in stock (digits only)
    #[arg(short, long)]
    pub quantity: Option<String>,

    /// Identifier, e.g. a product code
    #[arg(short, long)]
    pub id: Option<String>,

    /// What the medicine is used for
    #[arg(short, long)]
    pub usage: Option<String>,

    /// Known side effects
    #[arg(long)]
    pub side_effects: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_add_fields() {
        let cli = Cli::try_parse_from([
            "medstock", "add", "--name", "Aspirin", "-q", "10", "--id", "A1",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Add { fields }) => {
                assert_eq!(fields.name.as_deref(), Some("Aspirin"));
                assert_eq!(fields.quantity.as_deref(), Some("10"));
                assert!(fields.usage.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parses_delete_with_search() {
        let cli = Cli::try_parse_from(["medstock", "rm", "2", "--search", "asp"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Delete { row: 2, search: Some(ref s) }) if s == "asp"
        ));
    }
}
