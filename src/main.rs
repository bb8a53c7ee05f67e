use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::io;
use std::path::PathBuf;
use tokio::io::{AsyncBufRead, BufReader};
use tracing_subscriber::EnvFilter;
use vending_machine::application::machine::VendingMachine;
use vending_machine::domain::ports::StockSourceBox;
use vending_machine::infrastructure::in_memory::DefaultStock;
use vending_machine::interfaces::console::session::Session;
use vending_machine::interfaces::csv::inventory_writer::InventoryWriter;
use vending_machine::interfaces::csv::stock_reader::CsvStockSource;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Keypad commands, one per line. Reads stdin when omitted.
    input: Option<PathBuf>,

    /// CSV file with `name, price, quantity` rows to stock the machine with.
    #[arg(long)]
    stock: Option<PathBuf>,

    /// Print the remaining inventory and revenue as CSV when the session ends.
    #[arg(long)]
    report: bool,

    /// Skip the start-up banner and product listing.
    #[arg(long)]
    quiet: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout is the machine's display.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("vending_machine=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let source: StockSourceBox = match cli.stock {
        Some(path) => Box::new(CsvStockSource::new(path)),
        None => Box::new(DefaultStock::new()),
    };
    let machine = VendingMachine::from_source(source.as_ref()).into_diagnostic()?;

    let input: Box<dyn AsyncBufRead + Unpin> = match cli.input {
        Some(path) => {
            let file = tokio::fs::File::open(path).await.into_diagnostic()?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(tokio::io::stdin())),
    };

    let mut session = Session::new(machine, tokio::io::stdout());
    if !cli.quiet {
        session.turn_on().await.into_diagnostic()?;
    }
    session.listen(input).await.into_diagnostic()?;

    if cli.report {
        let machine = session.into_machine();
        let stdout = io::stdout();
        let mut writer = InventoryWriter::new(stdout.lock());
        writer
            .write_inventory(machine.catalog().slots(), machine.revenue())
            .into_diagnostic()?;
    }

    Ok(())
}
