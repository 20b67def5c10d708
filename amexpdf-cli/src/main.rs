use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

use amexpdf_ingest::{extract_page_texts, parse_amex_de_text, StatementTransaction};

#[derive(Parser, Debug)]
#[command(
    name = "amexpdf",
    version,
    about = "Extract transactions from an American Express PDF statement"
)]
struct Cli {
    /// Path to the statement PDF
    pdf: PathBuf,

    /// Output CSV path
    #[arg(default_value = "amex_transactions.csv")]
    csv: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let pages = extract_page_texts(&cli.pdf)?;

    // Page 0 is the cover sheet and never carries transaction rows.
    let mut txns = Vec::new();
    for (page_no, text) in pages.iter().enumerate().skip(1) {
        let parsed = parse_amex_de_text(text)
            .with_context(|| format!("parsing page {} of {}", page_no + 1, cli.pdf.display()))?;
        txns.extend(parsed);
    }

    write_csv(&cli.csv, &txns)?;

    println!(
        "Wrote {} transactions from {} to {}",
        txns.len(),
        cli.pdf.display(),
        cli.csv.display()
    );

    Ok(())
}

fn write_csv(path: &Path, txns: &[StatementTransaction]) -> Result<()> {
    let mut wtr =
        csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;
    for txn in txns {
        wtr.serialize(txn)?;
    }
    wtr.flush()?;
    Ok(())
}
