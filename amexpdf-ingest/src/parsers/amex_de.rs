//! AMEX Germany credit-card statement parser (PDF text)
//!
//! Expected text rows after PDF-to-text:
//!   05.03.24 04.03.24 SPOTIFY STOCKHOLM
//!   9,99
//!
//! Header lines carry the posting/transaction date columns plus the
//! merchant; amounts land on lines of their own, in European notation
//! (dot for thousands, comma for decimals). Both interleave with balance,
//! total and interest-rate rows that are not transactions.

use std::sync::OnceLock;

use anyhow::{anyhow, bail, Context, Result};
use regex::Regex;

use crate::types::{HeaderLine, StatementTransaction};

/// Policy that strips non-transaction figures from a page's amount column.
pub type SummaryFilter = fn(&mut Vec<f64>);

fn header_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\d{2}\.\d{2}\.\d{2}\s\d{2}\.\d{2}\.\d{2}").expect("invalid header regex")
    })
}

fn rate_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+,\d+%").expect("invalid rate regex"))
}

fn amount_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^-?\d{1,3}(\.\d{3})*,\d{2}$").expect("invalid amount regex"))
}

/// Classify every line of a page into header lines and raw amount lines.
///
/// One forward pass, first matching rule wins. Both lists preserve
/// document line order. A page with neither kind of line is valid and
/// yields two empty lists.
pub fn classify_lines(text: &str) -> Result<(Vec<HeaderLine>, Vec<String>)> {
    let mut headers = Vec::new();
    let mut amounts = Vec::new();

    for line in text.lines() {
        if header_re().is_match(line) {
            let mut parts = line.splitn(3, ' ');
            let raw_date = parts.next().unwrap_or_default();
            let _post_date = parts.next();
            let name = parts
                .next()
                .ok_or_else(|| anyhow!("transaction line without merchant: {line:?}"))?;

            // Text extraction sometimes glues a section label onto the
            // date column; only digits and dots belong there.
            let date: String = raw_date.chars().filter(|c| !c.is_ascii_alphabetic()).collect();
            headers.push(HeaderLine {
                date,
                name: name.to_string(),
            });
        } else if rate_re().is_match(line) {
            // interest-rate disclosure, not a transaction
        } else if amount_re().is_match(line) {
            amounts.push(line.to_string());
        }
    }

    Ok((headers, amounts))
}

/// Convert European statement notation to a parseable decimal string.
///
/// `1.234,56` becomes `1234.56`. A token already in decimal-point form is
/// returned unchanged, so normalizing twice is a no-op.
fn normalize_decimal(raw: &str) -> String {
    if raw.contains(',') {
        raw.replace('.', "").replace(',', ".")
    } else {
        raw.to_string()
    }
}

/// Statement notation prints charges positive and credits negative; ledger
/// output wants the opposite. Always two fraction digits, zero unsigned.
fn to_ledger_amount(value: f64) -> String {
    if value > 0.0 {
        format!("{:.2}", -value)
    } else {
        format!("{:.2}", value.abs())
    }
}

/// Drops the statement's summary figures from a page's amount column.
///
/// Tuned against the AMEX Germany layout and only fired on pages carrying
/// more than two amount rows. The second row is the carried-over balance
/// and the final two rows are the new balance and the minimum payment;
/// the largest remaining value is the page total. On ties the earliest
/// occurrence goes. The offsets are a fixed property of this one layout,
/// not a general rule.
pub fn drop_summary_figures(values: &mut Vec<f64>) {
    if values.len() <= 2 {
        return;
    }
    values.remove(1);
    values.pop();
    values.pop();
    if values.is_empty() {
        return;
    }
    let mut max_idx = 0;
    for (i, v) in values.iter().enumerate() {
        if *v > values[max_idx] {
            max_idx = i;
        }
    }
    values.remove(max_idx);
}

/// Normalize raw amount lines, strip summary figures via `filter`, and
/// render the survivors as signed two-decimal ledger amounts.
pub fn reconcile_amounts(raw: &[String], filter: SummaryFilter) -> Result<Vec<String>> {
    let mut values = Vec::with_capacity(raw.len());
    for token in raw {
        let value: f64 = normalize_decimal(token)
            .parse()
            .with_context(|| format!("unparseable amount line {token:?}"))?;
        values.push(value);
    }

    filter(&mut values);

    Ok(values.into_iter().map(to_ledger_amount).collect())
}

/// Parse one page of extracted statement text into transactions.
///
/// Header lines and reconciled amounts must come out one-to-one; a page
/// where they do not is structurally unexpected and fails as a whole
/// rather than guessing an alignment.
pub fn parse_amex_de_text(text: &str) -> Result<Vec<StatementTransaction>> {
    let (headers, raw_amounts) = classify_lines(text)?;
    let amounts = reconcile_amounts(&raw_amounts, drop_summary_figures)?;

    if headers.len() != amounts.len() {
        bail!(
            "header/amount mismatch: {} header lines vs {} amounts after reconciliation",
            headers.len(),
            amounts.len()
        );
    }

    Ok(headers
        .into_iter()
        .zip(amounts)
        .map(|(h, amount)| StatementTransaction {
            date: h.date,
            name: h.name,
            amount,
        })
        .collect())
}
