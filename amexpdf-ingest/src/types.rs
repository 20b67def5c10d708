use serde::{Deserialize, Serialize};

/// Date and merchant pulled from a single transaction header line.
///
/// The date stays in the statement's own DD.MM.YY column text; stray
/// letters glued onto the column by text extraction are already stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderLine {
    pub date: String,
    pub name: String,
}

/// Normalized output of the statement parser, one row per transaction.
///
/// Serializes with `Date,Name,Amount` column names for CSV output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatementTransaction {
    /// Transaction date as printed on the statement (DD.MM.YY)
    pub date: String,
    /// Merchant line, kept verbatim
    pub name: String,
    /// Signed decimal amount; negative means charge/spend, positive means
    /// credit/refund.
    pub amount: String,
}
