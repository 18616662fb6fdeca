//! Finance report snapshot consumed by the PDF exporter.
//!
//! The report is compiled from the live transaction list at the moment of
//! export; its total lines are formatted with the same helper the summary
//! cards use, so the document always matches what is on screen.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::summary::{format_amount, Totals};
use crate::transaction::{format_display_date, Transaction};

pub const REPORT_TITLE: &str = "Finance Report";
pub const TABLE_HEADER: [&str; 4] = ["Description", "Amount (₹)", "Type", "Date"];

/// One table row per transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub description: String,
    /// Plain two-decimal magnitude; the symbol lives in the column header
    pub amount: String,
    pub kind: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinanceReport {
    pub generated_on: String,
    pub totals: Totals,
    pub rows: Vec<ReportRow>,
}

impl FinanceReport {
    /// Snapshot the current transaction list into a report.
    pub fn compile(transactions: &[Transaction]) -> Self {
        Self::compile_at(transactions, &Utc::now().to_rfc3339())
    }

    /// Snapshot with an explicit generation timestamp (RFC 3339)
    pub fn compile_at(transactions: &[Transaction], generated_at: &str) -> Self {
        FinanceReport {
            generated_on: format_display_date(generated_at),
            totals: Totals::compute(transactions),
            rows: transactions
                .iter()
                .map(|transaction| ReportRow {
                    description: transaction.description.clone(),
                    amount: format!("{:.2}", transaction.amount),
                    kind: transaction.kind.label().to_string(),
                    date: transaction.display_date(),
                })
                .collect(),
        }
    }

    /// The three totals lines exactly as they appear in the document
    pub fn total_lines(&self) -> [String; 3] {
        [
            format!("Total Income: {}", format_amount(self.totals.total_income)),
            format!("Total Expense: {}", format_amount(self.totals.total_expense)),
            format!("Balance: {}", format_amount(self.totals.balance)),
        ]
    }
}
