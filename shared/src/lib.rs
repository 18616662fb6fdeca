//! Domain layer for the Expenso expense tracker.
//!
//! Everything the browser frontend renders is derived here: the in-memory
//! ledger, submission validation, category inference, the totals /
//! buckets / trend derivations, and the export report snapshot. The crate
//! has no DOM dependency so the whole pipeline tests natively.

pub mod categorize;
pub mod ledger;
pub mod report;
pub mod summary;
pub mod transaction;

pub use categorize::{Categorizer, CategoryRule, FALLBACK_BUCKET, INCOME_BUCKET};
pub use ledger::{
    clean_and_parse_amount, validate, FormValidation, Ledger, NewTransaction, ValidationError,
    CURRENCY_SYMBOL, MAX_AMOUNT, MAX_DESCRIPTION_LENGTH, MIN_AMOUNT,
};
pub use report::{FinanceReport, ReportRow, REPORT_TITLE, TABLE_HEADER};
pub use summary::{format_amount, trend_points, CategoryBreakdown, CategoryBucket, Totals, TrendPoint};
pub use transaction::{
    format_display_date, Transaction, TransactionIdError, TransactionKind,
};
