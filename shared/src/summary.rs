//! The derivation pipeline: totals, category buckets, and trend series.
//!
//! Everything here is a pure function over the current transaction list,
//! recomputed in full on every change. There is no memoization and no
//! incremental update; the list is small and the work is a handful of
//! linear folds.

use serde::{Deserialize, Serialize};

use crate::categorize::Categorizer;
use crate::ledger::CURRENCY_SYMBOL;
use crate::transaction::{Transaction, TransactionKind};

/// The three headline figures shown in the summary cards.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Totals {
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
}

impl Totals {
    pub fn compute(transactions: &[Transaction]) -> Self {
        let mut totals = Totals::default();
        for transaction in transactions {
            match transaction.kind {
                TransactionKind::Income => totals.total_income += transaction.amount,
                TransactionKind::Expense => totals.total_expense += transaction.amount,
            }
        }
        totals.balance = totals.total_income - totals.total_expense;
        totals
    }
}

/// An aggregated amount grouped by inferred category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBucket {
    pub name: String,
    pub value: f64,
}

/// Category buckets plus the summary metrics.
///
/// `total_expenses` and `balance` are carried separately instead of being
/// appended as extra buckets, so the category chart never double-counts
/// amounts that already sit in a real bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub buckets: Vec<CategoryBucket>,
    pub total_expenses: f64,
    pub balance: f64,
}

impl CategoryBreakdown {
    pub fn compute(transactions: &[Transaction], categorizer: &Categorizer) -> Self {
        let mut buckets: Vec<CategoryBucket> = Vec::new();
        let mut total_expenses = 0.0;
        let mut total_income = 0.0;

        for transaction in transactions {
            let name = categorizer.classify(transaction);
            match buckets.iter().position(|bucket| bucket.name == name) {
                Some(index) => buckets[index].value += transaction.amount,
                None => buckets.push(CategoryBucket {
                    name: name.to_string(),
                    value: transaction.amount,
                }),
            }
            match transaction.kind {
                TransactionKind::Income => total_income += transaction.amount,
                TransactionKind::Expense => total_expenses += transaction.amount,
            }
        }

        CategoryBreakdown {
            buckets,
            total_expenses,
            balance: total_income - total_expenses,
        }
    }
}

/// Income and expense sums for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Day key in "YYYY-MM-DD" form
    pub date: String,
    pub income: f64,
    pub expense: f64,
}

/// Per-day income/expense sums in chronological order.
pub fn trend_points(transactions: &[Transaction]) -> Vec<TrendPoint> {
    let mut points: Vec<TrendPoint> = Vec::new();
    for transaction in transactions {
        let key = transaction.day_key();
        let index = match points.iter().position(|p| p.date == key) {
            Some(index) => index,
            None => {
                points.push(TrendPoint {
                    date: key,
                    income: 0.0,
                    expense: 0.0,
                });
                points.len() - 1
            }
        };
        match transaction.kind {
            TransactionKind::Income => points[index].income += transaction.amount,
            TransactionKind::Expense => points[index].expense += transaction.amount,
        }
    }
    points.sort_by(|a, b| a.date.cmp(&b.date));
    points
}

/// Format an amount with the currency symbol and two decimal places
pub fn format_amount(amount: f64) -> String {
    format!("{}{:.2}", CURRENCY_SYMBOL, amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{Ledger, NewTransaction};

    fn add(ledger: &mut Ledger, description: &str, amount: &str, kind: TransactionKind, date: &str) -> Transaction {
        ledger
            .add(NewTransaction {
                description: description.to_string(),
                amount_input: amount.to_string(),
                kind,
                date: Some(date.to_string()),
            })
            .unwrap()
    }

    const DAY_ONE: &str = "2025-06-19T08:30:00+00:00";
    const DAY_TWO: &str = "2025-06-20T09:00:00+00:00";

    #[test]
    fn test_monthly_rent_scenario() {
        let mut ledger = Ledger::new();
        add(&mut ledger, "Monthly rent", "1000", TransactionKind::Expense, DAY_ONE);

        let totals = Totals::compute(ledger.transactions());
        let breakdown = CategoryBreakdown::compute(ledger.transactions(), &Categorizer::new());

        assert_eq!(totals.total_expense, 1000.0);
        assert_eq!(totals.balance, -1000.0);
        assert_eq!(format_amount(totals.total_expense), "₹1000.00");
        assert_eq!(format_amount(totals.balance), "₹-1000.00");
        assert_eq!(
            breakdown.buckets,
            vec![CategoryBucket { name: "rent".to_string(), value: 1000.0 }]
        );
    }

    #[test]
    fn test_add_then_delete_returns_to_zero() {
        let mut ledger = Ledger::new();
        let salary = add(&mut ledger, "Salary", "5000", TransactionKind::Income, DAY_ONE);

        ledger.remove(&salary.id);

        let totals = Totals::compute(ledger.transactions());
        assert!(ledger.is_empty());
        assert_eq!(totals.total_income, 0.0);
        assert_eq!(totals.total_expense, 0.0);
        assert_eq!(totals.balance, 0.0);
    }

    #[test]
    fn test_balance_invariant_holds_after_every_operation() {
        let mut ledger = Ledger::new();
        let operations: [(&str, &str, TransactionKind); 4] = [
            ("Salary", "5000", TransactionKind::Income),
            ("Monthly rent", "1000", TransactionKind::Expense),
            ("Groceries run", "250.50", TransactionKind::Expense),
            ("Freelance gig", "800", TransactionKind::Income),
        ];

        for (description, amount, kind) in operations {
            add(&mut ledger, description, amount, kind, DAY_ONE);
            let totals = Totals::compute(ledger.transactions());
            assert_eq!(totals.balance, totals.total_income - totals.total_expense);
        }
    }

    #[test]
    fn test_bucket_sums_equal_income_plus_expense() {
        let mut ledger = Ledger::new();
        add(&mut ledger, "Salary", "5000", TransactionKind::Income, DAY_ONE);
        add(&mut ledger, "Monthly rent", "1000", TransactionKind::Expense, DAY_ONE);
        add(&mut ledger, "Coffee", "50", TransactionKind::Expense, DAY_ONE);
        add(&mut ledger, "Streaming subscriptions", "15.99", TransactionKind::Expense, DAY_TWO);

        let totals = Totals::compute(ledger.transactions());
        let breakdown = CategoryBreakdown::compute(ledger.transactions(), &Categorizer::new());

        let bucket_sum: f64 = breakdown.buckets.iter().map(|b| b.value).sum();
        assert!((bucket_sum - (totals.total_income + totals.total_expense)).abs() < 1e-9);
    }

    #[test]
    fn test_coffee_falls_into_other_bucket() {
        let mut ledger = Ledger::new();
        add(&mut ledger, "Coffee", "50", TransactionKind::Expense, DAY_ONE);

        let breakdown = CategoryBreakdown::compute(ledger.transactions(), &Categorizer::new());

        assert_eq!(
            breakdown.buckets,
            vec![CategoryBucket { name: "Other".to_string(), value: 50.0 }]
        );
    }

    #[test]
    fn test_breakdown_keeps_summary_metrics_out_of_buckets() {
        let mut ledger = Ledger::new();
        add(&mut ledger, "Salary", "5000", TransactionKind::Income, DAY_ONE);
        add(&mut ledger, "Monthly rent", "1000", TransactionKind::Expense, DAY_ONE);

        let breakdown = CategoryBreakdown::compute(ledger.transactions(), &Categorizer::new());

        assert_eq!(breakdown.buckets.len(), 2);
        assert!(breakdown.buckets.iter().all(|b| b.name != "Total Expenses"));
        assert!(breakdown.buckets.iter().all(|b| b.name != "Balance"));
        assert_eq!(breakdown.total_expenses, 1000.0);
        assert_eq!(breakdown.balance, 4000.0);
    }

    #[test]
    fn test_buckets_keep_first_seen_order() {
        let mut ledger = Ledger::new();
        add(&mut ledger, "Coffee", "50", TransactionKind::Expense, DAY_ONE);
        add(&mut ledger, "Salary", "5000", TransactionKind::Income, DAY_ONE);
        add(&mut ledger, "More coffee", "40", TransactionKind::Expense, DAY_TWO);

        let breakdown = CategoryBreakdown::compute(ledger.transactions(), &Categorizer::new());

        let names: Vec<&str> = breakdown.buckets.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Other", "Income"]);
        assert_eq!(breakdown.buckets[0].value, 90.0);
    }

    #[test]
    fn test_trend_points_aggregate_per_day() {
        let mut ledger = Ledger::new();
        add(&mut ledger, "Salary", "5000", TransactionKind::Income, DAY_ONE);
        add(&mut ledger, "Groceries run", "250", TransactionKind::Expense, DAY_ONE);
        add(&mut ledger, "Coffee", "50", TransactionKind::Expense, DAY_ONE);

        let points = trend_points(ledger.transactions());

        assert_eq!(points.len(), 1);
        assert_eq!(points[0].date, "2025-06-19");
        assert_eq!(points[0].income, 5000.0);
        assert_eq!(points[0].expense, 300.0);
    }

    #[test]
    fn test_trend_points_are_chronological() {
        let mut ledger = Ledger::new();
        add(&mut ledger, "Coffee", "50", TransactionKind::Expense, DAY_TWO);
        add(&mut ledger, "Salary", "5000", TransactionKind::Income, DAY_ONE);

        let points = trend_points(ledger.transactions());

        let days: Vec<&str> = points.iter().map(|p| p.date.as_str()).collect();
        assert_eq!(days, vec!["2025-06-19", "2025-06-20"]);
    }

    #[test]
    fn test_empty_list_derives_empty_views() {
        let totals = Totals::compute(&[]);
        let breakdown = CategoryBreakdown::compute(&[], &Categorizer::new());
        let points = trend_points(&[]);

        assert_eq!(totals, Totals::default());
        assert!(breakdown.buckets.is_empty());
        assert!(points.is_empty());
    }
}
