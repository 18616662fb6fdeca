pub mod use_ledger;
