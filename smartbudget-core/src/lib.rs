//! smartbudget-core: transaction types, keyword categorizer and shared helpers

pub mod categorizer;
pub mod finance;
pub mod stats;
pub mod time;

pub use categorizer::{categorize, CategoryRule, RULES};
pub use finance::{in_window, Category, Transaction, TransactionTable};
pub use stats::LinearFit;
pub use time::{parse_timezone, today_in, window_start, YearMonth};
