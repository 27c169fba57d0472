//! smartbudget-finance: health score, spending forecast, chart aggregations
//! and the session that ties them to a loaded statement

pub mod aggregates;
pub mod dashboard;
pub mod forecast;
pub mod score;
pub mod session;

pub use dashboard::Dashboard;
pub use forecast::predict_next_month;
pub use score::{score, HealthLabel, HealthScore, Penalty};
pub use session::{DataSource, LoadSummary, Session};
