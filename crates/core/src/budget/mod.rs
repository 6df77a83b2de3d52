//! Budget period resolution and spend-vs-limit progress.
//!
//! `BudgetService::compute_progress` is the single entry point; the
//! submodules are its stages:
//!
//! - `window` - resolves the date window a budget is tracking
//! - `filter` - picks the owner's matching expenses inside that window
//! - `progress` - sums them and derives remaining / percent / over-budget

pub mod error;
pub mod filter;
pub mod progress;
pub mod service;
pub mod types;
pub mod window;


pub use error::BudgetError;
pub use service::BudgetService;
pub use types::{
    Budget, BudgetPeriod, BudgetProgressOutcome, BudgetWindow, CreateBudgetInput, ProgressReport,
};
