//! Financial insights derived from a transaction snapshot.
//!
//! `InsightGenerator` is the seam an external natural-language service would
//! plug into. `RuleBasedInsights` is the deterministic implementation shipped
//! here.

pub mod rules;
pub mod types;

pub use rules::RuleBasedInsights;
pub use types::{Insight, InsightGenerator, InsightKind};
