//! Lexcite Query Planner
//!
//! Turns a list of legal propositions into a flat, deduplicated list of
//! jurisdiction-tier-tagged search tasks. Pure planning: no network I/O
//! happens in this crate.
//!
//! # Examples
//!
//! ```
//! use lexcite_domain::{Jurisdiction, Proposition};
//! use lexcite_planner::QueryPlanner;
//!
//! let planner = QueryPlanner::default_config();
//! let jurisdiction = Jurisdiction::resolve("19th Judicial District Court");
//! let props = vec![Proposition::new(
//!     "Discovery responses overdue",
//!     true,
//!     vec!["motion to compel discovery".to_string()],
//! )];
//!
//! let plan = planner.plan(&props, &jurisdiction);
//! // one query x two permitted state tiers
//! assert_eq!(plan.tasks.len(), 2);
//! ```

#![warn(missing_docs)]

mod config;
mod planner;

pub use config::PlannerConfig;
pub use planner::{QueryPlanner, TaskPlan};
