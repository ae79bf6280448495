//! Nicole Console - governance console core.
//!
//! Derived read-only views over a hand-authored governance dataset, plus
//! the static rendering that turns them into a console page:
//! - `DashboardData` - the dataset envelope (layers, modules, workflows)
//! - `group_modules_by_layer` / `filter_workflows` / `compute_status_score`
//!   - the derivation layer
//! - `render` - HTML fragment and page assembly
//!
//! The dataset is supplied by the caller (YAML, JSON, or the bundled
//! default); the derivation functions are pure and never mutate it.
//!
//! # Example
//!
//! ```
//! use nicole_console::{compute_status_score, group_modules_by_layer, DashboardData};
//!
//! let yaml = r#"
//! modules:
//!   - id: policy-engine
//!     layer: strategic
//!     status: healthy
//!   - id: execution-adapter
//!     layer: operational
//!     status: risky
//! "#;
//!
//! let data = DashboardData::from_yaml_str(yaml).unwrap();
//! let groups = group_modules_by_layer(&data.modules);
//! assert_eq!(groups["strategic"].len(), 1);
//! assert_eq!(compute_status_score(&data.modules).unwrap(), 0.5);
//! ```

mod config;
mod derive;
mod error;
mod model;
pub mod render;

// Re-exports
pub use config::DashboardData;
pub use derive::{compute_status_score, filter_workflows, group_modules_by_layer, LayerGroups};
pub use error::ConsoleError;
pub use model::{
    Layer, Module, ModuleStatus, RiskSelector, RiskTier, Workflow, WorkflowFilter,
    WorkflowSelector, WorkflowStep, ALL_SENTINEL,
};
