//! Derived read-only views over the console dataset.
//!
//! Three computations sit between the hand-authored dataset and the
//! rendering layer:
//! 1. Grouping modules under their layer key
//! 2. Filtering workflows by id and risk tier
//! 3. Aggregating module health into a single score
//!
//! All of them are pure: same input, same output, and the supplied
//! collections are never mutated. Callers may invoke them from any number
//! of threads as long as nothing mutates the inputs mid-call.

use std::collections::BTreeMap;

use crate::error::ConsoleError;
use crate::model::{Module, Workflow, WorkflowFilter};

/// Modules grouped under their layer key.
///
/// BTreeMap keeps group iteration deterministic; within a group, modules
/// keep the relative order they had in the input.
pub type LayerGroups<'a> = BTreeMap<&'a str, Vec<&'a Module>>;

/// Group modules by their `layer` key.
///
/// Every module lands in exactly one group. A layer key no module carries
/// never appears in the output, so an empty input yields an empty map.
pub fn group_modules_by_layer(modules: &[Module]) -> LayerGroups<'_> {
    let mut groups: LayerGroups<'_> = BTreeMap::new();
    for module in modules {
        groups.entry(module.layer.as_str()).or_default().push(module);
    }
    groups
}

/// Select the workflows accepted by both filter axes.
///
/// The result is an ordered subsequence of the input. No matches is an
/// empty vec, not an error.
pub fn filter_workflows<'a>(
    workflows: &'a [Workflow],
    filter: &WorkflowFilter,
) -> Vec<&'a Workflow> {
    workflows
        .iter()
        .filter(|workflow| filter.matches(workflow))
        .collect()
}

/// Aggregate module health into a score in `[0, 1]`.
///
/// The score is the arithmetic mean of per-status weights (healthy 1,
/// warning 0.5, risky 0, unknown 0), rounded half away from zero at the
/// second decimal.
///
/// # Errors
///
/// [`ConsoleError::EmptyModules`] when `modules` is empty. A mean over
/// nothing has no value to report, so the fault is surfaced instead of
/// smuggled out as a sentinel.
pub fn compute_status_score(modules: &[Module]) -> Result<f64, ConsoleError> {
    if modules.is_empty() {
        return Err(ConsoleError::EmptyModules);
    }
    let total: f64 = modules.iter().map(|module| module.status.weight()).sum();
    let mean = total / modules.len() as f64;
    Ok((mean * 100.0).round() / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ModuleStatus, RiskTier, WorkflowSelector};
    use pretty_assertions::assert_eq;

    fn sample_modules() -> Vec<Module> {
        vec![
            Module::new("a", "one", ModuleStatus::Healthy),
            Module::new("b", "one", ModuleStatus::Warning),
            Module::new("c", "two", ModuleStatus::Risky),
        ]
    }

    fn sample_workflows() -> Vec<Workflow> {
        vec![
            Workflow::new("x", RiskTier::Low),
            Workflow::new("y", RiskTier::High),
        ]
    }

    fn ids<'a>(workflows: &[&'a Workflow]) -> Vec<&'a str> {
        workflows.iter().map(|wf| wf.id.as_str()).collect()
    }

    #[test]
    fn test_grouping_groups_modules_under_their_layer_key() {
        let modules = sample_modules();
        let groups = group_modules_by_layer(&modules);

        assert_eq!(groups.len(), 2);
        assert_eq!(
            groups["one"].iter().map(|m| m.id.as_str()).collect::<Vec<_>>(),
            vec!["a", "b"]
        );
        assert_eq!(
            groups["two"].iter().map(|m| m.id.as_str()).collect::<Vec<_>>(),
            vec!["c"]
        );
    }

    #[test]
    fn test_grouping_covers_every_module_exactly_once() {
        let modules = vec![
            Module::new("a", "tactical", ModuleStatus::Healthy),
            Module::new("b", "strategic", ModuleStatus::Healthy),
            Module::new("c", "tactical", ModuleStatus::Warning),
            Module::new("d", "operational", ModuleStatus::Risky),
            Module::new("e", "strategic", ModuleStatus::Healthy),
        ];
        let groups = group_modules_by_layer(&modules);

        let grouped_total: usize = groups.values().map(Vec::len).sum();
        assert_eq!(grouped_total, modules.len());
        for module in &modules {
            assert!(groups[module.layer.as_str()]
                .iter()
                .any(|m| m.id == module.id));
        }
    }

    #[test]
    fn test_grouping_preserves_input_order_within_each_group() {
        let modules = vec![
            Module::new("first", "mixed", ModuleStatus::Healthy),
            Module::new("other", "solo", ModuleStatus::Healthy),
            Module::new("second", "mixed", ModuleStatus::Warning),
            Module::new("third", "mixed", ModuleStatus::Risky),
        ];
        let groups = group_modules_by_layer(&modules);

        assert_eq!(
            groups["mixed"].iter().map(|m| m.id.as_str()).collect::<Vec<_>>(),
            vec!["first", "second", "third"]
        );
    }

    #[test]
    fn test_grouping_empty_input_yields_empty_map() {
        assert!(group_modules_by_layer(&[]).is_empty());
    }

    #[test]
    fn test_filter_by_workflow_id() {
        let workflows = sample_workflows();
        let filter = WorkflowFilter::all().with_workflow("x");

        assert_eq!(ids(&filter_workflows(&workflows, &filter)), vec!["x"]);
    }

    #[test]
    fn test_filter_by_risk_tier() {
        let workflows = sample_workflows();
        let filter = WorkflowFilter::all().with_risk(RiskTier::High);

        assert_eq!(ids(&filter_workflows(&workflows, &filter)), vec!["y"]);
    }

    #[test]
    fn test_filter_identity_keeps_everything_in_order() {
        let workflows = sample_workflows();
        let kept = filter_workflows(&workflows, &WorkflowFilter::all());

        assert_eq!(ids(&kept), vec!["x", "y"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let workflows = sample_workflows();
        let filter = WorkflowFilter::all().with_risk(RiskTier::High);

        let once: Vec<Workflow> = filter_workflows(&workflows, &filter)
            .into_iter()
            .cloned()
            .collect();
        let twice = filter_workflows(&once, &filter);

        assert_eq!(ids(&twice), once.iter().map(|wf| wf.id.as_str()).collect::<Vec<_>>());
    }

    #[test]
    fn test_filter_conjunction_is_intersection_of_axes() {
        let workflows = vec![
            Workflow::new("x", RiskTier::Low),
            Workflow::new("y", RiskTier::High),
            Workflow::new("z", RiskTier::High),
        ];
        let both = WorkflowFilter::all().with_workflow("y").with_risk(RiskTier::High);
        let by_id = WorkflowFilter::all().with_workflow("y");
        let by_risk = WorkflowFilter::all().with_risk(RiskTier::High);

        let expected: Vec<&str> = ids(&filter_workflows(&workflows, &by_id))
            .into_iter()
            .filter(|id| ids(&filter_workflows(&workflows, &by_risk)).contains(id))
            .collect();
        assert_eq!(ids(&filter_workflows(&workflows, &both)), expected);
    }

    #[test]
    fn test_filter_mismatched_axes_yield_empty() {
        let workflows = sample_workflows();
        // "x" is low risk, so the conjunction cannot be satisfied.
        let filter = WorkflowFilter::all().with_workflow("x").with_risk(RiskTier::High);

        assert!(filter_workflows(&workflows, &filter).is_empty());
    }

    #[test]
    fn test_filter_selector_matches_by_exact_id_not_sentinel_prefix() {
        let workflows = vec![Workflow::new("allocation", RiskTier::Low)];
        let filter = WorkflowFilter {
            workflow_id: WorkflowSelector::from("allocation"),
            ..Default::default()
        };

        assert_eq!(ids(&filter_workflows(&workflows, &filter)), vec!["allocation"]);
    }

    #[test]
    fn test_score_averages_status_weights() {
        let score = compute_status_score(&sample_modules()).unwrap();
        assert_eq!(score, 0.5);
    }

    #[test]
    fn test_score_all_healthy_is_one() {
        let modules = vec![
            Module::new("a", "one", ModuleStatus::Healthy),
            Module::new("b", "two", ModuleStatus::Healthy),
        ];
        assert_eq!(compute_status_score(&modules).unwrap(), 1.0);
    }

    #[test]
    fn test_score_unknown_status_counts_as_zero() {
        let modules = vec![
            Module::new("a", "one", ModuleStatus::Healthy),
            Module::new("b", "one", ModuleStatus::Unknown),
        ];
        assert_eq!(compute_status_score(&modules).unwrap(), 0.5);
    }

    #[test]
    fn test_score_rounds_to_two_decimals() {
        let modules = vec![
            Module::new("a", "one", ModuleStatus::Healthy),
            Module::new("b", "one", ModuleStatus::Risky),
            Module::new("c", "one", ModuleStatus::Risky),
        ];
        // 1/3 rounds down to 0.33.
        assert_eq!(compute_status_score(&modules).unwrap(), 0.33);
    }

    #[test]
    fn test_score_stays_within_unit_interval() {
        let statuses = [
            ModuleStatus::Healthy,
            ModuleStatus::Warning,
            ModuleStatus::Risky,
            ModuleStatus::Unknown,
        ];
        for status in statuses {
            let modules = vec![Module::new("a", "one", status)];
            let score = compute_status_score(&modules).unwrap();
            assert!((0.0..=1.0).contains(&score), "score {score} out of range");
        }
    }

    #[test]
    fn test_score_never_decreases_as_a_status_improves() {
        let ladder = [ModuleStatus::Risky, ModuleStatus::Warning, ModuleStatus::Healthy];
        let mut previous = -1.0;
        for status in ladder {
            let modules = vec![
                Module::new("fixed", "one", ModuleStatus::Warning),
                Module::new("moving", "one", status),
            ];
            let score = compute_status_score(&modules).unwrap();
            assert!(score >= previous, "{score} < {previous}");
            previous = score;
        }
    }

    #[test]
    fn test_score_empty_input_is_an_explicit_error() {
        let err = compute_status_score(&[]).unwrap_err();
        assert!(matches!(err, ConsoleError::EmptyModules));
        assert_eq!(err.code(), "EMPTY_MODULES");
    }
}
