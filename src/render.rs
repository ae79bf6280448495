//! HTML fragment rendering.
//!
//! Pure functions from dataset records (and the derived views over them)
//! to markup strings. Fragments are assembled with `format!`; there is no
//! templating engine and no knowledge of how the caller serves or embeds
//! the markup. All interpolated dataset text is escaped.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::DashboardData;
use crate::derive::{compute_status_score, filter_workflows, group_modules_by_layer};
use crate::model::{Layer, Module, ModuleStatus, Workflow, WorkflowFilter, WorkflowStep};

/// Escape text for interpolation into HTML body or attribute positions.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn status_chip(status: ModuleStatus) -> String {
    // Unrecognized statuses get the healthy chip; scoring still counts
    // them as zero.
    let (label, class) = match status {
        ModuleStatus::Healthy | ModuleStatus::Unknown => ("Operational", "status-ok"),
        ModuleStatus::Warning => ("Degraded", "status-warn"),
        ModuleStatus::Risky => ("Risky", "status-risk"),
    };
    format!(r#"<span class="status"><span class="status-dot {class}"></span>{label}</span>"#)
}

/// Render one card per governance layer.
///
/// The module count chip comes from grouping the modules under their layer
/// key; a layer no module belongs to shows zero.
pub fn render_layers(layers: &[Layer], modules: &[Module]) -> String {
    let groups = group_modules_by_layer(modules);
    layers
        .iter()
        .map(|layer| {
            let count = groups.get(layer.id.as_str()).map_or(0, Vec::len);
            let tags: String = layer
                .tags
                .iter()
                .map(|tag| format!(r#"<span class="tag">{}</span>"#, escape_html(tag)))
                .collect();
            format!(
                r#"<article class="layer">
  <div>
    <h3>{title}</h3>
    <p class="summary">{summary}</p>
  </div>
  <div class="tags">{tags}<span class="tag">{count} modules</span></div>
</article>
"#,
                title = escape_html(&layer.title),
                summary = escape_html(&layer.summary),
            )
        })
        .collect()
}

/// Render one card per module: name, layer chip, description, interface
/// chips, status chip.
pub fn render_modules(modules: &[Module]) -> String {
    modules
        .iter()
        .map(|module| {
            let interfaces: String = module
                .interfaces
                .iter()
                .map(|interface| format!("<span>{}</span>", escape_html(interface)))
                .collect();
            format!(
                r#"<article class="module-card">
  <div class="title">
    <h3>{name}</h3>
    <span class="layer-chip">{layer}</span>
  </div>
  <p>{description}</p>
  <div class="stack">{interfaces}</div>
  <div>{chip}</div>
</article>
"#,
                name = escape_html(&module.name),
                layer = escape_html(&module.layer),
                description = escape_html(&module.description),
                chip = status_chip(module.status),
            )
        })
        .collect()
}

/// Render the option list for the workflow selector: the match-all option
/// first, then one option per workflow in input order.
pub fn render_workflow_options(workflows: &[Workflow]) -> String {
    let mut options = String::from(r#"<option value="all">All workflows</option>"#);
    options.push('\n');
    for workflow in workflows {
        options.push_str(&format!(
            "<option value=\"{}\">{}</option>\n",
            escape_html(&workflow.id),
            escape_html(&workflow.name),
        ));
    }
    options
}

fn render_step(step: &WorkflowStep, index: usize) -> String {
    format!(
        r#"<article class="timeline-card">
  <div class="meta">
    <strong>Step {number}</strong>
    <span>{evidence}</span>
  </div>
  <h3>{title}</h3>
  <div class="chips">
    <span class="chip">Owner: {owner}</span>
    <span class="chip">Module: {module}</span>
  </div>
</article>
"#,
        number = index + 1,
        evidence = escape_html(&step.evidence),
        title = escape_html(&step.title),
        owner = escape_html(&step.owner),
        module = escape_html(&step.module),
    )
}

/// Render the workflow timeline after applying the filter.
///
/// Workflows rejected by either filter axis do not appear. A filter with
/// no matches renders an empty string.
pub fn render_workflow_timeline(workflows: &[Workflow], filter: &WorkflowFilter) -> String {
    filter_workflows(workflows, filter)
        .into_iter()
        .map(|workflow| {
            let steps: String = workflow
                .steps
                .iter()
                .enumerate()
                .map(|(index, step)| render_step(step, index))
                .collect();
            format!(
                r#"<article class="timeline-card">
  <div class="meta">
    <div>
      <h3>{name}</h3>
      <small>Risk: {risk}</small>
    </div>
    <div class="chips">
      <span class="chip">{step_count} steps</span>
      <span class="chip">{risk_upper}</span>
    </div>
  </div>
  <div class="timeline">
{steps}</div>
</article>
"#,
                name = escape_html(&workflow.name),
                risk = workflow.risk.as_str(),
                step_count = workflow.steps.len(),
                risk_upper = workflow.risk.as_str().to_uppercase(),
            )
        })
        .collect()
}

// ── Snapshot assembly ──

/// Metadata stamped into a rendered snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotMeta {
    /// When the snapshot was rendered.
    pub generated_at: DateTime<Utc>,
    /// Aggregate health score, absent when the dataset has no modules.
    pub health_score: Option<f64>,
}

impl SnapshotMeta {
    /// Capture metadata for a dataset at the current instant.
    pub fn capture(data: &DashboardData) -> Self {
        Self {
            generated_at: Utc::now(),
            health_score: compute_status_score(&data.modules).ok(),
        }
    }

    fn title(&self) -> String {
        match self.health_score {
            Some(score) => format!("Nicole Console · Health {score}"),
            None => "Nicole Console".to_string(),
        }
    }
}

const PAGE_STYLE: &str = r#"body { font-family: system-ui, sans-serif; margin: 0; background: #f5f6f8; color: #1c2330; }
header { padding: 2rem 2.5rem; background: #1c2330; color: #f5f6f8; }
header small { opacity: 0.7; }
main { padding: 1.5rem 2.5rem; display: grid; gap: 2rem; }
section h2 { margin-bottom: 0.75rem; }
.grid { display: grid; gap: 1rem; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); }
article { background: #fff; border-radius: 10px; padding: 1rem 1.25rem; box-shadow: 0 1px 3px rgba(28, 35, 48, 0.12); }
.tags, .chips, .stack { display: flex; flex-wrap: wrap; gap: 0.4rem; margin-top: 0.6rem; }
.tag, .chip, .layer-chip, .stack span { background: #eef1f6; border-radius: 999px; padding: 0.15rem 0.6rem; font-size: 0.8rem; }
.status { display: inline-flex; align-items: center; gap: 0.4rem; font-size: 0.85rem; }
.status-dot { width: 0.6rem; height: 0.6rem; border-radius: 50%; display: inline-block; }
.status-ok { background: #2e9e63; }
.status-warn { background: #d9a514; }
.status-risk { background: #c94f4f; }
.timeline { display: grid; gap: 0.75rem; margin-top: 0.75rem; }
.meta { display: flex; justify-content: space-between; align-items: baseline; }
"#;

/// Assemble the complete static page from the dataset, the timeline
/// filter, and the snapshot metadata.
pub fn render_page(data: &DashboardData, filter: &WorkflowFilter, meta: &SnapshotMeta) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
{style}</style>
</head>
<body>
<header>
  <h1>{title}</h1>
  <small>Snapshot generated {generated_at}</small>
</header>
<main>
<section>
  <h2>Governance layers</h2>
  <div id="layer-grid" class="grid">
{layers}</div>
</section>
<section>
  <h2>Modules</h2>
  <div id="module-grid" class="grid">
{modules}</div>
</section>
<section>
  <h2>Workflows</h2>
  <select id="workflow-filter" disabled>
{options}</select>
  <div id="workflow-timeline">
{timeline}</div>
</section>
</main>
</body>
</html>
"#,
        title = escape_html(&meta.title()),
        style = PAGE_STYLE,
        generated_at = meta.generated_at.to_rfc3339(),
        layers = render_layers(&data.layers, &data.modules),
        modules = render_modules(&data.modules),
        options = render_workflow_options(&data.workflows),
        timeline = render_workflow_timeline(&data.workflows, filter),
    )
}
