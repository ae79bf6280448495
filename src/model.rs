use serde::{Deserialize, Serialize};

/// Sentinel accepted by both filter axes: matches everything.
pub const ALL_SENTINEL: &str = "all";

// ── Layers ──

/// A governance tier. Used by the rendering layer for the tier cards;
/// grouping keys on `Module::layer` and never consults this set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layer {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

// ── Modules ──

/// Health status of a module.
///
/// Closed set with an explicit fallback: any serialized value outside the
/// known three deserializes to `Unknown` instead of failing or silently
/// borrowing the healthy weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleStatus {
    Healthy,
    Warning,
    Risky,
    #[serde(other)]
    Unknown,
}

impl ModuleStatus {
    /// Numeric contribution of this status to the aggregate health score.
    pub fn weight(self) -> f64 {
        match self {
            ModuleStatus::Healthy => 1.0,
            ModuleStatus::Warning => 0.5,
            ModuleStatus::Risky | ModuleStatus::Unknown => 0.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ModuleStatus::Healthy => "healthy",
            ModuleStatus::Warning => "warning",
            ModuleStatus::Risky => "risky",
            ModuleStatus::Unknown => "unknown",
        }
    }
}

/// A named functional unit belonging to exactly one layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Free-form layer key. Not validated against the `Layer` set.
    pub layer: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub interfaces: Vec<String>,
    pub status: ModuleStatus,
}

impl Module {
    /// Create a module with empty descriptive fields.
    pub fn new(id: impl Into<String>, layer: impl Into<String>, status: ModuleStatus) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            layer: layer.into(),
            description: String::new(),
            interfaces: Vec::new(),
            status,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_interfaces<I, S>(mut self, interfaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.interfaces = interfaces.into_iter().map(Into::into).collect();
        self
    }
}

// ── Workflows ──

/// Risk tier of a workflow.
///
/// Same closed-set treatment as [`ModuleStatus`]: unrecognized values land
/// on `Unknown` rather than failing deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Medium,
    High,
    #[serde(other)]
    Unknown,
}

impl RiskTier {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskTier::Low => "low",
            RiskTier::Medium => "medium",
            RiskTier::High => "high",
            RiskTier::Unknown => "unknown",
        }
    }
}

/// One step of a workflow. Order within `Workflow::steps` is execution
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowStep {
    pub title: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub module: String,
    #[serde(default)]
    pub evidence: String,
}

impl WorkflowStep {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            owner: String::new(),
            module: String::new(),
            evidence: String::new(),
        }
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = owner.into();
        self
    }

    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = module.into();
        self
    }

    pub fn with_evidence(mut self, evidence: impl Into<String>) -> Self {
        self.evidence = evidence.into();
        self
    }
}

/// A named ordered sequence of steps, tagged with a risk tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workflow {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub risk: RiskTier,
    #[serde(default)]
    pub steps: Vec<WorkflowStep>,
}

impl Workflow {
    /// Create a workflow with no name and no steps.
    pub fn new(id: impl Into<String>, risk: RiskTier) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            risk,
            steps: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_step(mut self, step: WorkflowStep) -> Self {
        self.steps.push(step);
        self
    }
}

// ── Filter criteria ──

/// Workflow-id axis of the filter. `All` matches every workflow.
///
/// Serialized form is the raw string the selection UI produces: the
/// `"all"` sentinel or a workflow id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WorkflowSelector {
    #[default]
    All,
    Id(String),
}

impl WorkflowSelector {
    pub fn matches(&self, workflow: &Workflow) -> bool {
        match self {
            WorkflowSelector::All => true,
            WorkflowSelector::Id(id) => workflow.id == *id,
        }
    }
}

impl From<String> for WorkflowSelector {
    fn from(raw: String) -> Self {
        if raw == ALL_SENTINEL {
            WorkflowSelector::All
        } else {
            WorkflowSelector::Id(raw)
        }
    }
}

impl From<&str> for WorkflowSelector {
    fn from(raw: &str) -> Self {
        WorkflowSelector::from(raw.to_string())
    }
}

impl From<WorkflowSelector> for String {
    fn from(selector: WorkflowSelector) -> Self {
        match selector {
            WorkflowSelector::All => ALL_SENTINEL.to_string(),
            WorkflowSelector::Id(id) => id,
        }
    }
}

/// Risk axis of the filter. `All` matches every tier.
///
/// A raw string outside the known tiers selects `RiskTier::Unknown`, so it
/// only matches workflows whose own risk failed to parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RiskSelector {
    #[default]
    All,
    Tier(RiskTier),
}

impl RiskSelector {
    pub fn matches(&self, workflow: &Workflow) -> bool {
        match self {
            RiskSelector::All => true,
            RiskSelector::Tier(tier) => workflow.risk == *tier,
        }
    }
}

impl From<String> for RiskSelector {
    fn from(raw: String) -> Self {
        RiskSelector::from(raw.as_str())
    }
}

impl From<&str> for RiskSelector {
    fn from(raw: &str) -> Self {
        match raw {
            ALL_SENTINEL => RiskSelector::All,
            "low" => RiskSelector::Tier(RiskTier::Low),
            "medium" => RiskSelector::Tier(RiskTier::Medium),
            "high" => RiskSelector::Tier(RiskTier::High),
            _ => RiskSelector::Tier(RiskTier::Unknown),
        }
    }
}

impl From<RiskTier> for RiskSelector {
    fn from(tier: RiskTier) -> Self {
        RiskSelector::Tier(tier)
    }
}

impl From<RiskSelector> for String {
    fn from(selector: RiskSelector) -> Self {
        match selector {
            RiskSelector::All => ALL_SENTINEL.to_string(),
            RiskSelector::Tier(tier) => tier.as_str().to_string(),
        }
    }
}

/// Narrowing criteria for the workflow timeline.
///
/// Both axes default to match-all, so a missing field in the serialized
/// form never surfaces as an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkflowFilter {
    pub workflow_id: WorkflowSelector,
    pub risk: RiskSelector,
}

impl WorkflowFilter {
    /// The identity filter: keeps every workflow.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_workflow(mut self, selector: impl Into<WorkflowSelector>) -> Self {
        self.workflow_id = selector.into();
        self
    }

    pub fn with_risk(mut self, selector: impl Into<RiskSelector>) -> Self {
        self.risk = selector.into();
        self
    }

    /// Conjunction of the two axes: both must accept the workflow.
    pub fn matches(&self, workflow: &Workflow) -> bool {
        self.workflow_id.matches(workflow) && self.risk.matches(workflow)
    }
}
