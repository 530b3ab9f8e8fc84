//! Template node agent
//!
//! Starting point for SDK users writing their own Hypernode agents. The
//! perceive/reason/act loop is deliberately minimal: perception reads the
//! local metrics probe, reasoning maps an instruction plus observed state
//! to an action plan, and acting executes the plan stub.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tracing::info;

use crate::metrics::SystemProbe;

/// CPU percentage above which the agent plans to throttle regardless of
/// the instruction it was given.
pub const HIGH_CPU_THRESHOLD: f32 = 85.0;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentConfig {
    pub node_id: Option<String>,
    pub log_level: Option<String>,
}

/// What the agent observed about its node.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeState {
    pub cpu_usage: f32,
    pub memory_usage: f32,
}

/// What the agent intends to do next.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionPlan {
    pub action: String,
    pub parameters: Map<String, Value>,
}

impl ActionPlan {
    fn new(action: &str, parameters: Map<String, Value>) -> Self {
        Self {
            action: action.to_string(),
            parameters,
        }
    }

    fn noop() -> Self {
        Self::new("noop", Map::new())
    }
}

pub struct HypernodeAgent {
    config: AgentConfig,
    probe: SystemProbe,
}

impl HypernodeAgent {
    pub fn new(config: AgentConfig) -> Self {
        Self {
            config,
            probe: SystemProbe::new(),
        }
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Observe the node: cpu and memory usage percentages, 0.0 when the
    /// platform cannot report them.
    pub fn perceive(&mut self) -> NodeState {
        let metrics = self.probe.sample();
        NodeState {
            cpu_usage: metrics.cpu_usage.unwrap_or(0.0),
            memory_usage: self.probe.memory_percent().unwrap_or(0.0),
        }
    }

    /// Map observed state plus an instruction to an action plan.
    ///
    /// High CPU takes priority over the instruction; otherwise "report"
    /// asks for a metrics report and everything else (including "no
    /// action") plans a noop.
    pub fn reason(&self, state: &NodeState, instruction: &str) -> ActionPlan {
        if state.cpu_usage >= HIGH_CPU_THRESHOLD {
            let mut parameters = Map::new();
            parameters.insert("cpu_usage".to_string(), json!(state.cpu_usage));
            return ActionPlan::new("throttle", parameters);
        }

        match instruction.trim().to_lowercase().as_str() {
            "report" => {
                let mut parameters = Map::new();
                parameters.insert("cpu_usage".to_string(), json!(state.cpu_usage));
                parameters.insert("memory_usage".to_string(), json!(state.memory_usage));
                ActionPlan::new("report_metrics", parameters)
            }
            _ => ActionPlan::noop(),
        }
    }

    /// Execute a plan. The template runtime only knows stub actions, so
    /// success means the action name was recognized.
    pub fn act(&mut self, plan: &ActionPlan) -> bool {
        info!(action = %plan.action, "executing action plan");
        matches!(plan.action.as_str(), "noop" | "throttle" | "report_metrics")
    }
}
