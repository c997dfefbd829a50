use scm_bias_core::{Quadrant, QuadrantPolicy};
use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::gate::evaluate;
use crate::state::{GroupEntry, SurveyState};

/// Placement of one group on the bias map. Derived on every read.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupResult {
    pub group: String,
    pub warmth_score: f64,
    pub competence_score: f64,
    pub quadrant: Quadrant,
    pub emotion: &'static str,
    pub behavior: &'static str,
}

pub fn project_group(entry: &GroupEntry, policy: &QuadrantPolicy) -> GroupResult {
    let warmth_score = entry.ratings().warmth().mean();
    let competence_score = entry.ratings().competence().mean();
    let quadrant = policy.classify(warmth_score, competence_score);
    let bias = quadrant.bias();
    GroupResult {
        group: entry.name().to_string(),
        warmth_score,
        competence_score,
        quadrant,
        emotion: bias.emotion,
        behavior: bias.behavior,
    }
}

/// One result per group, in group order.
pub fn project(state: &SurveyState) -> Vec<GroupResult> {
    let policy = state.config().policy();
    state
        .groups()
        .iter()
        .map(|entry| project_group(entry, &policy))
        .collect()
}

/// Results plus gate status and per-quadrant counts, for summary cards.
pub fn summary_json(state: &SurveyState) -> Value {
    let results = project(state);
    let mut counts = Map::new();
    for q in Quadrant::ALL {
        let n = results.iter().filter(|r| r.quadrant == q).count();
        counts.insert(q.label().to_string(), json!(n));
    }
    json!({
        "groups": results.len(),
        "gate": evaluate(state),
        "quadrant_counts": counts,
        "results": results,
    })
}
