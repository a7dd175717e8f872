//! JSON-driven evaluation: build a process, detect its cycle, answer index queries.
//!
//! Used by the `cycle_eval` tool; the report is plain serde data so it can be checked directly.

use serde::{Deserialize, Serialize};

use crate::analysis::CycleSummary;
use crate::config::DetectLimits;
use crate::detect::find_cycle_with_limits;
use crate::error::CycleError;
use crate::process::ProcessSpec;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalInput {
    pub process: ProcessSpec,
    #[serde(default)]
    pub limits: DetectLimits,
    #[serde(default)]
    pub queries: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryResult {
    Value(i64),
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryAnswer {
    pub index: i64,
    #[serde(flatten)]
    pub result: QueryResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvalReport {
    pub summary: CycleSummary,
    pub prefix: Vec<i64>,
    pub cycle: Vec<i64>,
    pub queries: Vec<QueryAnswer>,
}

/// Run detection for `input`.
///
/// Process and detection failures are returned as errors; a bad query index only fails its own
/// entry in [`EvalReport::queries`].
pub fn evaluate(input: &EvalInput) -> Result<EvalReport, CycleError> {
    let analysis = find_cycle_with_limits(input.process.states()?, input.limits)?;

    let queries = input
        .queries
        .iter()
        .map(|&index| QueryAnswer {
            index,
            result: match analysis.find_value_at(index) {
                Ok(v) => QueryResult::Value(*v),
                Err(e) => QueryResult::Error(e.to_string()),
            },
        })
        .collect();

    Ok(EvalReport {
        summary: analysis.summary(),
        prefix: analysis.prefix().to_vec(),
        cycle: analysis.cycle().to_vec(),
        queries,
    })
}
