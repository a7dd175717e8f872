//! Detection limits.

use serde::{Deserialize, Serialize};

fn default_max_iterations() -> u64 {
    u64::MAX
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Bounds on the work a single detection may perform.
///
/// - `max_iterations`: number of states pulled from the sequence before giving up
/// - `capacity_hint`: initial capacity reserved for the seen history
pub struct DetectLimits {
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u64,
    #[serde(default)]
    pub capacity_hint: usize,
}

impl DetectLimits {
    #[inline]
    pub fn with_max_iterations(max_iterations: u64) -> Self {
        Self {
            max_iterations,
            ..Self::default()
        }
    }
}

impl Default for DetectLimits {
    fn default() -> Self {
        Self {
            max_iterations: default_max_iterations(),
            capacity_hint: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let limits: DetectLimits = serde_json::from_str("{}").unwrap();
        assert_eq!(limits, DetectLimits::default());

        let limits: DetectLimits = serde_json::from_str(r#"{"max_iterations": 20}"#).unwrap();
        assert_eq!(limits.max_iterations, 20);
        assert_eq!(limits.capacity_hint, 0);
    }
}
