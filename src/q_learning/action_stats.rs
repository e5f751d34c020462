//! Per-(state, action) statistics

use serde::{Deserialize, Deserializer, Serialize};

use super::math::nan_to_zero;

/// Value record for one (state, action) pair.
///
/// `q_weighted` is derived from `q_raw`, `calls`, the priming threshold and
/// the sibling mean at the time of the last weighting pass. It is persisted
/// for inspection only and recomputed before every read by the agent.
///
/// Serialized field names are `calls`, `qRaw` and `qWeighted`. JSON has no
/// NaN and writes it as `null`; `null` and NaN both load as `0.0`, the value
/// the agent already substitutes for NaN.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionStats {
    /// Number of learning updates applied to this pair
    pub calls: u64,
    /// Raw Bellman-updated value
    #[serde(deserialize_with = "value_or_zero")]
    pub q_raw: f64,
    /// Bayesian-smoothed value used for comparisons
    #[serde(deserialize_with = "value_or_zero")]
    pub q_weighted: f64,
}

fn value_or_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.map_or(0.0, nan_to_zero))
}

impl ActionStats {
    /// Zero-valued record used for unobserved and primed pairs.
    pub const fn zero() -> Self {
        Self {
            calls: 0,
            q_raw: 0.0,
            q_weighted: 0.0,
        }
    }

    /// Create a record with explicit values.
    pub fn new(calls: u64, q_raw: f64, q_weighted: f64) -> Self {
        Self {
            calls,
            q_raw,
            q_weighted,
        }
    }

    /// Whether the pair has never been used in a learning update.
    pub fn is_unobserved(&self) -> bool {
        self.calls == 0
    }
}
