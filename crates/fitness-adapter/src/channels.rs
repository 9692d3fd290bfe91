//! Raw signals and their bounded mappings, one pair per fitness channel.
//!
//! Every mapping is smooth and strictly monotonic over its raw signal's
//! domain. Nothing here clamps, so NaN inputs come out as NaN.

use l0_core::ParamTriple;

/// `1 / (1 + error)`: strictly decreasing, in `(0, 1]` for `error >= 0`.
pub fn capability_from_error(error: f64) -> f64 {
    1.0 / (1.0 + error)
}

/// `exp(-2 * variance)`: strictly decreasing, in `(0, 1]` for `variance >= 0`.
pub fn alignment_from_variance(variance: f64) -> f64 {
    (-2.0 * variance).exp()
}

/// `tanh(5 * change_rate)`: strictly increasing, in `[0, 1)` for `change_rate >= 0`.
pub fn risk_events_from_change_rate(change_rate: f64) -> f64 {
    (5.0 * change_rate).tanh()
}

/// Logistic rescaled so that a zero magnitude maps to zero:
/// `2 / (1 + exp(-magnitude)) - 1`.
pub fn risk_score_from_magnitude(magnitude: f64) -> f64 {
    2.0 / (1.0 + (-magnitude).exp()) - 1.0
}

pub fn param_variance(params: &ParamTriple) -> f64 {
    params.variance()
}

pub fn param_magnitude(params: &ParamTriple) -> f64 {
    params.magnitude()
}

/// Distance travelled since the previous generation; zero for a first
/// generation.
pub fn param_change_rate(current: &ParamTriple, previous: Option<&ParamTriple>) -> f64 {
    previous.map_or(0.0, |prev| current.distance(prev))
}
