use crate::params::ParamTriple;
use std::f64::consts::TAU;
use std::fmt;

/// Sample count used when a caller does not pick one.
pub const DEFAULT_SAMPLES: usize = 100;

/// Reference curve the model is scored against on `[0, 1]`.
pub fn target_curve(x: f64) -> f64 {
    (TAU * x).sin()
}

/// Present/absent slot for a cached approximation error.
///
/// Once filled the slot is never invalidated: parameter updates after caching
/// leave the stale value in place until the model is rebuilt.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ErrorCache {
    #[default]
    Empty,
    Cached(f64),
}

impl ErrorCache {
    pub fn get(&self) -> Option<f64> {
        match *self {
            ErrorCache::Empty => None,
            ErrorCache::Cached(e) => Some(e),
        }
    }
}

/// Three-parameter approximator `f(x) = w1*x + w2*x^2 + w3`.
#[derive(Debug, PartialEq, Default)]
pub struct Model {
    pub params: ParamTriple,
    pub generation: u64,
    cache: ErrorCache,
}

impl Model {
    pub fn new(w1: f64, w2: f64, w3: f64) -> Self {
        Self::from_params(ParamTriple::new(w1, w2, w3))
    }

    pub fn from_params(params: ParamTriple) -> Self {
        Self {
            params,
            generation: 0,
            cache: ErrorCache::Empty,
        }
    }

    pub fn with_generation(mut self, generation: u64) -> Self {
        self.generation = generation;
        self
    }

    pub fn predict(&self, x: f64) -> f64 {
        let p = &self.params;
        p.w1 * x + p.w2 * x * x + p.w3
    }

    /// Mean absolute error against [`target_curve`] over `n_samples` evenly
    /// spaced points of `[0, 1]`.
    ///
    /// With two or more samples both endpoints are included; a single sample
    /// sits at `x = 0`; zero samples yield NaN. The cache is neither read nor
    /// written.
    pub fn evaluate_error(&self, n_samples: usize) -> f64 {
        let total: f64 = sample_points(n_samples)
            .map(|x| (target_curve(x) - self.predict(x)).abs())
            .sum();
        let error = total / n_samples as f64;
        tracing::debug!(generation = self.generation, n_samples, error, "evaluated l0 model");
        error
    }

    /// Cached variant of [`Model::evaluate_error`].
    ///
    /// Returns the stored value whenever one exists, regardless of
    /// `n_samples` or any parameter change since it was stored. Otherwise the
    /// error is computed and stored before being returned.
    pub fn evaluate_error_cached(&mut self, n_samples: usize) -> f64 {
        if let Some(error) = self.cache.get() {
            tracing::trace!(generation = self.generation, error, "error cache hit");
            return error;
        }
        let error = self.evaluate_error(n_samples);
        self.cache = ErrorCache::Cached(error);
        error
    }

    pub fn cached_error(&self) -> Option<f64> {
        self.cache.get()
    }

    pub fn cache(&self) -> ErrorCache {
        self.cache
    }
}

/// Copies parameters and generation into fresh storage; the error cache is
/// left behind.
impl Clone for Model {
    fn clone(&self) -> Self {
        Self {
            params: self.params,
            generation: self.generation,
            cache: ErrorCache::Empty,
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SimplifiedL0(w1={:.3}, w2={:.3}, w3={:.3})",
            self.params.w1, self.params.w2, self.params.w3
        )
    }
}

fn sample_points(n: usize) -> impl Iterator<Item = f64> {
    let step = if n > 1 { 1.0 / (n - 1) as f64 } else { 0.0 };
    (0..n).map(move |i| if n > 1 && i == n - 1 { 1.0 } else { i as f64 * step })
}
