use serde::{Deserialize, Serialize};

/// Weight assigned to any coefficient not supplied at construction.
pub const DEFAULT_WEIGHT: f64 = 0.5;

fn default_weight() -> f64 {
    DEFAULT_WEIGHT
}

/// JSON has no NaN or infinity literals, so non-finite weights are written as
/// strings (`"NaN"`, `"inf"`, `"-inf"`). `null` reads back as NaN.
mod weight_serde {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Wire {
        Number(f64),
        Text(String),
        Null,
    }

    pub fn serialize<S>(w: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if w.is_finite() {
            serializer.serialize_f64(*w)
        } else {
            serializer.serialize_str(&w.to_string())
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Wire::deserialize(deserializer)? {
            Wire::Number(w) => Ok(w),
            Wire::Null => Ok(f64::NAN),
            Wire::Text(t) => t
                .parse::<f64>()
                .map_err(|_| D::Error::custom(format!("not a weight: {t:?}"))),
        }
    }
}

/// The three coefficients of `w1*x + w2*x^2 + w3`, always enumerated as
/// `w1, w2, w3`.
///
/// No bounds are enforced; NaN and infinities are stored as given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParamTriple {
    #[serde(default = "default_weight", with = "weight_serde")]
    pub w1: f64,
    #[serde(default = "default_weight", with = "weight_serde")]
    pub w2: f64,
    #[serde(default = "default_weight", with = "weight_serde")]
    pub w3: f64,
}

impl ParamTriple {
    pub fn new(w1: f64, w2: f64, w3: f64) -> Self {
        Self { w1, w2, w3 }
    }

    pub fn as_array(&self) -> [f64; 3] {
        [self.w1, self.w2, self.w3]
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> {
        self.as_array().into_iter()
    }

    /// Population variance (divisor 3) of the three weights.
    pub fn variance(&self) -> f64 {
        let mean = self.iter().sum::<f64>() / 3.0;
        self.iter().map(|w| (w - mean).powi(2)).sum::<f64>() / 3.0
    }

    /// Mean absolute weight.
    pub fn magnitude(&self) -> f64 {
        self.iter().map(f64::abs).sum::<f64>() / 3.0
    }

    /// Euclidean distance to `other`, component by component.
    pub fn distance(&self, other: &ParamTriple) -> f64 {
        self.iter()
            .zip(other.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            .sqrt()
    }
}

impl Default for ParamTriple {
    fn default() -> Self {
        Self::new(DEFAULT_WEIGHT, DEFAULT_WEIGHT, DEFAULT_WEIGHT)
    }
}

impl From<[f64; 3]> for ParamTriple {
    fn from(w: [f64; 3]) -> Self {
        Self::new(w[0], w[1], w[2])
    }
}
