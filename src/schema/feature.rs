use serde::{Serialize, Deserialize};

/// What a column (or group of columns) means, plus the parameters needed to
/// encode it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FeatureKind {
    /// `true` / `false`, encoded as 1.0 / 0.0.
    Binary,
    /// Real value in `[min, max]`, min-max normalised.
    Continuous { min: f64, max: f64 },
    /// One label out of `categories`, one-hot encoded.
    Categorical { categories: Vec<String> },
    /// Value already in [0, 1].
    Probability,
}

impl FeatureKind {
    /// Number of encoded input columns.
    ///
    /// Probability contributes none: it has no input encoding.
    pub fn input_width(&self) -> usize {
        match self {
            FeatureKind::Binary | FeatureKind::Continuous { .. } => 1,
            FeatureKind::Categorical { categories } => categories.len(),
            FeatureKind::Probability => 0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FeatureKind::Binary => "binary",
            FeatureKind::Continuous { .. } => "continuous",
            FeatureKind::Categorical { .. } => "categorical",
            FeatureKind::Probability => "probability",
        }
    }
}

/// One named input dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureDefinition {
    pub name: String,
    #[serde(flatten)]
    pub kind: FeatureKind,
}

impl FeatureDefinition {
    pub fn new(name: impl Into<String>, kind: FeatureKind) -> Self {
        FeatureDefinition { name: name.into(), kind }
    }

    pub fn binary(name: impl Into<String>) -> Self {
        Self::new(name, FeatureKind::Binary)
    }

    pub fn continuous(name: impl Into<String>, min: f64, max: f64) -> Self {
        Self::new(name, FeatureKind::Continuous { min, max })
    }

    pub fn categorical<S: Into<String>>(
        name: impl Into<String>,
        categories: impl IntoIterator<Item = S>,
    ) -> Self {
        let categories = categories.into_iter().map(Into::into).collect();
        Self::new(name, FeatureKind::Categorical { categories })
    }

    pub fn probability(name: impl Into<String>) -> Self {
        Self::new(name, FeatureKind::Probability)
    }
}

/// One named prediction target. Decoding only understands `Continuous` and
/// `Probability`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputDefinition {
    pub name: String,
    #[serde(flatten)]
    pub kind: FeatureKind,
}

impl OutputDefinition {
    pub fn new(name: impl Into<String>, kind: FeatureKind) -> Self {
        OutputDefinition { name: name.into(), kind }
    }

    pub fn continuous(name: impl Into<String>, min: f64, max: f64) -> Self {
        Self::new(name, FeatureKind::Continuous { min, max })
    }

    pub fn probability(name: impl Into<String>) -> Self {
        Self::new(name, FeatureKind::Probability)
    }
}
