use crate::choices::ModifierKind;
use crate::factory::{BuildError, ValueModifierFactory, build_solver};
use crate::solver::Solver;
use anyhow::{Context, Result};
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

const DEFAULT_CLIPPING_LIMIT: f64 = 42.0;
fn default_clipping_limit() -> f64 {
    DEFAULT_CLIPPING_LIMIT
}

/// Everything needed to assemble a [`Solver`].
///
/// JSON form: `{ "clipping_limit": 42.0, "modifier": "square" }`. Both fields
/// are optional.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SolverConfig {
    #[serde(default = "default_clipping_limit")]
    #[schemars(
        title = "Clipping limit",
        description = "Upper bound applied to every derived value."
    )]
    pub clipping_limit: f64,

    #[serde(default)]
    #[schemars(
        title = "Modifier",
        description = "Value modifier used to derive the solution."
    )]
    pub modifier: ModifierKind,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            clipping_limit: default_clipping_limit(),
            modifier: ModifierKind::default(),
        }
    }
}

impl SolverConfig {
    pub fn schema() -> Schema {
        schema_for!(SolverConfig)
    }

    /// Validates and decodes a JSON value.
    ///
    /// An unknown `modifier` tag is reported as
    /// [`BuildError::UnsupportedVariant`] rather than a generic decode error.
    pub fn from_value(value: Value) -> Result<Self, BuildError> {
        let fields = value.as_object().ok_or_else(|| {
            BuildError::InvalidParameter(format!("solver config must be an object, got {value}"))
        })?;
        if let Some(tag) = fields.get("modifier") {
            let tag = tag.as_str().ok_or_else(|| {
                BuildError::InvalidParameter(format!("modifier must be a string, got {tag}"))
            })?;
            ModifierKind::parse(tag)?;
        }
        let config: SolverConfig = serde_json::from_value(value)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(s: &str) -> Result<Self, BuildError> {
        Self::from_value(serde_json::from_str(s)?)
    }

    /// Reads a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading solver config {}", path.display()))?;
        Self::from_json_str(&text)
            .with_context(|| format!("parsing solver config {}", path.display()))
    }

    pub fn validate(&self) -> Result<(), BuildError> {
        if self.clipping_limit.is_nan() {
            return Err(BuildError::InvalidParameter(
                "clipping_limit must not be NaN".into(),
            ));
        }
        Ok(())
    }

    pub fn build(&self, factory: &dyn ValueModifierFactory) -> Result<Solver, BuildError> {
        self.validate()?;
        build_solver(factory, self.modifier, self.clipping_limit)
    }
}
