use std::env::{var, VarError};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::loss::loss_func::{LossFunc, LossKind};
use crate::utils::GenericResult;

pub const LOSS_KIND_VAR: &str = "LOSS_KIND";

/// Selects the loss the learner is trained with. Nothing else about a loss is configurable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LossConfig {
    #[serde(default)]
    pub kind: LossKind,
}

impl LossConfig {
    pub fn new(kind: LossKind) -> Self {
        Self { kind }
    }

    /// Reads [`LOSS_KIND_VAR`]. An unset variable means the default loss.
    pub fn from_env() -> GenericResult<Self> {
        match var(LOSS_KIND_VAR) {
            Ok(value) => Self::from_name(&value),
            Err(VarError::NotPresent) => Ok(Self::default()),
            Err(e) => Err(e).with_context(|| format!("Failed to read {}", LOSS_KIND_VAR)),
        }
    }

    pub fn from_name(name: &str) -> GenericResult<Self> {
        let kind = name.parse::<LossKind>().with_context(|| format!("Invalid value for {}", LOSS_KIND_VAR))?;
        Ok(Self { kind })
    }

    pub fn from_json(json: &str) -> GenericResult<Self> {
        serde_json::from_str(json).context("Invalid loss config")
    }

    pub fn create(&self) -> LossFunc {
        LossFunc::create(self.kind)
    }
}
