use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use lazy_static::lazy_static;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::loss::cross_entropy_loss::CrossEntropyLoss;
use crate::loss::hinge_loss::HingeLoss;
use crate::loss::log_loss::LogLoss;
use crate::loss::logistic_loss::LogisticLoss;
use crate::loss::square_loss::SquareLoss;
use crate::loss::squared_hinge_loss::SquaredHingeLoss;
use crate::utils::GenericResult;

/// Formulas of a single loss. Implementors are unit structs, all methods are pure functions of
/// their arguments.
pub trait LossFuncOps {
    const NAME: &'static str;

    /// Non-negative loss of the score `pred` against the label `truth`
    fn evaluate(pred: f64, truth: f64) -> f64;

    /// Derivative of [`LossFuncOps::evaluate`] with respect to `pred`
    fn gradient(pred: f64, truth: f64) -> f64;

    /// Maps the model's raw score to the reported prediction
    fn predict(x: f64) -> f64;
}

/// Enum to select which loss the learner optimizes. The discriminants are stable and match
/// [`LossKind::code`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LossKind {
    /// `(y - a)^2`. Any real target.
    Square = 0,

    /// `-y log(p) - (1 - y) log(1 - p)` where the score is already a probability.
    /// Labels in {0, 1}.
    Logistic = 1,

    /// `log(1 + exp(-a * y))`. Labels in {-1, 1}.
    Log = 2,

    /// `max(0, 1 - a * y)`. Labels in {-1, 1}.
    /// https://en.wikipedia.org/wiki/Hinge_loss
    Hinge = 3,

    /// `0.5 * max(0, 1 - a * y)^2`. Labels in {-1, 1}.
    SquaredHinge = 4,

    /// Logistic loss on a logit: `(1 - y) * a + log(1 + exp(-a))`. Labels in {0, 1}.
    /// https://en.wikipedia.org/wiki/Cross-entropy
    CrossEntropy = 5,
}

lazy_static! {
    /// Lowercase names accepted when parsing a [`LossKind`]
    static ref KINDS_BY_NAME: HashMap<String, LossKind> = {
        let mut names = HashMap::new();
        for kind in LossKind::ALL {
            names.insert(kind.name().to_lowercase(), kind);
        }
        names.insert("squared_hinge".to_owned(), LossKind::SquaredHinge);
        names.insert("cross_entropy".to_owned(), LossKind::CrossEntropy);
        names
    };
}

impl LossKind {
    pub const ALL: [LossKind; 6] = [
        LossKind::Square,
        LossKind::Logistic,
        LossKind::Log,
        LossKind::Hinge,
        LossKind::SquaredHinge,
        LossKind::CrossEntropy,
    ];

    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn from_code(code: i32) -> Option<LossKind> {
        LossKind::ALL.into_iter().find(|kind| kind.code() == code)
    }

    pub fn name(self) -> &'static str {
        use LossKind::*;
        match self {
            Square => SquareLoss::NAME,
            Logistic => LogisticLoss::NAME,
            Log => LogLoss::NAME,
            Hinge => HingeLoss::NAME,
            SquaredHinge => SquaredHingeLoss::NAME,
            CrossEntropy => CrossEntropyLoss::NAME,
        }
    }
}

impl Default for LossKind {
    fn default() -> Self {
        LossKind::Square
    }
}

impl Display for LossKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LossKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KINDS_BY_NAME
            .get(&s.trim().to_lowercase())
            .copied()
            .ok_or_else(|| anyhow::anyhow!("Unknown loss '{}'. Expected one of: {}", s, expected_names()))
    }
}

fn expected_names() -> String {
    LossKind::ALL.iter().map(|o| o.name()).collect::<Vec<_>>().join(", ")
}

/// A loss function ready to be called once per example. Holds no state besides the selected
/// kind, so it can be copied freely and shared between threads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LossFunc {
    kind: LossKind,
}

impl LossFunc {
    pub fn create(kind: LossKind) -> Self {
        debug!("Using {} loss", kind);
        Self { kind }
    }

    /// Creates the loss identified by a raw code. Unknown codes fall back to
    /// [`LossKind::Square`], use [`LossFunc::try_from_code`] to reject them instead.
    pub fn from_code(code: i32) -> Self {
        match LossKind::from_code(code) {
            Some(kind) => Self::create(kind),
            None => {
                warn!("Unknown loss code {}, falling back to {}", code, LossKind::Square);
                Self::create(LossKind::Square)
            }
        }
    }

    pub fn try_from_code(code: i32) -> GenericResult<Self> {
        LossKind::from_code(code)
            .map(Self::create)
            .ok_or_else(|| anyhow::anyhow!("Unknown loss code {}. Expected 0 to {}", code, LossKind::ALL.len() - 1))
    }

    pub fn kind(&self) -> LossKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn evaluate(&self, pred: f64, truth: f64) -> f64 {
        use LossKind::*;
        match self.kind {
            Square => SquareLoss::evaluate(pred, truth),
            Logistic => LogisticLoss::evaluate(pred, truth),
            Log => LogLoss::evaluate(pred, truth),
            Hinge => HingeLoss::evaluate(pred, truth),
            SquaredHinge => SquaredHingeLoss::evaluate(pred, truth),
            CrossEntropy => CrossEntropyLoss::evaluate(pred, truth),
        }
    }

    pub fn gradient(&self, pred: f64, truth: f64) -> f64 {
        use LossKind::*;
        match self.kind {
            Square => SquareLoss::gradient(pred, truth),
            Logistic => LogisticLoss::gradient(pred, truth),
            Log => LogLoss::gradient(pred, truth),
            Hinge => HingeLoss::gradient(pred, truth),
            SquaredHinge => SquaredHingeLoss::gradient(pred, truth),
            CrossEntropy => CrossEntropyLoss::gradient(pred, truth),
        }
    }

    pub fn predict(&self, x: f64) -> f64 {
        use LossKind::*;
        match self.kind {
            Square => SquareLoss::predict(x),
            Logistic => LogisticLoss::predict(x),
            Log => LogLoss::predict(x),
            Hinge => HingeLoss::predict(x),
            SquaredHinge => SquaredHingeLoss::predict(x),
            CrossEntropy => CrossEntropyLoss::predict(x),
        }
    }
}

impl Default for LossFunc {
    fn default() -> Self {
        Self { kind: LossKind::default() }
    }
}

impl From<LossKind> for LossFunc {
    fn from(kind: LossKind) -> Self {
        Self::create(kind)
    }
}

pub fn calc_loss(func: &LossFunc, pred: f64, truth: f64) -> f64 {
    func.evaluate(pred, truth)
}

pub fn calc_loss_grad(func: &LossFunc, pred: f64, truth: f64) -> f64 {
    func.gradient(pred, truth)
}
