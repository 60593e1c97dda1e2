// ── Invocation reports ──
//
// Exactly one of these is printed per invocation.

use serde::Serialize;

use crate::facts::FactDocument;

/// Terminal result of one adapter run.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Report {
    /// A mutating adapter finished.
    Changed { changed: bool },
    /// Fact gathering finished; never changes anything.
    Facts { changed: bool, facts: FactDocument },
    /// Anything went wrong.
    Failed { failed: bool, message: String },
}

impl Report {
    pub fn changed(changed: bool) -> Self {
        Self::Changed { changed }
    }

    pub fn facts(facts: FactDocument) -> Self {
        Self::Facts {
            changed: false,
            facts,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            failed: true,
            message: message.into(),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}
