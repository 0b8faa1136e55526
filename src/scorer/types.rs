use serde::{Deserialize, Serialize};

/// One rolled substat slot exactly as it appears in an exported echo
/// document: the stat identifier plus the value it rolled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RolledSubstat {
    pub name: String,
    pub value: f64,
}

impl RolledSubstat {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// A single substat after grading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubstatScore {
    pub name: String,
    /// The rolled value the efficiency was derived from.
    pub value: f64,
    /// Position of the roll on the `[baseline, 100]` scale for its range.
    pub efficiency: f64,
}

/// Aggregate grade for one echo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EchoEfficiency {
    /// Per-substat grades in the order the substats were supplied.
    pub substats: Vec<SubstatScore>,
    /// Mean of the per-substat efficiencies. This is the grade the rolls
    /// earn on their own, before accounting for which stats were rolled.
    pub theoretical: f64,
    /// `theoretical` scaled by the caller's max-efficiency weight.
    pub total: f64,
}

impl EchoEfficiency {
    /// Efficiency of the first graded substat with the given identifier.
    pub fn efficiency_of(&self, name: &str) -> Option<f64> {
        self.substats
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.efficiency)
    }
}
