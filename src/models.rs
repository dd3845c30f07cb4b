use std::fmt;

use serde::{Deserialize, Serialize};

/// Degree programs offered in the reference dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Program {
    #[serde(rename = "B.Tech")]
    BTech,
    #[serde(rename = "BCA")]
    Bca,
    #[serde(rename = "B.Sc")]
    BSc,
    #[serde(rename = "MBA")]
    Mba,
}

impl Program {
    pub const ALL: [Program; 4] = [Program::BTech, Program::Bca, Program::BSc, Program::Mba];

    pub fn as_str(&self) -> &'static str {
        match self {
            Program::BTech => "B.Tech",
            Program::Bca => "BCA",
            Program::BSc => "B.Sc",
            Program::Mba => "MBA",
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One student's raw metrics. Read-only to the scoring pipeline; values are
/// carried through to the output unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub student_id: String,
    pub age: u32,
    pub program: Program,
    pub semester: u8,
    pub gpa: f64,
    pub attendance: f64,
    pub assignments_completion: f64,
    pub stress_level: i32,
    pub sleep_hours: f64,
    pub mental_wellbeing: i32,
    pub productivity_score: i32,
    pub distractions: i32,
    pub career_clarity: i32,
    pub skill_readiness: i32,
    pub engagement_score: f64,
}

/// Risk tiers ordered by ascending index band: Red < Yellow < Blue < Green.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskCategory {
    Red,
    Yellow,
    Blue,
    Green,
}

impl RiskCategory {
    pub const ALL: [RiskCategory; 4] = [
        RiskCategory::Red,
        RiskCategory::Yellow,
        RiskCategory::Blue,
        RiskCategory::Green,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskCategory::Red => "Red",
            RiskCategory::Yellow => "Yellow",
            RiskCategory::Blue => "Blue",
            RiskCategory::Green => "Green",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskCategory::Red => "Critical",
            RiskCategory::Yellow => "Warning",
            RiskCategory::Blue => "Good",
            RiskCategory::Green => "Excellent",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A student record with its derived scores. Built whole by `score::score`;
/// the five derived fields are never set individually.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRecord {
    pub student: StudentRecord,
    pub aps: f64,
    pub wws: f64,
    pub ptms: f64,
    pub crs: f64,
    pub sri: f64,
    pub risk_category: RiskCategory,
}
