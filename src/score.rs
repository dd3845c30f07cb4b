//! Per-record risk scoring: four weighted sub-indices, the composite student
//! risk index, and the tier classification. Every function here is pure and
//! looks at a single record, so scoring is deterministic and order-free.

use crate::models::{RiskCategory, ScoredRecord, StudentRecord};
use crate::normalize::{invert_scale, round1, scale_sleep, scale_up};

// Academic Performance Score weights.
const APS_GPA: f64 = 0.60;
const APS_ASSIGNMENTS: f64 = 0.20;
const APS_ATTENDANCE: f64 = 0.20;

// Wellbeing Score weights.
const WWS_MENTAL: f64 = 0.40;
const WWS_SLEEP: f64 = 0.30;
const WWS_STRESS: f64 = 0.30;

// Productivity / Time-Management Score weights.
const PTMS_PRODUCTIVITY: f64 = 0.50;
const PTMS_DISTRACTIONS: f64 = 0.30;
const PTMS_ENGAGEMENT: f64 = 0.20;

// Career Readiness Score weights.
const CRS_CLARITY: f64 = 0.50;
const CRS_SKILL: f64 = 0.50;

// Composite weights over the rounded sub-indices.
const SRI_APS: f64 = 0.30;
const SRI_WWS: f64 = 0.25;
const SRI_PTMS: f64 = 0.20;
const SRI_CRS: f64 = 0.25;

// Tier cut points, inclusive on the lower bound of each band.
const GREEN_MIN: f64 = 80.0;
const BLUE_MIN: f64 = 60.0;
const YELLOW_MIN: f64 = 40.0;

pub fn academic_performance(student: &StudentRecord) -> f64 {
    round1(
        scale_up(student.gpa) * APS_GPA
            + student.assignments_completion * APS_ASSIGNMENTS
            + student.attendance * APS_ATTENDANCE,
    )
}

pub fn wellbeing(student: &StudentRecord) -> f64 {
    round1(
        scale_up(f64::from(student.mental_wellbeing)) * WWS_MENTAL
            + scale_sleep(student.sleep_hours) * WWS_SLEEP
            + invert_scale(f64::from(student.stress_level)) * WWS_STRESS,
    )
}

pub fn productivity(student: &StudentRecord) -> f64 {
    round1(
        scale_up(f64::from(student.productivity_score)) * PTMS_PRODUCTIVITY
            + invert_scale(f64::from(student.distractions)) * PTMS_DISTRACTIONS
            + student.engagement_score * PTMS_ENGAGEMENT,
    )
}

pub fn career_readiness(student: &StudentRecord) -> f64 {
    round1(
        scale_up(f64::from(student.career_clarity)) * CRS_CLARITY
            + scale_up(f64::from(student.skill_readiness)) * CRS_SKILL,
    )
}

/// Combines the four already-rounded sub-indices into the composite index.
pub fn composite_index(aps: f64, wws: f64, ptms: f64, crs: f64) -> f64 {
    round1(aps * SRI_APS + wws * SRI_WWS + ptms * SRI_PTMS + crs * SRI_CRS)
}

/// Maps a rounded composite index onto its risk tier, highest band first.
pub fn classify(sri: f64) -> RiskCategory {
    if sri >= GREEN_MIN {
        RiskCategory::Green
    } else if sri >= BLUE_MIN {
        RiskCategory::Blue
    } else if sri >= YELLOW_MIN {
        RiskCategory::Yellow
    } else {
        RiskCategory::Red
    }
}

/// Scores a single record. The input is carried into the result unchanged.
pub fn score(student: &StudentRecord) -> ScoredRecord {
    let aps = academic_performance(student);
    let wws = wellbeing(student);
    let ptms = productivity(student);
    let crs = career_readiness(student);
    let sri = composite_index(aps, wws, ptms, crs);

    ScoredRecord {
        student: student.clone(),
        aps,
        wws,
        ptms,
        crs,
        sri,
        risk_category: classify(sri),
    }
}

/// Scores every record, preserving input order one-to-one.
pub fn score_records(students: &[StudentRecord]) -> Vec<ScoredRecord> {
    students.iter().map(score).collect()
}
