//! Archetype cross-checks over a scored cohort. Each check is an independent
//! predicate scan that reports how many students match a known behavioral
//! profile. The results are diagnostic only and never feed back into scoring.

use serde::Serialize;

use crate::models::{ScoredRecord, StudentRecord};

pub const BURNOUT_STRESS_MIN: i32 = 8;
pub const BURNOUT_PRODUCTIVITY_MAX: i32 = 4;
pub const DRIFTER_GPA_MIN: f64 = 8.0;
pub const DRIFTER_CLARITY_MAX: i32 = 4;
pub const GRINDER_GPA_MAX: f64 = 6.0;
pub const GRINDER_ENGAGEMENT_MIN: f64 = 80.0;

/// How many matched students a console or report line shows.
pub const SAMPLE_SIZE: usize = 5;

/// High stress paired with low productivity.
pub fn is_burnout(student: &StudentRecord) -> bool {
    student.stress_level >= BURNOUT_STRESS_MIN
        && student.productivity_score <= BURNOUT_PRODUCTIVITY_MAX
}

/// Strong academics but no career direction.
pub fn is_drifter(student: &StudentRecord) -> bool {
    student.gpa >= DRIFTER_GPA_MIN && student.career_clarity <= DRIFTER_CLARITY_MAX
}

/// Heavy platform engagement that is not translating into grades.
pub fn is_grinder(student: &StudentRecord) -> bool {
    student.gpa <= GRINDER_GPA_MAX && student.engagement_score >= GRINDER_ENGAGEMENT_MIN
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub name: &'static str,
    pub count: usize,
    pub students: Vec<String>,
}

impl CheckOutcome {
    pub fn sample(&self) -> &[String] {
        &self.students[..self.students.len().min(SAMPLE_SIZE)]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub burnout: CheckOutcome,
    pub drifter: CheckOutcome,
    pub grinder: CheckOutcome,
}

impl CheckReport {
    pub fn outcomes(&self) -> [&CheckOutcome; 3] {
        [&self.burnout, &self.drifter, &self.grinder]
    }
}

/// Runs the three archetype scans over an already-scored cohort. Matches are
/// reported in input order and the scored records are left untouched.
pub fn run_checks(scored: &[ScoredRecord]) -> CheckReport {
    CheckReport {
        burnout: collect("burnout", scored, is_burnout),
        drifter: collect("drifter", scored, is_drifter),
        grinder: collect("grinder", scored, is_grinder),
    }
}

fn collect(
    name: &'static str,
    scored: &[ScoredRecord],
    predicate: impl Fn(&StudentRecord) -> bool,
) -> CheckOutcome {
    let students: Vec<String> = scored
        .iter()
        .filter(|record| predicate(&record.student))
        .map(|record| record.student.student_id.clone())
        .collect();

    CheckOutcome {
        name,
        count: students.len(),
        students,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Program;
    use crate::score::score_records;

    fn student(id: &str) -> StudentRecord {
        StudentRecord {
            student_id: id.to_string(),
            age: 20,
            program: Program::Bca,
            semester: 3,
            gpa: 7.0,
            attendance: 80.0,
            assignments_completion: 75.0,
            stress_level: 5,
            sleep_hours: 7.0,
            mental_wellbeing: 7,
            productivity_score: 7,
            distractions: 4,
            career_clarity: 7,
            skill_readiness: 6,
            engagement_score: 70.0,
        }
    }

    #[test]
    fn burnout_requires_both_thresholds() {
        let mut s = student("S001");
        s.stress_level = 8;
        s.productivity_score = 4;
        assert!(is_burnout(&s));

        s.stress_level = 7;
        assert!(!is_burnout(&s));

        s.stress_level = 9;
        s.productivity_score = 5;
        assert!(!is_burnout(&s));
    }

    #[test]
    fn drifter_boundaries_are_inclusive() {
        let mut s = student("S002");
        s.gpa = 8.0;
        s.career_clarity = 4;
        assert!(is_drifter(&s));

        s.gpa = 7.9;
        assert!(!is_drifter(&s));
    }

    #[test]
    fn grinder_boundaries_are_inclusive() {
        let mut s = student("S003");
        s.gpa = 6.0;
        s.engagement_score = 80.0;
        assert!(is_grinder(&s));

        s.engagement_score = 79.9;
        assert!(!is_grinder(&s));
    }

    #[test]
    fn checks_report_matches_in_input_order() {
        let mut burned_a = student("S010");
        burned_a.stress_level = 9;
        burned_a.productivity_score = 2;
        let mut burned_b = student("S020");
        burned_b.stress_level = 8;
        burned_b.productivity_score = 4;
        let clean = student("S015");

        let scored = score_records(&[burned_a, clean, burned_b]);
        let report = run_checks(&scored);

        assert_eq!(report.burnout.count, 2);
        assert_eq!(report.burnout.students, vec!["S010", "S020"]);
        assert_eq!(report.drifter.count, 0);
        assert_eq!(report.grinder.count, 0);
    }

    #[test]
    fn checks_are_reproducible() {
        let mut drifting = student("S030");
        drifting.gpa = 9.1;
        drifting.career_clarity = 2;

        let scored = score_records(&[drifting, student("S031")]);
        assert_eq!(run_checks(&scored), run_checks(&scored));
    }

    #[test]
    fn sample_is_capped() {
        let outcome = CheckOutcome {
            name: "burnout",
            count: 7,
            students: (0..7).map(|i| format!("S{i:03}")).collect(),
        };
        assert_eq!(outcome.sample().len(), SAMPLE_SIZE);

        let short = CheckOutcome {
            name: "grinder",
            count: 2,
            students: vec!["S001".to_string(), "S002".to_string()],
        };
        assert_eq!(short.sample().len(), 2);
    }
}
