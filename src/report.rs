use std::fmt::Write;

use chrono::NaiveDate;

use crate::checks::CheckReport;
use crate::models::{RiskCategory, ScoredRecord};

/// How many of the lowest-index students the report lists.
const HIGHEST_RISK_LIMIT: usize = 10;

struct ScoreAverages {
    aps: f64,
    wws: f64,
    ptms: f64,
    crs: f64,
    sri: f64,
}

fn average_scores(scored: &[ScoredRecord]) -> Option<ScoreAverages> {
    if scored.is_empty() {
        return None;
    }

    let n = scored.len() as f64;
    Some(ScoreAverages {
        aps: scored.iter().map(|r| r.aps).sum::<f64>() / n,
        wws: scored.iter().map(|r| r.wws).sum::<f64>() / n,
        ptms: scored.iter().map(|r| r.ptms).sum::<f64>() / n,
        crs: scored.iter().map(|r| r.crs).sum::<f64>() / n,
        sri: scored.iter().map(|r| r.sri).sum::<f64>() / n,
    })
}

fn tier_count(scored: &[ScoredRecord], tier: RiskCategory) -> usize {
    scored.iter().filter(|r| r.risk_category == tier).count()
}

pub fn build_report(
    scored: &[ScoredRecord],
    checks: &CheckReport,
    generated_on: NaiveDate,
) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "# Student Risk Report");
    let _ = writeln!(
        output,
        "Generated on {} over {} students.",
        generated_on,
        scored.len()
    );

    let _ = writeln!(output);
    let _ = writeln!(output, "## Risk tier distribution");

    if scored.is_empty() {
        let _ = writeln!(output, "No students scored.");
    } else {
        for tier in RiskCategory::ALL.iter().rev() {
            let _ = writeln!(
                output,
                "- {} ({}): {} students",
                tier,
                tier.label(),
                tier_count(scored, *tier)
            );
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Cohort averages");

    match average_scores(scored) {
        None => {
            let _ = writeln!(output, "No students scored.");
        }
        Some(avg) => {
            let _ = writeln!(output, "- APS {:.1}", avg.aps);
            let _ = writeln!(output, "- WWS {:.1}", avg.wws);
            let _ = writeln!(output, "- PTMS {:.1}", avg.ptms);
            let _ = writeln!(output, "- CRS {:.1}", avg.crs);
            let _ = writeln!(output, "- SRI {:.1}", avg.sri);
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Highest risk students");

    if scored.is_empty() {
        let _ = writeln!(output, "No students scored.");
    } else {
        let mut by_risk: Vec<&ScoredRecord> = scored.iter().collect();
        by_risk.sort_by(|a, b| a.sri.partial_cmp(&b.sri).unwrap_or(std::cmp::Ordering::Equal));
        for record in by_risk.iter().take(HIGHEST_RISK_LIMIT) {
            let _ = writeln!(
                output,
                "- {} ({}, semester {}) SRI {:.1} ({})",
                record.student.student_id,
                record.student.program,
                record.student.semester,
                record.sri,
                record.risk_category
            );
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Archetype cross-checks");

    for outcome in checks.outcomes() {
        if outcome.count == 0 {
            let _ = writeln!(output, "- {}: no matches", outcome.name);
        } else {
            let _ = writeln!(
                output,
                "- {}: {} students (sample: {})",
                outcome.name,
                outcome.count,
                outcome.sample().join(", ")
            );
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::run_checks;
    use crate::models::{Program, StudentRecord};
    use crate::score::score_records;

    fn student(id: &str, gpa: f64) -> StudentRecord {
        StudentRecord {
            student_id: id.to_string(),
            age: 21,
            program: Program::BSc,
            semester: 5,
            gpa,
            attendance: 82.0,
            assignments_completion: 76.0,
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
    fn report_lists_tiers_and_checks() {
        let scored = score_records(&[student("S001", 9.5), student("S002", 3.0)]);
        let checks = run_checks(&scored);
        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();

        let report = build_report(&scored, &checks, date);
        assert!(report.contains("# Student Risk Report"));
        assert!(report.contains("Generated on 2026-03-01 over 2 students."));
        assert!(report.contains("## Risk tier distribution"));
        assert!(report.contains("- Green (Excellent):"));
        assert!(report.contains("## Archetype cross-checks"));
        assert!(report.contains("- burnout: no matches"));
    }

    #[test]
    fn highest_risk_students_come_first() {
        let scored = score_records(&[
            student("S001", 9.5),
            student("S002", 2.0),
            student("S003", 6.0),
        ]);
        let checks = run_checks(&scored);
        let report = build_report(&scored, &checks, NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());

        let s002 = report.find("- S002").unwrap();
        let s003 = report.find("- S003").unwrap();
        let s001 = report.find("- S001").unwrap();
        assert!(s002 < s003 && s003 < s001);
    }

    #[test]
    fn empty_cohort_report_is_well_formed() {
        let checks = run_checks(&[]);
        let report = build_report(&[], &checks, NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
        assert!(report.contains("over 0 students"));
        assert!(report.contains("No students scored."));
    }
}
