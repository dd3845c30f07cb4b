//! Archetype-balanced synthetic dataset generation. Each student is drawn
//! from one of four archetype buckets with a target cohort mix, so every
//! risk tier is represented instead of the cohort collapsing into the
//! middle. The scoring pipeline never calls into this module; it only ever
//! sees the resulting CSV.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{Program, RiskCategory, StudentRecord};
use crate::normalize::round1;

/// Target cohort mix: 10% Red, 30% Yellow, 40% Blue, 20% Green.
const TIER_MIX: [(RiskCategory, f64); 4] = [
    (RiskCategory::Red, 0.10),
    (RiskCategory::Yellow, 0.30),
    (RiskCategory::Blue, 0.40),
    (RiskCategory::Green, 0.20),
];

struct Archetype {
    gpa: (f64, f64),
    attendance: (f64, f64),
    assignments: (f64, f64),
    stress: (i32, i32),
    sleep: (f64, f64),
    wellbeing: (i32, i32),
    productivity: (i32, i32),
    distractions: (i32, i32),
    career: (i32, i32),
    skill: (i32, i32),
    engagement: (f64, f64),
}

fn archetype(tier: RiskCategory) -> Archetype {
    match tier {
        // Dropout risk: failing grades, absent, in crisis.
        RiskCategory::Red => Archetype {
            gpa: (2.0, 5.0),
            attendance: (10.0, 60.0),
            assignments: (0.0, 40.0),
            stress: (7, 10),
            sleep: (3.0, 5.0),
            wellbeing: (1, 4),
            productivity: (1, 3),
            distractions: (8, 10),
            career: (1, 3),
            skill: (1, 3),
            engagement: (0.0, 30.0),
        },
        // Struggler: passing but anxious and irregular.
        RiskCategory::Yellow => Archetype {
            gpa: (5.0, 7.0),
            attendance: (60.0, 75.0),
            assignments: (50.0, 70.0),
            stress: (6, 9),
            sleep: (5.0, 7.0),
            wellbeing: (4, 6),
            productivity: (3, 5),
            distractions: (5, 8),
            career: (3, 6),
            skill: (3, 5),
            engagement: (40.0, 60.0),
        },
        // Steady middle of the cohort.
        RiskCategory::Blue => Archetype {
            gpa: (7.0, 8.5),
            attendance: (75.0, 90.0),
            assignments: (70.0, 90.0),
            stress: (3, 6),
            sleep: (6.0, 8.0),
            wellbeing: (6, 8),
            productivity: (6, 8),
            distractions: (3, 6),
            career: (5, 8),
            skill: (5, 7),
            engagement: (60.0, 85.0),
        },
        // Star: topper with clear goals and healthy habits.
        RiskCategory::Green => Archetype {
            gpa: (8.5, 10.0),
            attendance: (90.0, 100.0),
            assignments: (90.0, 100.0),
            stress: (1, 4),
            sleep: (7.0, 9.0),
            wellbeing: (8, 10),
            productivity: (8, 10),
            distractions: (1, 3),
            career: (8, 10),
            skill: (8, 10),
            engagement: (85.0, 100.0),
        },
    }
}

/// Generates `count` students. A fixed seed reproduces the exact dataset;
/// without one the generator draws from OS entropy.
pub fn generate_dataset(count: usize, seed: Option<u64>) -> Vec<StudentRecord> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    generate_with_rng(count, &mut rng)
}

fn generate_with_rng(count: usize, rng: &mut StdRng) -> Vec<StudentRecord> {
    let targets: Vec<usize> = TIER_MIX
        .iter()
        .map(|(_, ratio)| (count as f64 * ratio) as usize)
        .collect();
    let mut filled = vec![0usize; TIER_MIX.len()];

    let mut students = Vec::with_capacity(count);
    for i in 1..=count {
        let open: Vec<usize> = (0..TIER_MIX.len())
            .filter(|&bucket| filled[bucket] < targets[bucket])
            .collect();
        let bucket = match open.as_slice() {
            // Integer targets can undershoot `count`; the remainder lands in
            // the middle of the cohort.
            [] => 2,
            open => open[rng.gen_range(0..open.len())],
        };
        filled[bucket] += 1;

        students.push(generate_student(i, archetype(TIER_MIX[bucket].0), rng));
    }

    students
}

fn generate_student(index: usize, ranges: Archetype, rng: &mut StdRng) -> StudentRecord {
    let program = Program::ALL[rng.gen_range(0..Program::ALL.len())];
    let semester = rng.gen_range(1..=8u8);
    let base_age = if program == Program::Mba { 22 } else { 18 };

    let mut gpa = rng.gen_range(ranges.gpa.0..ranges.gpa.1);
    gpa += rng.gen_range(-0.2..0.2);
    gpa = gpa.clamp(0.0, 10.0);

    StudentRecord {
        student_id: format!("S{index:03}"),
        age: base_age + u32::from(semester / 2),
        program,
        semester,
        gpa: round2(gpa),
        attendance: round1(rng.gen_range(ranges.attendance.0..ranges.attendance.1)),
        assignments_completion: round1(rng.gen_range(ranges.assignments.0..ranges.assignments.1)),
        stress_level: rng.gen_range(ranges.stress.0..=ranges.stress.1),
        sleep_hours: round1(rng.gen_range(ranges.sleep.0..ranges.sleep.1)),
        mental_wellbeing: rng.gen_range(ranges.wellbeing.0..=ranges.wellbeing.1),
        productivity_score: rng.gen_range(ranges.productivity.0..=ranges.productivity.1),
        distractions: rng.gen_range(ranges.distractions.0..=ranges.distractions.1),
        career_clarity: rng.gen_range(ranges.career.0..=ranges.career.1),
        skill_readiness: rng.gen_range(ranges.skill.0..=ranges.skill.1),
        engagement_score: round1(rng.gen_range(ranges.engagement.0..ranges.engagement.1)),
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_seed_reproduces_the_dataset() {
        let first = generate_dataset(50, Some(7));
        let second = generate_dataset(50, Some(7));
        assert_eq!(first, second);
    }

    #[test]
    fn different_seeds_differ() {
        let first = generate_dataset(50, Some(7));
        let second = generate_dataset(50, Some(8));
        assert_ne!(first, second);
    }

    #[test]
    fn respects_count_and_id_sequence() {
        let students = generate_dataset(25, Some(1));
        assert_eq!(students.len(), 25);
        assert_eq!(students[0].student_id, "S001");
        assert_eq!(students[24].student_id, "S025");
    }

    #[test]
    fn generated_metrics_stay_in_documented_ranges() {
        for student in generate_dataset(200, Some(42)) {
            assert!((0.0..=10.0).contains(&student.gpa));
            assert!((1..=8).contains(&student.semester));
            assert!((1..=10).contains(&student.stress_level));
            assert!((1..=10).contains(&student.mental_wellbeing));
            assert!((1..=10).contains(&student.productivity_score));
            assert!((1..=10).contains(&student.distractions));
            assert!((1..=10).contains(&student.career_clarity));
            assert!((1..=10).contains(&student.skill_readiness));
            assert!((0.0..=100.0).contains(&student.attendance));
            assert!((0.0..=100.0).contains(&student.assignments_completion));
            assert!((0.0..=100.0).contains(&student.engagement_score));
            assert!(student.sleep_hours > 0.0);
            assert!(student.age >= 18);
        }
    }
}
