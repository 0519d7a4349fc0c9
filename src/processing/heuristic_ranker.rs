//! Rating-based course ranking

use crate::input::records::Course;
use crate::processing::assembler::{AccessSplit, CourseRecommendation};
use crate::processing::skills::SkillSet;
use log::debug;

/// Courses in the specialization or teaching a missing skill, best rated first.
///
/// The sort is stable, so equally rated courses keep catalog order.
pub fn rank_by_rating(
    courses: &[Course],
    specialization: &str,
    missing_skills: &SkillSet,
    top_n: usize,
) -> Vec<CourseRecommendation> {
    let mut candidates: Vec<&Course> = courses
        .iter()
        .filter(|course| course.matches(specialization, missing_skills))
        .collect();

    candidates.sort_by(|a, b| b.rating.total_cmp(&a.rating));

    debug!(
        "Heuristic ranking: {} of {} courses eligible for '{}'",
        candidates.len(),
        courses.len(),
        specialization
    );

    candidates
        .into_iter()
        .take(top_n)
        .cloned()
        .map(CourseRecommendation::by_rating)
        .collect()
}

/// Paid and free courses ranked separately by rating, top N of each.
pub fn rank_by_access(
    courses: &[Course],
    specialization: &str,
    missing_skills: &SkillSet,
    top_n: usize,
) -> AccessSplit {
    let (free, paid): (Vec<Course>, Vec<Course>) =
        courses.iter().cloned().partition(Course::is_free);

    AccessSplit {
        paid: rank_by_rating(&paid, specialization, missing_skills, top_n),
        free: rank_by_rating(&free, specialization, missing_skills, top_n),
    }
}
