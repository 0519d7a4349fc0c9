//! Cohort-wide skill gap aggregation

use crate::input::records::ReferenceProfile;
use crate::processing::skills::SkillSet;
use log::debug;

/// Skills required across a cohort and the subset the user lacks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillGap {
    pub all_required_skills: SkillSet,
    pub missing_skills: SkillSet,
}

/// Union the cohort's skills and subtract the user's.
pub fn aggregate_gap(user_skills: &SkillSet, profiles: &[ReferenceProfile]) -> SkillGap {
    let mut all_required_skills = SkillSet::new();
    for profile in profiles {
        all_required_skills.extend_from(&profile.skills);
    }

    let missing_skills = all_required_skills.difference(user_skills);
    debug!(
        "Cohort of {} profiles requires {} skills, {} missing",
        profiles.len(),
        all_required_skills.len(),
        missing_skills.len()
    );

    SkillGap {
        all_required_skills,
        missing_skills,
    }
}
