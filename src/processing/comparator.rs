//! Per-profile skill comparison

use crate::input::records::ReferenceProfile;
use crate::processing::skills::SkillSet;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Overlap between the user's skills and one reference profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileComparison {
    pub name: String,
    pub common_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    /// Percentage of the profile's skills the user already has, 0-100.
    pub similarity_score: f64,
    pub experience_years: u32,
    pub company: String,
}

/// Compare the user against a single profile.
///
/// `common ∪ missing` is always exactly the profile's skills. A profile with no
/// skills scores 0 rather than dividing by zero.
pub fn compare_profile(user_skills: &SkillSet, profile: &ReferenceProfile) -> ProfileComparison {
    let common = user_skills.intersection(&profile.skills);
    let missing = profile.skills.difference(user_skills);

    let similarity_score = if profile.skills.is_empty() {
        warn!("Reference profile '{}' has no skills; similarity set to 0", profile.name);
        0.0
    } else {
        round_one_decimal(common.len() as f64 / profile.skills.len() as f64 * 100.0)
    };

    debug!(
        "Compared against '{}': {} common, {} missing, {:.1}%",
        profile.name,
        common.len(),
        missing.len(),
        similarity_score
    );

    ProfileComparison {
        name: profile.name.clone(),
        common_skills: common.to_vec(),
        missing_skills: missing.to_vec(),
        similarity_score,
        experience_years: profile.experience_years,
        company: profile.company.clone(),
    }
}

/// Compare the user against every profile in the cohort, keeping cohort order.
pub fn compare_cohort(user_skills: &SkillSet, profiles: &[ReferenceProfile]) -> Vec<ProfileComparison> {
    profiles
        .iter()
        .map(|profile| compare_profile(user_skills, profile))
        .collect()
}

pub(crate) fn round_one_decimal(value: f64) -> f64 {
    ((value * 10.0).round() / 10.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::profile;
    use std::collections::BTreeSet;

    #[test]
    fn test_partial_overlap() {
        let user = SkillSet::parse("python, sql");
        let reference = profile("Daniel Lee", "python, r, statistics", "Data Science");

        let comparison = compare_profile(&user, &reference);
        assert_eq!(comparison.common_skills, vec!["python"]);
        assert_eq!(comparison.missing_skills, vec!["r", "statistics"]);
        assert_eq!(comparison.similarity_score, 33.3);
    }

    #[test]
    fn test_empty_user_skills() {
        let user = SkillSet::parse("");
        let reference = profile("Rachel Green", "python, pandas, numpy, tableau", "Data Science");

        let comparison = compare_profile(&user, &reference);
        assert_eq!(comparison.similarity_score, 0.0);
        assert!(comparison.common_skills.is_empty());
        assert_eq!(comparison.missing_skills.len(), 4);
    }

    #[test]
    fn test_zero_skill_profile_scores_zero() {
        let user = SkillSet::parse("python");
        let reference = profile("Nobody", " , ", "AI");

        let comparison = compare_profile(&user, &reference);
        assert_eq!(comparison.similarity_score, 0.0);
        assert!(comparison.common_skills.is_empty());
        assert!(comparison.missing_skills.is_empty());
    }

    #[test]
    fn test_full_overlap_is_hundred() {
        let user = SkillSet::parse("Python, Keras, extra");
        let reference = profile("Alex", "python,keras", "AI");
        assert_eq!(compare_profile(&user, &reference).similarity_score, 100.0);
    }

    #[test]
    fn test_partition_invariant_holds() {
        let users = ["", "python", "python, sql, r", "statistics, r, python, sql, spark"];
        let cohort = vec![
            profile("A", "python, r, statistics", "Data Science"),
            profile("B", "python, spark, hadoop, etl, aws", "Data Science"),
            profile("C", "", "Data Science"),
        ];

        for user in users {
            let user_skills = SkillSet::parse(user);
            for (comparison, reference) in compare_cohort(&user_skills, &cohort).iter().zip(&cohort) {
                let common: BTreeSet<&String> = comparison.common_skills.iter().collect();
                let missing: BTreeSet<&String> = comparison.missing_skills.iter().collect();
                let expected: BTreeSet<&String> = reference.skills.iter().collect();

                assert!(common.is_disjoint(&missing));
                assert_eq!(common.union(&missing).cloned().collect::<BTreeSet<_>>(), expected);
                assert!((0.0..=100.0).contains(&comparison.similarity_score));
            }
        }
    }

    #[test]
    fn test_rounding() {
        assert_eq!(round_one_decimal(66.666), 66.7);
        assert_eq!(round_one_decimal(14.28), 14.3);
        assert_eq!(round_one_decimal(100.00000001), 100.0);
    }
}
