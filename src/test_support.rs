//! Shared fixtures for unit tests.

use crate::input::records::{Course, Difficulty, ReferenceProfile};
use crate::processing::skills::SkillSet;

pub fn course(name: &str, skill: &str, specialization: &str, rating: f64) -> Course {
    Course {
        name: name.to_string(),
        skill: skill.to_string(),
        specialization: specialization.to_string(),
        platform: "Coursera".to_string(),
        url: "https://example.com".to_string(),
        difficulty: Difficulty::Intermediate,
        instructor: None,
        description: format!("Learn {}", skill),
        rating,
        price: None,
        duration: None,
    }
}

pub fn described_course(name: &str, skill: &str, description: &str) -> Course {
    Course {
        description: description.to_string(),
        ..course(name, skill, "AI", 4.5)
    }
}

pub fn profile(name: &str, skills: &str, specialization: &str) -> ReferenceProfile {
    ReferenceProfile {
        name: name.to_string(),
        skills: SkillSet::parse(skills),
        specialization: specialization.to_string(),
        experience_years: 5,
        company: "Acme".to_string(),
    }
}
