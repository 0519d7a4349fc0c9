//! Skill guide lookups and learning-path construction

use crate::error::{AdvisorError, Result};
use crate::processing::skills::SkillSet;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

const BUILTIN_GUIDE: &str = include_str!("../../data/skill_guide.toml");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGuideEntry {
    pub duration: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Data table of per-skill study estimates. Keys are normalized skill tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGuide {
    pub default_duration: String,
    #[serde(default, rename = "skills")]
    entries: BTreeMap<String, SkillGuideEntry>,
}

/// One step of a learning path, in missing-skill order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningStep {
    pub skill: String,
    pub duration: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Default for SkillGuide {
    fn default() -> Self {
        Self {
            default_duration: "4-6 weeks".to_string(),
            entries: BTreeMap::new(),
        }
    }
}

impl SkillGuide {
    pub fn builtin() -> Result<Self> {
        Self::from_toml(BUILTIN_GUIDE)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let raw: SkillGuide = toml::from_str(content)
            .map_err(|e| AdvisorError::CatalogLoad(format!("Failed to parse skill guide: {}", e)))?;

        // Keys in the file may use any case.
        let entries = raw
            .entries
            .into_iter()
            .filter_map(|(skill, entry)| SkillSet::normalize_token(&skill).map(|key| (key, entry)))
            .collect();

        Ok(Self {
            default_duration: raw.default_duration,
            entries,
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let guide = Self::from_toml(&content)?;
        debug!("Loaded skill guide with {} entries from {}", guide.len(), path.display());
        Ok(guide)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn lookup(&self, skill: &str) -> Option<&SkillGuideEntry> {
        SkillSet::normalize_token(skill).and_then(|key| self.entries.get(&key))
    }

    pub fn duration_for(&self, skill: &str) -> &str {
        self.lookup(skill)
            .map(|entry| entry.duration.as_str())
            .unwrap_or(&self.default_duration)
    }

    pub fn step_for(&self, skill: &str) -> LearningStep {
        let entry = self.lookup(skill);
        LearningStep {
            skill: skill.to_string(),
            duration: entry
                .map(|e| e.duration.clone())
                .unwrap_or_else(|| self.default_duration.clone()),
            description: entry.and_then(|e| e.description.clone()),
        }
    }

    pub fn learning_path(&self, missing: &SkillSet) -> Vec<LearningStep> {
        missing.iter().map(|skill| self.step_for(skill)).collect()
    }
}

/// Display text for a step without a curated description.
pub fn generic_description(skill: &str, specialization: &str) -> String {
    format!(
        "Master {} to enhance your expertise in {}. This skill is crucial for professional development in this field.",
        skill, specialization
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_guide_parses() {
        let guide = SkillGuide::builtin().unwrap();
        assert_eq!(guide.default_duration, "4-6 weeks");
        assert!(guide.len() > 30);
        assert_eq!(guide.duration_for("Deep Learning"), "12-16 weeks");
    }

    #[test]
    fn test_unknown_skill_gets_default() {
        let guide = SkillGuide::builtin().unwrap();
        let step = guide.step_for("cobol");
        assert_eq!(step.duration, "4-6 weeks");
        assert!(step.description.is_none());
    }

    #[test]
    fn test_custom_guide_keys_are_normalized() {
        let guide = SkillGuide::from_toml(
            r#"
default_duration = "1 week"

[skills."  Rust "]
duration = "8 weeks"
description = "Systems programming"
"#,
        )
        .unwrap();

        let entry = guide.lookup("rust").unwrap();
        assert_eq!(entry.duration, "8 weeks");
        assert_eq!(guide.duration_for("go"), "1 week");
    }

    #[test]
    fn test_learning_path_follows_missing_order() {
        let guide = SkillGuide::builtin().unwrap();
        let path = guide.learning_path(&SkillSet::parse("spark, keras, quantum annealing"));

        let skills: Vec<&str> = path.iter().map(|s| s.skill.as_str()).collect();
        assert_eq!(skills, vec!["keras", "quantum annealing", "spark"]);
        assert_eq!(path[0].duration, "2-3 weeks");
        assert!(path[0].description.is_some());
        assert_eq!(path[1].duration, "4-6 weeks");
    }

    #[test]
    fn test_invalid_guide_is_catalog_error() {
        let result = SkillGuide::from_toml("default_duration = 3");
        assert!(matches!(result, Err(AdvisorError::CatalogLoad(_))));
    }

    #[test]
    fn test_generic_description() {
        assert!(generic_description("cobol", "AI").starts_with("Master cobol to enhance your expertise in AI."));
    }
}
