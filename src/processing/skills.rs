//! Skill list normalization

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::btree_set;
use std::collections::BTreeSet;
use std::fmt;

/// Normalized set of lower-cased, trimmed skill tokens.
///
/// Backed by a `BTreeSet` so that every projection to a sequence comes out in
/// the same order for the same skills.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillSet {
    skills: BTreeSet<String>,
}

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a comma-separated skill list. Empty input gives an empty set.
    pub fn parse(input: &str) -> Self {
        input.split(',').collect()
    }

    pub fn normalize_token(token: &str) -> Option<String> {
        let normalized = token.trim().to_lowercase();
        if normalized.is_empty() {
            None
        } else {
            Some(normalized)
        }
    }

    pub fn insert(&mut self, skill: &str) -> bool {
        match Self::normalize_token(skill) {
            Some(normalized) => self.skills.insert(normalized),
            None => false,
        }
    }

    pub fn contains(&self, skill: &str) -> bool {
        match Self::normalize_token(skill) {
            Some(normalized) => self.skills.contains(&normalized),
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn iter(&self) -> btree_set::Iter<'_, String> {
        self.skills.iter()
    }

    pub fn intersection(&self, other: &SkillSet) -> SkillSet {
        SkillSet {
            skills: self.skills.intersection(&other.skills).cloned().collect(),
        }
    }

    pub fn difference(&self, other: &SkillSet) -> SkillSet {
        SkillSet {
            skills: self.skills.difference(&other.skills).cloned().collect(),
        }
    }

    pub fn union(&self, other: &SkillSet) -> SkillSet {
        SkillSet {
            skills: self.skills.union(&other.skills).cloned().collect(),
        }
    }

    pub fn extend_from(&mut self, other: &SkillSet) {
        self.skills.extend(other.skills.iter().cloned());
    }

    pub fn is_disjoint(&self, other: &SkillSet) -> bool {
        self.skills.is_disjoint(&other.skills)
    }

    /// Sorted sequence for display and serialization.
    pub fn to_vec(&self) -> Vec<String> {
        self.skills.iter().cloned().collect()
    }
}

impl<S: AsRef<str>> FromIterator<S> for SkillSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let skills = iter
            .into_iter()
            .filter_map(|s| Self::normalize_token(s.as_ref()))
            .collect();
        SkillSet { skills }
    }
}

impl<'a> IntoIterator for &'a SkillSet {
    type Item = &'a String;
    type IntoIter = btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.skills.iter()
    }
}

impl fmt::Display for SkillSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<&str> = self.skills.iter().map(|s| s.as_str()).collect();
        write!(f, "{}", joined.join(", "))
    }
}

impl Serialize for SkillSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.skills.iter())
    }
}

/// Catalog files store skills either as the comma-separated column the
/// profile table used or as a plain list.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawSkills {
    Delimited(String),
    List(Vec<String>),
}

impl<'de> Deserialize<'de> for SkillSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Ok(match RawSkills::deserialize(deserializer)? {
            RawSkills::Delimited(text) => SkillSet::parse(&text),
            RawSkills::List(items) => items.into_iter().collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes_tokens() {
        let skills = SkillSet::parse("  Python, SQL ,python,, Machine Learning ");
        assert_eq!(skills.len(), 3);
        assert!(skills.contains("python"));
        assert!(skills.contains("sql"));
        assert!(skills.contains("machine learning"));
        assert!(skills.contains("  PYTHON "));
    }

    #[test]
    fn test_empty_input_gives_empty_set() {
        assert!(SkillSet::parse("").is_empty());
        assert!(SkillSet::parse(" , ,  ").is_empty());
    }

    #[test]
    fn test_set_operations() {
        let user = SkillSet::parse("python, sql");
        let profile = SkillSet::parse("python, r, statistics");

        assert_eq!(user.intersection(&profile).to_vec(), vec!["python"]);
        assert_eq!(profile.difference(&user).to_vec(), vec!["r", "statistics"]);
        assert_eq!(user.union(&profile).len(), 4);
        assert!(!user.is_disjoint(&profile));
    }

    #[test]
    fn test_deserialize_from_string_or_list() {
        let from_str: SkillSet = serde_json::from_str("\"Python, Keras\"").unwrap();
        let from_list: SkillSet = serde_json::from_str("[\"keras\", \" python\"]").unwrap();
        assert_eq!(from_str, from_list);

        let encoded = serde_json::to_string(&from_str).unwrap();
        assert_eq!(encoded, "[\"keras\",\"python\"]");
    }

    #[test]
    fn test_display_joins_sorted() {
        let skills = SkillSet::parse("sql, aws, docker");
        assert_eq!(skills.to_string(), "aws, docker, sql");
    }
}
