//! Content-based course ranking over TF-IDF vectors

use crate::error::{AdvisorError, Result};
use crate::input::records::{position_by_name, Course};
use crate::processing::assembler::{CourseRecommendation, SimilarCourses};
use crate::processing::comparator::round_one_decimal;
use crate::processing::skills::SkillSet;
use crate::processing::tfidf::{TfIdfModel, TfIdfVectorizer};
use log::{debug, info};
use parking_lot::Mutex;
use sha2::{Digest, Sha256};
use std::collections::VecDeque;
use std::sync::Arc;

/// Jaro-Winkler score below which no "did you mean" suggestion is offered.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Ranks courses by cosine similarity of their combined description and skill
/// text. Fitted models are cached per corpus fingerprint.
pub struct ContentSimilarityRanker {
    vectorizer: TfIdfVectorizer,
    cache: Mutex<ModelCache>,
}

struct ModelCache {
    capacity: usize,
    entries: VecDeque<(String, Arc<TfIdfModel>)>,
    hits: u64,
    misses: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
}

impl ModelCache {
    fn get(&mut self, fingerprint: &str) -> Option<Arc<TfIdfModel>> {
        let found = self
            .entries
            .iter()
            .find(|(key, _)| key == fingerprint)
            .map(|(_, model)| Arc::clone(model));
        match found {
            Some(_) => self.hits += 1,
            None => self.misses += 1,
        }
        found
    }

    fn insert(&mut self, fingerprint: String, model: Arc<TfIdfModel>) {
        if self.capacity == 0 {
            return;
        }
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back((fingerprint, model));
    }
}

impl ContentSimilarityRanker {
    /// `cache_capacity` of 0 refits on every call.
    pub fn new(cache_capacity: usize) -> Result<Self> {
        Ok(Self {
            vectorizer: TfIdfVectorizer::new()?,
            cache: Mutex::new(ModelCache {
                capacity: cache_capacity,
                entries: VecDeque::new(),
                hits: 0,
                misses: 0,
            }),
        })
    }

    pub fn cache_stats(&self) -> CacheStats {
        let cache = self.cache.lock();
        CacheStats {
            entries: cache.entries.len(),
            hits: cache.hits,
            misses: cache.misses,
        }
    }

    /// Fitted model for `courses`, reused when the same corpus was seen before.
    pub fn model_for(&self, courses: &[Course]) -> Arc<TfIdfModel> {
        let fingerprint = corpus_fingerprint(courses);

        // Held across the fit so concurrent misses on one corpus fit it once.
        let mut cache = self.cache.lock();
        if let Some(model) = cache.get(&fingerprint) {
            debug!("TF-IDF cache hit for corpus {}", &fingerprint[..12]);
            return model;
        }

        let documents: Vec<String> = courses.iter().map(Course::combined_features).collect();
        let model = Arc::new(self.vectorizer.fit(&documents));
        cache.insert(fingerprint, Arc::clone(&model));
        model
    }

    /// The `top_n` courses most similar to `target_name`, excluding the target.
    /// The result names the target as the catalog spells it.
    ///
    /// Returns `CourseNotFound` with the closest catalog name when the target is
    /// not in the corpus. Equal scores keep corpus order.
    pub fn rank_similar(&self, courses: &[Course], target_name: &str, top_n: usize) -> Result<SimilarCourses> {
        let target = position_by_name(courses, target_name)
            .ok_or_else(|| course_not_found(courses, target_name))?;

        let model = self.model_for(courses);
        let scores = model.similarities_to_row(target);

        let mut ranked: Vec<(usize, f64)> = scores
            .iter()
            .copied()
            .enumerate()
            .filter(|&(index, _)| index != target)
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

        info!(
            "Ranked {} courses by similarity to '{}'",
            ranked.len(),
            courses[target].name
        );

        Ok(SimilarCourses {
            target: courses[target].name.clone(),
            recommendations: to_recommendations(courses, ranked, top_n),
        })
    }

    /// Courses whose text best matches the given skills. Courses sharing no
    /// terms with the skills are left out.
    pub fn rank_for_skills(
        &self,
        courses: &[Course],
        skills: &SkillSet,
        top_n: usize,
    ) -> Vec<CourseRecommendation> {
        if skills.is_empty() || courses.is_empty() {
            return Vec::new();
        }

        let model = self.model_for(courses);
        let query_text = skills.iter().map(String::as_str).collect::<Vec<_>>().join(" ");
        let query = model.transform(&query_text);
        let scores = model.similarities_to(&query);

        let mut ranked: Vec<(usize, f64)> = scores
            .iter()
            .copied()
            .enumerate()
            .filter(|&(_, score)| score > 0.0)
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

        debug!(
            "{} of {} courses share terms with {} skills",
            ranked.len(),
            courses.len(),
            skills.len()
        );

        to_recommendations(courses, ranked, top_n)
    }
}

fn to_recommendations(courses: &[Course], ranked: Vec<(usize, f64)>, top_n: usize) -> Vec<CourseRecommendation> {
    ranked
        .into_iter()
        .take(top_n)
        .map(|(index, score)| {
            CourseRecommendation::by_similarity(courses[index].clone(), round_one_decimal(score * 100.0))
        })
        .collect()
}

/// `CourseNotFound` for `name`, suggesting the closest catalog name.
pub fn course_not_found(courses: &[Course], name: &str) -> AdvisorError {
    AdvisorError::CourseNotFound {
        name: name.to_string(),
        suggestion: closest_name(courses, name),
    }
}

fn closest_name(courses: &[Course], name: &str) -> Option<String> {
    let wanted = name.trim().to_lowercase();
    courses
        .iter()
        .map(|c| (strsim::jaro_winkler(&wanted, &c.name.to_lowercase()), &c.name))
        .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, name)| name.clone())
}

/// SHA-256 over every course's name and vectorized text, in corpus order.
pub fn corpus_fingerprint(courses: &[Course]) -> String {
    let mut hasher = Sha256::new();
    for course in courses {
        hasher.update(course.name.as_bytes());
        hasher.update([0u8]);
        hasher.update(course.combined_features().as_bytes());
        hasher.update([0xffu8]);
    }
    format!("{:x}", hasher.finalize())
}
