//! Report envelope: engine results plus generation metadata

use crate::config::RankingStrategy;
use crate::processing::assembler::{RecommendationResult, SimilarCourses};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A formatted-ready report. The engine result stays untouched inside it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisorReport {
    pub metadata: ReportMetadata,
    pub content: ReportContent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// When the report was generated
    pub generated_at: DateTime<Utc>,

    /// Version of the advisor used
    pub advisor_version: String,

    /// Wall-clock time of the engine call
    pub processing_time_ms: u64,

    /// Number of courses in the corpus at the time of the call
    pub corpus_size: usize,

    pub strategy: Option<RankingStrategy>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportContent {
    Recommendation(RecommendationResult),
    Similar(SimilarCourses),
}

impl ReportMetadata {
    pub fn new(processing_time_ms: u64, corpus_size: usize, strategy: Option<RankingStrategy>) -> Self {
        Self {
            generated_at: Utc::now(),
            advisor_version: env!("CARGO_PKG_VERSION").to_string(),
            processing_time_ms,
            corpus_size,
            strategy,
        }
    }
}

impl AdvisorReport {
    pub fn recommendation(result: RecommendationResult, processing_time_ms: u64, corpus_size: usize) -> Self {
        Self {
            metadata: ReportMetadata::new(processing_time_ms, corpus_size, Some(result.strategy)),
            content: ReportContent::Recommendation(result),
        }
    }

    pub fn similar(similar: SimilarCourses, processing_time_ms: u64, corpus_size: usize) -> Self {
        Self {
            metadata: ReportMetadata::new(processing_time_ms, corpus_size, None),
            content: ReportContent::Similar(similar),
        }
    }

    /// Short label used for file names.
    pub fn subject(&self) -> &str {
        match &self.content {
            ReportContent::Recommendation(result) => &result.specialization,
            ReportContent::Similar(similar) => &similar.target,
        }
    }
}
