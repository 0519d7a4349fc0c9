//! Async catalog loading from JSON or TOML files

use crate::error::{AdvisorError, Result};
use crate::input::catalog::{CourseFile, InMemoryCatalog, ProfileFile};
use crate::input::file_detector::DataFormat;
use crate::input::records::{Course, ReferenceProfile};
use log::{info, warn};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::Path;

/// JSON files may hold either the wrapped collection or a bare array.
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonCollection<W, T> {
    Wrapped(W),
    Bare(Vec<T>),
}

pub struct CatalogLoader;

impl CatalogLoader {
    /// Build a catalog from the given files; a `None` path uses the built-in collection.
    pub async fn load(profiles_path: Option<&Path>, courses_path: Option<&Path>) -> Result<InMemoryCatalog> {
        let profiles = match profiles_path {
            Some(path) => Self::load_profiles(path).await?,
            None => InMemoryCatalog::builtin_profiles()?,
        };
        let courses = match courses_path {
            Some(path) => Self::load_courses(path).await?,
            None => InMemoryCatalog::builtin_courses()?,
        };

        if courses.is_empty() {
            warn!("Course catalog is empty; no recommendations can be made");
        }
        info!("Catalog ready: {} profiles, {} courses", profiles.len(), courses.len());
        Ok(InMemoryCatalog::new(profiles, courses))
    }

    pub async fn load_profiles(path: &Path) -> Result<Vec<ReferenceProfile>> {
        let profiles = Self::read_collection::<ProfileFile, ReferenceProfile>(path, |f| f.profiles).await?;
        for profile in &profiles {
            profile
                .validate()
                .map_err(|e| AdvisorError::CatalogLoad(format!("{}: {}", path.display(), e)))?;
        }
        info!("Loaded {} reference profiles from {}", profiles.len(), path.display());
        Ok(profiles)
    }

    pub async fn load_courses(path: &Path) -> Result<Vec<Course>> {
        let courses = Self::read_collection::<CourseFile, Course>(path, |f| f.courses).await?;
        for course in &courses {
            course
                .validate()
                .map_err(|e| AdvisorError::CatalogLoad(format!("{}: {}", path.display(), e)))?;
        }
        info!("Loaded {} courses from {}", courses.len(), path.display());
        Ok(courses)
    }

    async fn read_collection<W, T>(path: &Path, unwrap: fn(W) -> Vec<T>) -> Result<Vec<T>>
    where
        W: DeserializeOwned,
        T: DeserializeOwned,
    {
        if !path.exists() {
            return Err(AdvisorError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        match DataFormat::from_path(path) {
            DataFormat::Json => {
                let content = tokio::fs::read_to_string(path).await?;
                let parsed: JsonCollection<W, T> =
                    serde_json::from_str(&content).map_err(|e| parse_error(path, e))?;
                Ok(match parsed {
                    JsonCollection::Wrapped(wrapper) => unwrap(wrapper),
                    JsonCollection::Bare(items) => items,
                })
            }
            DataFormat::Toml => {
                let content = tokio::fs::read_to_string(path).await?;
                let wrapper: W = toml::from_str(&content).map_err(|e| parse_error(path, e))?;
                Ok(unwrap(wrapper))
            }
            DataFormat::Unknown => Err(AdvisorError::UnsupportedFormat(format!(
                "Unsupported catalog file type for: {}",
                path.display()
            ))),
        }
    }
}

fn parse_error(path: &Path, err: impl std::fmt::Display) -> AdvisorError {
    AdvisorError::CatalogLoad(format!("Failed to parse {}: {}", path.display(), err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_bare_json_array() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("profiles.json");
        std::fs::write(
            &path,
            r#"[{"name": "Ada", "skills": ["Rust", "Go"], "specialization": "Backend",
                 "experience_years": 4, "company": "Initech"}]"#,
        )
        .unwrap();

        let profiles = CatalogLoader::load_profiles(&path).await.unwrap();
        assert_eq!(profiles.len(), 1);
        assert!(profiles[0].skills.contains("rust"));
    }

    #[tokio::test]
    async fn test_missing_file() {
        let result = CatalogLoader::load_courses(Path::new("/nonexistent/courses.json")).await;
        assert!(matches!(result, Err(AdvisorError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_defaults_to_builtin() {
        let catalog = CatalogLoader::load(None, None).await.unwrap();
        assert_eq!(catalog.courses().len(), 28);
    }
}
