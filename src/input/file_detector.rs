//! Catalog file format detection

use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DataFormat {
    Json,
    Toml,
    Unknown,
}

impl DataFormat {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "json" => DataFormat::Json,
            "toml" => DataFormat::Toml,
            _ => DataFormat::Unknown,
        }
    }

    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(DataFormat::Unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_format() {
        assert_eq!(DataFormat::from_path(Path::new("courses.JSON")), DataFormat::Json);
        assert_eq!(DataFormat::from_path(Path::new("data/profiles.toml")), DataFormat::Toml);
        assert_eq!(DataFormat::from_path(Path::new("courses.csv")), DataFormat::Unknown);
        assert_eq!(DataFormat::from_path(Path::new("courses")), DataFormat::Unknown);
    }
}
