use std::collections::HashSet;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::paths::catalog_file_path;

/// One entry of the static video list the walkthrough is built from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SourceVideo {
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub thumb: String,
    pub minutes: u32,
    pub seconds: u32,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse catalog {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("catalog contains no videos")]
    Empty,
    #[error("duplicate video url in catalog: {0}")]
    DuplicateUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    File(PathBuf),
    BuiltIn,
}

impl CatalogSource {
    pub fn describe(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::BuiltIn => "built-in catalog".to_string(),
        }
    }
}

pub fn parse_catalog(raw: &str) -> serde_json::Result<Vec<SourceVideo>> {
    serde_json::from_str(raw)
}

pub fn load_catalog(path: &Path) -> Result<Vec<SourceVideo>, CatalogError> {
    let raw = fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let videos = parse_catalog(&raw).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    validate_catalog(&videos)?;
    Ok(videos)
}

pub fn validate_catalog(videos: &[SourceVideo]) -> Result<(), CatalogError> {
    if videos.is_empty() {
        return Err(CatalogError::Empty);
    }
    let mut seen = HashSet::new();
    for video in videos {
        if !seen.insert(video.url.as_str()) {
            return Err(CatalogError::DuplicateUrl(video.url.clone()));
        }
    }
    Ok(())
}

/// Picks the catalog in order: explicit flag, `WALKTHROUGH_CATALOG`, the
/// config-dir file when it exists, then the built-in list.
pub fn resolve_catalog(flag: Option<&Path>) -> Result<(Vec<SourceVideo>, CatalogSource)> {
    let explicit = flag
        .map(Path::to_path_buf)
        .or_else(|| resolve_catalog_path_from_env(env::var_os("WALKTHROUGH_CATALOG")));
    if let Some(path) = explicit {
        let videos = load_catalog(&path)?;
        info!(path = %path.display(), count = videos.len(), "loaded catalog");
        return Ok((videos, CatalogSource::File(path)));
    }

    if let Ok(path) = catalog_file_path()
        && path.is_file()
    {
        let videos = load_catalog(&path)?;
        info!(path = %path.display(), count = videos.len(), "loaded catalog from config dir");
        return Ok((videos, CatalogSource::File(path)));
    }

    debug!("no catalog file found, using built-in catalog");
    Ok((builtin_catalog(), CatalogSource::BuiltIn))
}

pub fn resolve_catalog_path_from_env(env_value: Option<OsString>) -> Option<PathBuf> {
    match env_value {
        Some(value) if !value.is_empty() => Some(PathBuf::from(value)),
        _ => None,
    }
}

pub fn builtin_catalog() -> Vec<SourceVideo> {
    [
        ("01-welcome", "Welcome to the Walkthrough", 1, 5),
        ("02-dashboard", "Finding Your Way Around the Dashboard", 2, 40),
        ("03-first-video", "Recording Your First Video", 3, 12),
        ("04-campaigns", "Building a Campaign", 4, 30),
        ("05-recipients", "Adding Recipients", 1, 48),
        ("06-sending", "Sending and Scheduling", 2, 15),
        ("07-metrics", "Reading Your Metrics", 3, 0),
    ]
    .into_iter()
    .map(|(slug, title, minutes, seconds)| SourceVideo {
        url: format!("https://videos.example.com/walkthrough/{slug}.mp4"),
        title: title.to_string(),
        thumb: format!("https://videos.example.com/walkthrough/{slug}.jpg"),
        minutes,
        seconds,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_catalog_defaults_missing_thumb() {
        let raw = r#"[{"url":"a.mp4","title":"A","minutes":1,"seconds":30}]"#;
        let videos = parse_catalog(raw).expect("catalog should parse");
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].thumb, "");
        assert_eq!(videos[0].minutes, 1);
        assert_eq!(videos[0].seconds, 30);
    }

    #[test]
    fn validate_catalog_rejects_empty_and_duplicates() {
        assert!(matches!(validate_catalog(&[]), Err(CatalogError::Empty)));

        let mut videos = builtin_catalog();
        videos.push(videos[0].clone());
        match validate_catalog(&videos) {
            Err(CatalogError::DuplicateUrl(url)) => assert_eq!(url, videos[0].url),
            other => panic!("expected duplicate url error, got {other:?}"),
        }
    }

    #[test]
    fn builtin_catalog_is_valid() {
        assert!(validate_catalog(&builtin_catalog()).is_ok());
    }

    #[test]
    fn load_catalog_reports_missing_file_and_bad_json() {
        let missing = env::temp_dir().join("walkthrough-test-missing-catalog.json");
        let _ = fs::remove_file(&missing);
        assert!(matches!(
            load_catalog(&missing),
            Err(CatalogError::Read { .. })
        ));

        let bad = env::temp_dir().join(format!("walkthrough-test-bad-{}.json", std::process::id()));
        fs::write(&bad, "{ not json").expect("temp file should be writable");
        let result = load_catalog(&bad);
        let _ = fs::remove_file(&bad);
        assert!(matches!(result, Err(CatalogError::Parse { .. })));
    }

    #[test]
    fn resolve_catalog_path_from_env_ignores_empty_value() {
        assert_eq!(resolve_catalog_path_from_env(None), None);
        assert_eq!(resolve_catalog_path_from_env(Some(OsString::new())), None);
        assert_eq!(
            resolve_catalog_path_from_env(Some(OsString::from("/tmp/videos.json"))),
            Some(PathBuf::from("/tmp/videos.json"))
        );
    }
}
