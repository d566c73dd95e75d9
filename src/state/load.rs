/// Loading the site document
///
/// The whole page is hydrated from one JSON file, read once at startup
/// off the UI thread. There is no retry and no partial rendering: any
/// failure here is logged and surfaced as a single blocking notice.
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::data::SiteData;

/// Why the site document could not be loaded.
///
/// Carries plain strings (not the source errors) so it can ride inside
/// a cloneable iced `Message`.
#[derive(Debug, Clone, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {message}")]
    Read { path: String, message: String },
    #[error("{path} is not a valid site document: {message}")]
    Parse { path: String, message: String },
}

/// Read and parse the site document.
pub async fn load_site_data(path: PathBuf) -> Result<SiteData, LoadError> {
    let bytes = tokio::fs::read(&path).await.map_err(|e| LoadError::Read {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    parse_site_data(&bytes, &path)
}

/// Parse a site document already in memory.
pub fn parse_site_data(bytes: &[u8], path: &Path) -> Result<SiteData, LoadError> {
    serde_json::from_slice(bytes).map_err(|e| LoadError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_document() {
        let site =
            parse_site_data(br#"{"hero":{"name":"Ada"}}"#, Path::new("site.json")).unwrap();
        assert_eq!(site.hero.name, "Ada");
    }

    #[test]
    fn test_parse_failure_names_the_file() {
        let err = parse_site_data(b"{not json", Path::new("data/site.json")).unwrap_err();
        match &err {
            LoadError::Parse { path, .. } => assert_eq!(path, "data/site.json"),
            other => panic!("expected Parse error, got {other:?}"),
        }
        assert!(err.to_string().contains("data/site.json"));
    }
}
