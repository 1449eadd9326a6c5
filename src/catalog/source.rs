use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use super::Catalog;

/// Catalog compiled into the binary.
pub const BUNDLED_CATALOG: &str = include_str!("../../assets/emojis.json");

const USER_AGENT: &str = concat!("favmoji/", env!("CARGO_PKG_VERSION"));

/// Errors that can occur while obtaining the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog from {origin}: {source}")]
    ParseError {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to start catalog fetch: {0}")]
    Runtime(#[source] std::io::Error),

    #[error("Failed to fetch catalog from '{url}': {source}")]
    FetchError {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Where the catalog comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Bundled,
    File(PathBuf),
    Remote { url: String, timeout: Duration },
}

/// Load a local catalog. Remote sources go through [`fetch_remote`].
pub fn load_catalog(source: &CatalogSource) -> Result<Catalog, CatalogError> {
    match source {
        CatalogSource::Bundled => {
            Catalog::from_json(BUNDLED_CATALOG).map_err(|e| CatalogError::ParseError {
                origin: "bundled resource".to_string(),
                source: e,
            })
        }
        CatalogSource::File(path) => {
            let content = fs::read_to_string(path).map_err(|e| CatalogError::ReadError {
                path: path.clone(),
                source: e,
            })?;
            Catalog::from_json(&content).map_err(|e| CatalogError::ParseError {
                origin: format!("'{}'", path.display()),
                source: e,
            })
        }
        CatalogSource::Remote { url, timeout } => {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .map_err(CatalogError::Runtime)?;
            runtime.block_on(fetch_remote(url, *timeout))
        }
    }
}

/// One-shot fetch of a `{name: imageRef}` JSON object. No retry.
pub async fn fetch_remote(url: &str, timeout: Duration) -> Result<Catalog, CatalogError> {
    let fetch_error = |source: reqwest::Error| CatalogError::FetchError {
        url: url.to_string(),
        source,
    };

    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
        .map_err(fetch_error)?;

    tracing::info!("Fetching catalog from {}", url);
    let entries: BTreeMap<String, String> = client
        .get(url)
        .send()
        .await
        .map_err(fetch_error)?
        .error_for_status()
        .map_err(fetch_error)?
        .json()
        .await
        .map_err(fetch_error)?;
    tracing::info!(entries = entries.len(), "Catalog fetched");

    Ok(Catalog::new(entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn bundled_catalog_has_placeholder_images() {
        let catalog = load_catalog(&CatalogSource::Bundled).unwrap();
        assert!(catalog.contains("keyboard"));
        assert!(catalog.contains("crying_cat_face"));
        assert!(catalog.contains("cow"));
    }

    #[test]
    fn file_catalog_loads_object() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("emojis.json");
        fs::write(&path, r#"{"cat": "cat.png", "dog": "dog.png"}"#).unwrap();

        let catalog = load_catalog(&CatalogSource::File(path)).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.image_ref("dog"), Some("dog.png"));
    }

    #[test]
    fn missing_file_is_read_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.json");
        let err = load_catalog(&CatalogSource::File(path)).unwrap_err();
        assert!(matches!(err, CatalogError::ReadError { .. }));
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("emojis.json");
        fs::write(&path, "not json").unwrap();
        let err = load_catalog(&CatalogSource::File(path)).unwrap_err();
        assert!(matches!(err, CatalogError::ParseError { .. }));
    }

    #[test]
    fn unreachable_remote_is_fetch_error() {
        let source = CatalogSource::Remote {
            url: "http://127.0.0.1:9/emojis".to_string(),
            timeout: Duration::from_secs(2),
        };
        let err = load_catalog(&source).unwrap_err();
        assert!(matches!(err, CatalogError::FetchError { .. }));
    }
}
