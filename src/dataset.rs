use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use crate::element::ElementRecord;

/// Message shown in the results area when the dataset could not be loaded.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load periodic table data.";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("fetch {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("HTTP error! status: {status} ({url})")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("parse element data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read-only handle to the element collection. Cloning shares the records.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Arc<[ElementRecord]>,
}

impl Default for Dataset {
    fn default() -> Self {
        Self::from_records(Vec::new())
    }
}

impl Dataset {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<ElementRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self, LoadError> {
        let records: Vec<ElementRecord> = serde_json::from_slice(bytes)?;
        Ok(Self::from_records(records))
    }

    /// Loads from a local path or an `http(s)://` URL.
    pub async fn load(source: &str) -> Result<Self, LoadError> {
        let bytes = if is_remote(source) {
            fetch(source).await?
        } else {
            tokio::fs::read(source).await.map_err(|source_err| LoadError::Io {
                path: PathBuf::from(source),
                source: source_err,
            })?
        };
        Self::from_json(&bytes)
    }

    /// Never fails: a broken source yields an empty dataset plus the message
    /// to show in place of results.
    pub async fn load_or_empty(source: &str) -> (Self, Option<String>) {
        match Self::load(source).await {
            Ok(dataset) => {
                log::info!(
                    "Elements data loaded successfully ({} records from {source}).",
                    dataset.len()
                );
                (dataset, None)
            }
            Err(e) => {
                log::error!("Could not load elements data: {e}");
                (Self::empty(), Some(LOAD_FAILED_MESSAGE.to_string()))
            }
        }
    }

    pub fn records(&self) -> &[ElementRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ElementRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find(&self, symbol: &str) -> Option<&ElementRecord> {
        let symbol = symbol.trim();
        self.records
            .iter()
            .find(|r| r.symbol.eq_ignore_ascii_case(symbol))
    }
}

fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

async fn fetch(url: &str) -> Result<Vec<u8>, LoadError> {
    let response = reqwest::get(url).await.map_err(|e| LoadError::Http {
        url: url.to_string(),
        source: e,
    })?;
    if !response.status().is_success() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }
    let bytes = response.bytes().await.map_err(|e| LoadError::Http {
        url: url.to_string(),
        source: e,
    })?;
    Ok(bytes.to_vec())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::io::Write;

    /// H, He, Li, Ne, Fe, Na: enough to exercise prefixes, categories and blocks.
    pub(crate) fn sample() -> Dataset {
        Dataset::from_json(
            br#"[
            {"symbol": "H", "name": "Hydrogen", "atomicNumber": 1, "category": "nonmetal"},
            {"symbol": "He", "name": "Helium", "atomicNumber": 2, "category": "noble gas"},
            {"symbol": "Li", "name": "Lithium", "atomicNumber": 3, "category": "alkali metal"},
            {"symbol": "Ne", "name": "Neon", "atomicNumber": 10, "category": "noble gas"},
            {"symbol": "Na", "name": "Sodium", "atomicNumber": 11, "category": "alkali metal"},
            {"symbol": "Fe", "name": "Iron", "atomicNumber": 26, "category": "transition metal"}
        ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let data = sample();
        assert_eq!(data.find("fe").map(|r| r.name.as_str()), Some("Iron"));
        assert_eq!(data.find(" HE ").map(|r| r.name.as_str()), Some("Helium"));
        assert!(data.find("Xx").is_none());
    }

    #[test]
    fn test_clone_shares_records() {
        let data = sample();
        let other = data.clone();
        assert!(std::ptr::eq(data.records(), other.records()));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            Dataset::from_json(b"{not json"),
            Err(LoadError::Parse(_))
        ));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"[{"symbol": "O", "name": "Oxygen"}]"#).unwrap();
        let data = Dataset::load(file.path().to_str().unwrap()).await.unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data.records()[0].symbol, "O");
    }

    #[tokio::test]
    async fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("elements.json");
        let err = Dataset::load(path.to_str().unwrap()).await.unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[tokio::test]
    async fn test_load_or_empty_absorbs_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let (data, message) = Dataset::load_or_empty(path.to_str().unwrap()).await;
        assert!(data.is_empty());
        assert_eq!(message.as_deref(), Some(LOAD_FAILED_MESSAGE));
    }

    async fn serve(router: axum::Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn test_load_from_url() {
        let router = axum::Router::new().route(
            "/elements.json",
            axum::routing::get(|| async { r#"[{"symbol": "Fe", "name": "Iron"}]"# }),
        );
        let base = serve(router).await;

        let data = Dataset::load(&format!("{base}/elements.json")).await.unwrap();
        assert_eq!(data.find("fe").map(|r| r.name.as_str()), Some("Iron"));

        let err = Dataset::load(&format!("{base}/missing.json")).await.unwrap_err();
        assert!(matches!(
            err,
            LoadError::Status { status, .. } if status == reqwest::StatusCode::NOT_FOUND
        ));

        let (data, message) = Dataset::load_or_empty(&format!("{base}/missing.json")).await;
        assert!(data.is_empty());
        assert_eq!(message.as_deref(), Some(LOAD_FAILED_MESSAGE));
    }

    #[tokio::test]
    async fn test_unreachable_url() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let err = Dataset::load(&format!("http://{addr}/elements.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::Http { .. }));
    }

    #[test]
    fn test_bundled_data() {
        let data = Dataset::from_json(include_bytes!("../data/elements.json")).unwrap();
        let mut symbols: Vec<&str> = data.iter().map(|r| r.symbol.as_str()).collect();
        symbols.sort_unstable();
        symbols.dedup();
        assert_eq!(symbols.len(), data.len());
        for record in data.iter() {
            assert!(
                crate::layout::position_of(&record.symbol).is_some(),
                "{} has no cell",
                record.symbol
            );
        }
        assert_eq!(
            crate::match_query("noble gases", &data),
            crate::MatchResult::CategoryHighlight {
                category: "noble gas",
                symbols: ["He", "Ne", "Ar", "Xe", "Rn", "Og"].map(String::from).to_vec(),
            }
        );
    }
}
