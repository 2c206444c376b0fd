use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::errors::Result;
#[cfg(not(feature = "http"))]
use crate::errors::StageError;

/// Asset reader trait: async byte access below an asset root.
pub trait AssetReader: Send + Sync {
    fn read_bytes(&self, uri: &str) -> impl Future<Output = Result<Vec<u8>>> + Send;
}

/// Local filesystem reader rooted at a directory.
pub struct FileAssetReader {
    root_path: PathBuf,
}

impl FileAssetReader {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let root_path = if path.is_file() {
            path.parent().unwrap_or(Path::new(".")).to_path_buf()
        } else {
            path.to_path_buf()
        };
        Self { root_path }
    }

    #[inline]
    #[must_use]
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }
}

impl AssetReader for FileAssetReader {
    async fn read_bytes(&self, uri: &str) -> Result<Vec<u8>> {
        let path = self.root_path.join(uri);
        let data = tokio::fs::read(&path).await?;
        Ok(data)
    }
}

/// HTTP(S) reader rooted at a URL.
#[cfg(feature = "http")]
pub struct HttpAssetReader {
    root_url: url::Url,
}

#[cfg(feature = "http")]
impl HttpAssetReader {
    pub fn new(url_str: &str) -> Result<Self> {
        let parsed = url::Url::parse(url_str)?;
        // Normalize to a directory URL so join() keeps the last segment.
        let root_url = if parsed.path().ends_with('/') {
            parsed
        } else {
            let mut u = parsed.clone();
            if let Ok(mut segments) = u.path_segments_mut() {
                segments.pop();
                segments.push("");
            }
            u
        };
        Ok(Self { root_url })
    }

    #[inline]
    #[must_use]
    pub fn root_url(&self) -> &url::Url {
        &self.root_url
    }
}

#[cfg(feature = "http")]
impl AssetReader for HttpAssetReader {
    async fn read_bytes(&self, uri: &str) -> Result<Vec<u8>> {
        use crate::errors::StageError;

        let url = self.root_url.join(uri)?;
        let response = ehttp::fetch_async(ehttp::Request::get(url.as_str()))
            .await
            .map_err(StageError::HttpError)?;
        if !response.ok {
            return Err(StageError::HttpResponseError {
                status: response.status,
            });
        }
        Ok(response.bytes)
    }
}

/// Reader variant enum, avoiding trait-object dispatch on the hot read path.
#[derive(Clone)]
pub enum AssetReaderVariant {
    File(Arc<FileAssetReader>),
    #[cfg(feature = "http")]
    Http(Arc<HttpAssetReader>),
}

impl AssetReaderVariant {
    /// Creates the appropriate reader for a path or URL root.
    pub fn from_source(source: &str) -> Result<Self> {
        if source.starts_with("http://") || source.starts_with("https://") {
            #[cfg(feature = "http")]
            {
                Ok(Self::Http(Arc::new(HttpAssetReader::new(source)?)))
            }
            #[cfg(not(feature = "http"))]
            {
                Err(StageError::FeatureNotEnabled(
                    "HTTP asset roots require the `http` feature".to_string(),
                ))
            }
        } else {
            Ok(Self::File(Arc::new(FileAssetReader::new(source))))
        }
    }

    /// Reads the bytes of `uri` relative to the configured root.
    pub async fn read_bytes(&self, uri: &str) -> Result<Vec<u8>> {
        match self {
            Self::File(r) => r.read_bytes(uri).await,
            #[cfg(feature = "http")]
            Self::Http(r) => r.read_bytes(uri).await,
        }
    }
}
