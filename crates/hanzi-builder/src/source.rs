use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use crate::error::BuildError;
use crate::staging_path;

/// Corpus file made available on local disk
#[derive(Debug, Clone)]
pub struct AcquiredCorpus {
    pub path: PathBuf,
    /// Created by the source and safe to delete after the build
    pub temporary: bool,
}

/// Where the raw CC-CEDICT corpus comes from
#[async_trait]
pub trait CorpusSource: Send + Sync {
    async fn fetch(&self) -> Result<AcquiredCorpus, BuildError>;

    fn describe(&self) -> String;
}

/// Download over HTTP into `dest`.
///
/// The body is streamed to `<dest>.part` and renamed over `dest` once complete,
/// so a file already at `dest` is only replaced by a finished download.
pub struct HttpCorpus {
    client: reqwest::Client,
    url: String,
    dest: PathBuf,
}

impl HttpCorpus {
    pub fn new(url: impl Into<String>, dest: impl Into<PathBuf>) -> Self {
        Self::with_client(reqwest::Client::new(), url, dest)
    }

    pub fn with_client(
        client: reqwest::Client,
        url: impl Into<String>,
        dest: impl Into<PathBuf>,
    ) -> Self {
        Self {
            client,
            url: url.into(),
            dest: dest.into(),
        }
    }

    async fn download(&self) -> Result<u64, BuildError> {
        let response = self.client.get(&self.url).send().await?;
        if !response.status().is_success() {
            return Err(BuildError::Status(response.status()));
        }

        let partial = staging_path(&self.dest, "part");
        match stream_to(response, &partial).await {
            Ok(written) => {
                tokio::fs::rename(&partial, &self.dest).await?;
                Ok(written)
            }
            Err(e) => {
                if let Err(cleanup) = tokio::fs::remove_file(&partial).await {
                    tracing::warn!("Could not remove partial download: {}", cleanup);
                }
                Err(e)
            }
        }
    }
}

async fn stream_to(mut response: reqwest::Response, path: &Path) -> Result<u64, BuildError> {
    let mut file = tokio::fs::File::create(path).await?;
    let mut written = 0u64;
    while let Some(chunk) = response.chunk().await? {
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }
    file.flush().await?;

    Ok(written)
}

#[async_trait]
impl CorpusSource for HttpCorpus {
    async fn fetch(&self) -> Result<AcquiredCorpus, BuildError> {
        tracing::info!("Downloading CC-CEDICT dictionary from {}...", self.url);

        let bytes = self.download().await?;
        tracing::info!("Downloaded {} bytes to {}", bytes, self.dest.display());
        Ok(AcquiredCorpus {
            path: self.dest.clone(),
            temporary: true,
        })
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// A corpus file that already exists, plain or gzip
pub struct LocalCorpus {
    path: PathBuf,
}

impl LocalCorpus {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl CorpusSource for LocalCorpus {
    async fn fetch(&self) -> Result<AcquiredCorpus, BuildError> {
        if !tokio::fs::try_exists(&self.path).await? {
            return Err(BuildError::NotFound(self.path.display().to_string()));
        }

        Ok(AcquiredCorpus {
            path: self.path.clone(),
            temporary: false,
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
