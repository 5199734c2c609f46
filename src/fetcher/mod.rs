mod client;

use std::fs;
use std::path::PathBuf;

use md5::{Digest, Md5};
use url::Url;

pub use client::{HttpClient, HttpResponse, UreqClient};

#[cfg(test)]
use client::MockClient;

/// Directory the fetcher saves into when none is given, relative to the
/// working directory.
pub const DEFAULT_DIRECTORY: &str = "Fetched_Images";

/// What a single fetch did, when it did not fail.
#[derive(Debug, PartialEq)]
pub enum FetchOutcome {
    Saved { filename: String, path: PathBuf },
    AlreadyExists { filename: String },
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum FetchError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("server returned HTTP status {0}")]
    Status(u16),

    #[error("{0}")]
    Connection(String),

    #[error("{0}")]
    Other(String),
}

impl FetchError {
    /// True for the transport/HTTP tier: malformed URLs, connection
    /// failures, timeouts and non-2xx statuses all report as connection
    /// errors. Everything else (filesystem and the like) is `Other`.
    pub fn is_connection(&self) -> bool {
        !matches!(self, FetchError::Other(_))
    }
}

/// Derives the on-disk name for a URL: the last path segment when there is
/// one, otherwise the hex MD5 of the raw URL string with a `.jpg` suffix.
/// Pure function of the input string.
pub fn derive_filename(url: &str) -> Result<String, url::ParseError> {
    let parsed = Url::parse(url)?;

    let segment = parsed
        .path_segments()
        .and_then(|segments| segments.last())
        .unwrap_or("");

    if segment.is_empty() {
        let digest = Md5::digest(url.as_bytes());
        Ok(format!("{}.jpg", hex::encode(digest)))
    } else {
        Ok(segment.to_string())
    }
}

/// Turns URLs into files under a destination directory. Each `fetch` call is
/// an independent transaction; the filesystem is the only state.
pub struct Fetcher<C: HttpClient> {
    client: C,
    directory: PathBuf,
}

impl Fetcher<UreqClient> {
    pub fn new() -> Self {
        Fetcher::with_client(DEFAULT_DIRECTORY, UreqClient::new())
    }
}

impl Default for Fetcher<UreqClient> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Fetcher<C>
where
    C: HttpClient,
{
    pub fn with_client(directory: impl Into<PathBuf>, client: C) -> Self {
        Fetcher {
            client,
            directory: directory.into(),
        }
    }

    /// Fetches one URL and persists the body under the destination
    /// directory. An existing file at the derived path is left untouched
    /// and reported as `AlreadyExists`. Never panics; every failure comes
    /// back as a `FetchError`.
    pub fn fetch(&self, url: &str) -> Result<FetchOutcome, FetchError> {
        fs::create_dir_all(&self.directory).map_err(|err| {
            FetchError::Other(format!(
                "cannot create directory {}: {err}",
                self.directory.display()
            ))
        })?;

        let filename =
            derive_filename(url).map_err(|err| FetchError::InvalidUrl(err.to_string()))?;

        let body = match self.client.get(url) {
            HttpResponse::Body(body) => body,
            HttpResponse::Status(code) => return Err(FetchError::Status(code)),
            HttpResponse::Transport(reason) => return Err(FetchError::Connection(reason)),
        };

        let path = self.directory.join(&filename);

        if path.exists() {
            return Ok(FetchOutcome::AlreadyExists { filename });
        }

        fs::write(&path, &body)
            .map_err(|err| FetchError::Other(format!("cannot write {}: {err}", path.display())))?;

        Ok(FetchOutcome::Saved { filename, path })
    }
}
