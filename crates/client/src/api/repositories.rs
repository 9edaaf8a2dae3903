//! Repository endpoints.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use gitea_api_models::Repository;
use serde::Deserialize;
use tracing::warn;
use urlencoding::encode;

use crate::api::{encode_path, fetch_bytes, fetch_json};
use crate::errors::Error;
use crate::pagination::Pagination;
use crate::requester::Requester;

/// Archive formats offered by the archive download route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
    Zip,
    TarGz,
}

impl ArchiveFormat {
    /// The suffix appended to the archive route.
    pub fn suffix(&self) -> &'static str {
        match self {
            ArchiveFormat::Zip => ".zip",
            ArchiveFormat::TarGz => ".tar.gz",
        }
    }
}

/// Envelope returned by the repository search route.
#[derive(Debug, Deserialize)]
struct SearchResults {
    #[serde(default)]
    ok: bool,
    #[serde(default)]
    data: Vec<Repository>,
}

/// The contents route response, reduced to the field we read.
#[derive(Debug, Deserialize)]
struct ContentsEntry {
    #[serde(default)]
    content: Option<String>,
}

/// Repository lookups, search, and content downloads.
#[derive(Debug, Clone)]
pub struct Repositories {
    requester: Requester,
    pagination: Pagination,
}

impl Repositories {
    pub(crate) fn new(requester: Requester) -> Self {
        Repositories {
            requester,
            pagination: Pagination::default(),
        }
    }

    /// Replaces the pagination policy used by [`all`](Repositories::all).
    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = pagination;
        self
    }

    async fn search_page(
        &self,
        keyword: &str,
        page: u32,
        limit: u32,
    ) -> Result<Vec<Repository>, Error> {
        let params = [
            ("q", keyword.to_string()),
            ("page", page.to_string()),
            ("limit", limit.to_string()),
        ];
        let results: SearchResults =
            fetch_json(&self.requester, "repos/search", &params).await?;
        if !results.ok {
            warn!(page, "repository search reported ok=false");
            return Ok(Vec::new());
        }
        Ok(results.data)
    }

    /// Searches repositories, returning one page of matches.
    ///
    /// An empty keyword matches every repository the token can see.
    pub async fn search(&self, keyword: &str, page: u32, limit: u32) -> Vec<Repository> {
        match self.search_page(keyword, page, limit).await {
            Ok(repositories) => repositories,
            Err(e) => {
                warn!(error = %e, page, "repository search failed");
                Vec::new()
            }
        }
    }

    /// Fetches every repository visible to the token, page by page.
    pub async fn all(&self) -> Vec<Repository> {
        match self
            .pagination
            .fetch_all(|page, limit| self.search_page("", page, limit))
            .await
        {
            Ok(repositories) => repositories,
            Err(e) => {
                warn!(error = %e, "repository aggregation failed");
                Vec::new()
            }
        }
    }

    /// Looks up a single repository by owner and name.
    pub async fn get_by_name(&self, owner: &str, repo: &str) -> Option<Repository> {
        let route = format!("repos/{}/{}", encode(owner), encode(repo));
        match fetch_json(&self.requester, &route, &[]).await {
            Ok(repository) => Some(repository),
            Err(e) => {
                warn!(error = %e, owner, repo, "repository lookup failed");
                None
            }
        }
    }

    /// Looks up a single repository by its numeric id.
    pub async fn get_by_id(&self, id: i64) -> Option<Repository> {
        let route = format!("repositories/{id}");
        match fetch_json(&self.requester, &route, &[]).await {
            Ok(repository) => Some(repository),
            Err(e) => {
                warn!(error = %e, id, "repository lookup failed");
                None
            }
        }
    }

    /// Downloads a file through the contents route and decodes its
    /// base64 payload to text.
    ///
    /// An empty `reference` asks for the default branch.
    pub async fn file_contents(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        reference: &str,
    ) -> Option<String> {
        let route = format!(
            "repos/{}/{}/contents/{}",
            encode(owner),
            encode(repo),
            encode_path(path)
        );
        let mut params = Vec::new();
        if !reference.is_empty() {
            params.push(("ref", reference.to_string()));
        }

        let entry: ContentsEntry = match fetch_json(&self.requester, &route, &params).await {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, owner, repo, path, "file contents lookup failed");
                return None;
            }
        };

        // Gitea wraps the base64 payload across lines.
        let encoded: String = entry
            .content
            .unwrap_or_default()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        match STANDARD.decode(encoded.as_bytes()) {
            Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
            Err(e) => {
                warn!(error = %e, owner, repo, path, "file contents are not valid base64");
                None
            }
        }
    }

    /// Downloads a file's raw bytes.
    pub async fn raw_file(&self, owner: &str, repo: &str, path: &str) -> Option<Vec<u8>> {
        let route = format!(
            "repos/{}/{}/raw/{}",
            encode(owner),
            encode(repo),
            encode_path(path)
        );
        match fetch_bytes(&self.requester, &route, &[]).await {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                warn!(error = %e, owner, repo, path, "raw file download failed");
                None
            }
        }
    }

    /// Downloads an archive of the repository at the given reference.
    pub async fn archive(
        &self,
        owner: &str,
        repo: &str,
        reference: &str,
        format: ArchiveFormat,
    ) -> Option<Vec<u8>> {
        let route = format!(
            "repos/{}/{}/archive/{}{}",
            encode(owner),
            encode(repo),
            encode(reference),
            format.suffix()
        );
        match fetch_bytes(&self.requester, &route, &[]).await {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                warn!(error = %e, owner, repo, reference, "archive download failed");
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "repositories_tests.rs"]
mod tests;
