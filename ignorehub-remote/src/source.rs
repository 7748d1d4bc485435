//! Fetching the template index and template bodies from the upstream
//! repository.

use ignorehub_core::{TemplateRecord, TemplateWithSource, classify_paths};
use serde::Deserialize;

use crate::error::{Error, Result};

const DEFAULT_REPO: &str = "github/gitignore";
const DEFAULT_BRANCH: &str = "main";
const API_BASE: &str = "https://api.github.com";
const RAW_BASE: &str = "https://raw.githubusercontent.com";
const USER_AGENT: &str = concat!("ignorehub/", env!("CARGO_PKG_VERSION"));

/// One upstream template repository.
pub struct RemoteSource {
    client: reqwest::blocking::Client,
    api_base: String,
    raw_base: String,
    repo: String,
    branch: String,
}

/// One template whose body could not be fetched.
#[derive(Debug)]
pub struct FetchFailure {
    pub id: String,
    pub error: Box<Error>,
}

#[derive(Debug, Deserialize)]
struct TreeResponse {
    tree: Vec<TreeEntry>,
}

#[derive(Debug, Deserialize)]
struct TreeEntry {
    path: String,
    #[serde(rename = "type")]
    kind: String,
}

impl Default for RemoteSource {
    fn default() -> Self {
        Self::new(DEFAULT_REPO, DEFAULT_BRANCH)
    }
}

impl RemoteSource {
    pub fn new(repo: impl Into<String>, branch: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            api_base: API_BASE.to_string(),
            raw_base: RAW_BASE.to_string(),
            repo: repo.into(),
            branch: branch.into(),
        }
    }

    /// Override the upstream endpoints, for tests against a local server.
    pub fn with_bases(mut self, api_base: impl Into<String>, raw_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self.raw_base = raw_base.into();
        self
    }

    fn index_url(&self) -> String {
        format!(
            "{}/repos/{}/git/trees/{}?recursive=1",
            self.api_base, self.repo, self.branch
        )
    }

    fn body_url(&self, record: &TemplateRecord) -> String {
        format!(
            "{}/{}/{}/{}",
            self.raw_base, self.repo, self.branch, record.path
        )
    }

    fn get(&self, url: &str) -> Result<reqwest::blocking::Response> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .map_err(|e| {
                Box::new(Error::Request {
                    url: url.to_string(),
                    source: e,
                })
            })?;

        if !response.status().is_success() {
            return Err(Box::new(Error::Status {
                url: url.to_string(),
                status: response.status(),
            }));
        }

        Ok(response)
    }

    /// Enumerate the upstream tree and classify it into an ordered index.
    pub fn fetch_index(&self) -> Result<Vec<TemplateRecord>> {
        let url = self.index_url();
        let tree: TreeResponse = self.get(&url)?.json().map_err(|e| {
            Box::new(Error::Decode {
                url: url.clone(),
                source: e,
            })
        })?;

        let paths = tree
            .tree
            .into_iter()
            .filter(|entry| entry.kind == "blob")
            .map(|entry| entry.path);
        Ok(classify_paths(paths))
    }

    /// Fetch the raw body of one template.
    pub fn fetch_body(&self, record: &TemplateRecord) -> Result<String> {
        let url = self.body_url(record);
        self.get(&url)?.text().map_err(|e| {
            Box::new(Error::Decode {
                url: url.clone(),
                source: e,
            })
        })
    }

    /// Fetch the bodies of all selected records.
    ///
    /// Failures never abort the batch; they come back as a named-failure
    /// list alongside whatever was fetched.
    pub fn fetch_bodies(
        &self,
        records: &[TemplateRecord],
    ) -> (Vec<TemplateWithSource>, Vec<FetchFailure>) {
        let mut fetched = Vec::with_capacity(records.len());
        let mut failures = Vec::new();

        for record in records {
            match self.fetch_body(record) {
                Ok(source) => fetched.push(TemplateWithSource {
                    meta: record.clone(),
                    source,
                }),
                Err(error) => failures.push(FetchFailure {
                    id: record.id.clone(),
                    error,
                }),
            }
        }

        (fetched, failures)
    }
}
