use anyhow::Context;
use derive_builder::Builder;
use reqwest::StatusCode;
use std::{
    fs,
    path::{Path, PathBuf},
};
use url::Url;

use crate::utils::ensure_parent_dir;

#[cfg(test)]
pub(crate) mod test_server;

pub const SHAKESPEARE_URL: &'static str =
    "https://raw.githubusercontent.com/karpathy/char-rnn/master/data/tinyshakespeare/input.txt";
pub const SHAKESPEARE_PATH: &'static str = "data/shakespeare.txt";

#[derive(Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Body was written to `path`
    Saved {
        path: PathBuf,
        bytes: usize,
        chars: usize,
    },
    /// Upstream answered with something other than `200 OK`; nothing was written
    Rejected { status: StatusCode },
}

#[derive(Builder, Debug)]
#[builder(setter(into))]
pub struct FetcherArgs {
    #[builder(default = "Url::parse(SHAKESPEARE_URL).expect(\"static url is valid\")")]
    url: Url,
    #[builder(default = "PathBuf::from(SHAKESPEARE_PATH)")]
    destination: PathBuf,
}

pub struct Fetcher {
    args: FetcherArgs,
}

impl Fetcher {
    pub fn new(args: FetcherArgs) -> Self {
        Self { args }
    }

    pub fn url(&self) -> &Url {
        &self.args.url
    }

    pub async fn run(&self) -> anyhow::Result<FetchOutcome> {
        fetch_and_save(&self.args.url, &self.args.destination).await
    }
}

/// Downloads `url` and writes the body to `destination` if the server answers `200 OK`.
///
/// The parent directory is created when missing. Any other status leaves the
/// filesystem untouched and is returned as [`FetchOutcome::Rejected`]; only
/// transport and filesystem failures are errors.
pub async fn fetch_and_save(url: &Url, destination: &Path) -> anyhow::Result<FetchOutcome> {
    ensure_parent_dir(destination)?;

    tracing::debug!("GET {url}");
    let response = reqwest::get(url.clone())
        .await
        .with_context(|| format!("failed to request {url}"))?;

    let status = response.status();
    tracing::debug!("{url} answered with {status}");
    if status != StatusCode::OK {
        return Ok(FetchOutcome::Rejected { status });
    }

    let text = response
        .text()
        .await
        .context("failed to read response body")?;

    fs::write(destination, text.as_bytes())
        .with_context(|| format!("failed to write {:?}", destination))?;

    Ok(FetchOutcome::Saved {
        path: destination.to_owned(),
        bytes: text.len(),
        chars: text.chars().count(),
    })
}
