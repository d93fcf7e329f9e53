use anyhow::Context;
use derive_builder::Builder;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{domain::notebook::Notebook, utils::ensure_parent_dir};

pub mod tutorial;

pub use tutorial::build_notebook;

pub const NOTEBOOK_PATH: &'static str = "notebooks/tokenization_and_embeddings.ipynb";
const INDENT: &[u8] = b" ";

#[derive(Builder, Debug)]
#[builder(setter(into))]
pub struct NotebookWriterArgs {
    #[builder(default = "PathBuf::from(NOTEBOOK_PATH)")]
    destination: PathBuf,
}

pub struct NotebookWriter {
    args: NotebookWriterArgs,
}

impl NotebookWriter {
    pub fn new(args: NotebookWriterArgs) -> Self {
        Self { args }
    }

    pub fn destination(&self) -> &Path {
        &self.args.destination
    }

    /// Builds the tutorial notebook and writes it, returning the number of cells written.
    pub fn run(&self) -> anyhow::Result<usize> {
        let notebook = build_notebook();
        write_json(&notebook, &self.args.destination)?;
        Ok(notebook.cells.len())
    }
}

/// Serializes with a one-space indent. Field order follows the struct definitions,
/// so the output is stable across runs.
pub fn to_json(notebook: &Notebook) -> anyhow::Result<String> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    notebook
        .serialize(&mut serializer)
        .context("failed to serialize notebook")?;

    String::from_utf8(buf).context("serialized notebook is not valid utf-8")
}

pub fn write_json(notebook: &Notebook, destination: &Path) -> anyhow::Result<()> {
    let serialized = to_json(notebook)?;

    ensure_parent_dir(destination)?;
    tracing::debug!("writing {} bytes to {:?}", serialized.len(), destination);
    fs::write(destination, serialized)
        .with_context(|| format!("failed to write {:?}", destination))
}
