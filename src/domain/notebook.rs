use serde::{Deserialize, Serialize};

pub const NBFORMAT: u32 = 4;
pub const NBFORMAT_MINOR: u32 = 4;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CellMetadata {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cell_type", rename_all = "lowercase")]
pub enum Cell {
    Markdown {
        metadata: CellMetadata,
        source: Vec<String>,
    },
    Code {
        execution_count: Option<u32>,
        metadata: CellMetadata,
        outputs: Vec<serde_json::Value>,
        source: Vec<String>,
    },
}

impl Cell {
    pub fn markdown(text: &str) -> Self {
        Self::Markdown {
            metadata: CellMetadata::default(),
            source: split_source(text),
        }
    }

    /// A code cell that has never been run.
    pub fn code(text: &str) -> Self {
        Self::Code {
            execution_count: None,
            metadata: CellMetadata::default(),
            outputs: Vec::new(),
            source: split_source(text),
        }
    }

    pub fn source(&self) -> &[String] {
        match self {
            Self::Markdown { source, .. } | Self::Code { source, .. } => source,
        }
    }

    pub fn is_code(&self) -> bool {
        matches!(self, Self::Code { .. })
    }
}

/// Splits text into notebook source lines, each keeping its trailing `\n`.
///
/// Blank lines become their own `"\n"` entries. Readers join `source` before
/// use, so this is equivalent to storing fewer, longer strings.
fn split_source(text: &str) -> Vec<String> {
    text.split_inclusive('\n').map(str::to_owned).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KernelSpec {
    pub display_name: String,
    pub language: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeMirrorMode {
    pub name: String,
    pub version: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageInfo {
    pub codemirror_mode: CodeMirrorMode,
    pub file_extension: String,
    pub mimetype: String,
    pub name: String,
    pub nbconvert_exporter: String,
    pub pygments_lexer: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotebookMetadata {
    pub kernelspec: KernelSpec,
    pub language_info: LanguageInfo,
}

impl NotebookMetadata {
    pub fn python3() -> Self {
        Self {
            kernelspec: KernelSpec {
                display_name: "Python 3".to_owned(),
                language: "python".to_owned(),
                name: "python3".to_owned(),
            },
            language_info: LanguageInfo {
                codemirror_mode: CodeMirrorMode {
                    name: "ipython".to_owned(),
                    version: 3,
                },
                file_extension: ".py".to_owned(),
                mimetype: "text/x-python".to_owned(),
                name: "python".to_owned(),
                nbconvert_exporter: "python".to_owned(),
                pygments_lexer: "ipython3".to_owned(),
                version: "3.11.0".to_owned(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notebook {
    pub cells: Vec<Cell>,
    pub metadata: NotebookMetadata,
    pub nbformat: u32,
    pub nbformat_minor: u32,
}

impl Notebook {
    pub fn new(cells: Vec<Cell>, metadata: NotebookMetadata) -> Self {
        Self {
            cells,
            metadata,
            nbformat: NBFORMAT,
            nbformat_minor: NBFORMAT_MINOR,
        }
    }
}
