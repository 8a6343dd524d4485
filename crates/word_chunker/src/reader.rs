use std::fs;
use std::path::{Path, PathBuf};

use harvest_logging::harvest_debug;

use crate::ChunkError;

const STRUCTURED_EXTENSION: &str = "docx";
const MISSING_DECODER_HINT: &str = "rebuild with --features docx to read word-processor files";

/// Full text of one input file, held in memory for the duration of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub source: PathBuf,
    pub text: String,
}

/// Whether the structured word-processor decoder was compiled in.
pub const fn structured_format_support() -> bool {
    cfg!(feature = "docx")
}

/// True when `path` names a structured word-processor file (extension match ignores case).
pub fn is_structured_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(STRUCTURED_EXTENSION))
}

/// Read `path` into a [`Document`].
///
/// `.docx` inputs are decoded paragraph by paragraph and joined with `\n`;
/// everything else is read verbatim as UTF-8.
pub fn read_document(path: &Path) -> Result<Document, ChunkError> {
    let text = if is_structured_path(path) {
        read_structured(path)?
    } else {
        fs::read_to_string(path)?
    };
    harvest_debug!("Read {} bytes of text from {:?}", text.len(), path);
    Ok(Document {
        source: path.to_path_buf(),
        text,
    })
}

#[cfg(feature = "docx")]
fn read_structured(path: &Path) -> Result<String, ChunkError> {
    let bytes = fs::read(path)?;
    structured::paragraphs_text(&bytes).map_err(|message| ChunkError::Decode {
        path: path.to_path_buf(),
        message,
    })
}

#[cfg(not(feature = "docx"))]
fn read_structured(_path: &Path) -> Result<String, ChunkError> {
    Err(unsupported_format())
}

fn unsupported_format() -> ChunkError {
    ChunkError::UnsupportedFormat {
        extension: STRUCTURED_EXTENSION.to_string(),
        hint: MISSING_DECODER_HINT.to_string(),
    }
}

/// Fail fast when `path` needs a decoder this build does not have.
pub fn ensure_capability(path: &Path) -> Result<(), ChunkError> {
    check_decoder(path, structured_format_support())
}

fn check_decoder(path: &Path, decoder_available: bool) -> Result<(), ChunkError> {
    if is_structured_path(path) && !decoder_available {
        return Err(unsupported_format());
    }
    Ok(())
}

#[cfg(feature = "docx")]
mod structured {
    use docx_rs::{DocumentChild, Paragraph, ParagraphChild, RunChild};

    /// Body-level paragraphs in document order, one per line.
    pub(super) fn paragraphs_text(bytes: &[u8]) -> Result<String, String> {
        let docx = docx_rs::read_docx(bytes).map_err(|err| err.to_string())?;
        let paragraphs: Vec<String> = docx
            .document
            .children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(paragraph) => Some(paragraph_text(paragraph)),
                _ => None,
            })
            .collect();
        Ok(paragraphs.join("\n"))
    }

    fn paragraph_text(paragraph: &Paragraph) -> String {
        let mut text = String::new();
        push_children(&paragraph.children, &mut text);
        text
    }

    fn push_children(children: &[ParagraphChild], out: &mut String) {
        for child in children {
            match child {
                ParagraphChild::Run(run) => {
                    for run_child in &run.children {
                        match run_child {
                            RunChild::Text(text) => out.push_str(&text.text),
                            RunChild::Tab(_) => out.push('\t'),
                            RunChild::Break(_) => out.push('\n'),
                            _ => {}
                        }
                    }
                }
                ParagraphChild::Hyperlink(link) => push_children(&link.children, out),
                _ => {}
            }
        }
    }
}
