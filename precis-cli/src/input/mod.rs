//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use anyhow::Result;

/// A named piece of text to summarize
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputText {
    /// Where the text came from (file path, "<text>" or "<stdin>")
    pub label: String,
    /// Raw text
    pub text: String,
}

/// Collect inputs from inline text, file patterns, or stdin when neither is given
pub fn collect_inputs(text: Option<&str>, patterns: &[String]) -> Result<Vec<InputText>> {
    let mut inputs = Vec::new();

    if let Some(text) = text {
        inputs.push(InputText {
            label: "<text>".to_string(),
            text: text.to_string(),
        });
    }

    if !patterns.is_empty() {
        for path in resolve_patterns(patterns)? {
            log::debug!("reading {}", path.display());
            inputs.push(InputText {
                label: path.display().to_string(),
                text: FileReader::read_text(&path)?,
            });
        }
    }

    if inputs.is_empty() {
        inputs.push(InputText {
            label: "<stdin>".to_string(),
            text: FileReader::read_stdin()?,
        });
    }

    Ok(inputs)
}
