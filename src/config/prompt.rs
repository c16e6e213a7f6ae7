use log::info;
use std::error::Error;
use std::fmt;
use std::fs;
use std::sync::Arc;

#[derive(Debug)]
pub enum PromptError {
    EmptyPrompt(String),
    IoError(String, std::io::Error),
}

impl fmt::Display for PromptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromptError::EmptyPrompt(path) => {
                write!(f, "Prompt file '{}' is empty", path)
            }
            PromptError::IoError(path, e) => {
                write!(f, "Failed to read prompt file '{}': {}", path, e)
            }
        }
    }
}

impl Error for PromptError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PromptError::IoError(_, e) => Some(e),
            _ => None,
        }
    }
}

/// Reads the system prompt file once at startup. The trimmed content becomes
/// the fixed system message prepended to every conversation.
pub fn load_system_prompt(path: &str) -> Result<Arc<str>, PromptError> {
    let file_content =
        fs::read_to_string(path).map_err(|e| PromptError::IoError(path.to_string(), e))?;
    let trimmed = file_content.trim();
    if trimmed.is_empty() {
        return Err(PromptError::EmptyPrompt(path.to_string()));
    }
    info!("Loaded system prompt from '{}' ({} chars)", path, trimmed.len());
    Ok(Arc::from(trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("chat_relay_{}_{}", std::process::id(), name));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_and_trims_prompt() {
        let path = temp_file("prompt_ok.txt", "\n  You are a helpful guide.  \n\n");
        let prompt = load_system_prompt(path.to_str().unwrap()).unwrap();
        assert_eq!(&*prompt, "You are a helpful guide.");
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn empty_file_is_rejected() {
        let path = temp_file("prompt_empty.txt", "   \n\t\n");
        let err = load_system_prompt(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, PromptError::EmptyPrompt(_)));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_system_prompt("/nonexistent/prompt.txt").unwrap_err();
        assert!(matches!(err, PromptError::IoError(_, _)));
        assert!(err.to_string().contains("/nonexistent/prompt.txt"));
    }
}
