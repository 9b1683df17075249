// Hook payload extraction.
//
// When no path argument is given, the target path comes from a JSON
// object on standard input, the shape editor post-edit hooks emit:
//
//   {"tool_input": {"file_path": "/path/to/file"}}
//
// Anything malformed or missing degrades to an empty path, which the
// formatter treats as a silent no-op.

use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Default, Deserialize)]
pub struct HookPayload {
    #[serde(default)]
    pub tool_input: ToolInput,
}

#[derive(Debug, Default, Deserialize)]
pub struct ToolInput {
    #[serde(default)]
    pub file_path: String,
}

impl HookPayload {
    /// Parse a hook payload; malformed input degrades to an empty path.
    pub fn from_json(json: &str) -> Self {
        serde_json::from_str(json).unwrap_or_default()
    }

    /// Read and parse the payload from standard input.
    pub fn from_stdin() -> Self {
        let mut buffer = String::new();
        if std::io::stdin().read_to_string(&mut buffer).is_err() {
            return Self::default();
        }
        Self::from_json(&buffer)
    }

    pub fn file_path(&self) -> &str {
        &self.tool_input.file_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_file_path() {
        let payload = HookPayload::from_json(r#"{"tool_input":{"file_path":"/tmp/notes.md"}}"#);
        assert_eq!(payload.file_path(), "/tmp/notes.md");
    }

    #[test]
    fn test_ignores_unknown_fields() {
        let payload = HookPayload::from_json(
            r#"{"session_id":"abc","tool_input":{"file_path":"a.txt","old_string":"x"}}"#,
        );
        assert_eq!(payload.file_path(), "a.txt");
    }

    #[test]
    fn test_missing_tool_input_yields_empty_path() {
        let payload = HookPayload::from_json(r#"{"session_id":"abc"}"#);
        assert_eq!(payload.file_path(), "");
    }

    #[test]
    fn test_malformed_json_yields_empty_path() {
        let payload = HookPayload::from_json("not json at all");
        assert_eq!(payload.file_path(), "");
    }
}
