//! File write tool — workspace-scoped file creation with path validation.
//!
//! All writes are confined to the workspace directory given at construction.
//! Absolute paths and `..` components are rejected before touching the
//! filesystem.

use async_trait::async_trait;
use reagent_core::error::ToolError;
use reagent_core::tool::{Tool, ToolOutput};
use std::path::{Component, Path, PathBuf};

pub struct FileWriteTool {
    /// Root directory all writes are confined to.
    workspace: PathBuf,
}

impl FileWriteTool {
    /// Create a file write tool scoped to the given workspace directory.
    pub fn new(workspace: impl Into<PathBuf>) -> Self {
        Self {
            workspace: workspace.into(),
        }
    }

    /// Resolve a relative path inside the workspace, rejecting escapes.
    fn resolve(&self, path: &str) -> Result<PathBuf, ToolError> {
        let candidate = Path::new(path);
        if candidate.is_absolute() {
            return Err(ToolError::InvalidArguments(format!(
                "Path must be relative to the workspace: '{}'",
                path
            )));
        }
        for component in candidate.components() {
            if matches!(component, Component::ParentDir) {
                return Err(ToolError::InvalidArguments(format!(
                    "Path must not contain '..': '{}'",
                    path
                )));
            }
        }
        Ok(self.workspace.join(candidate))
    }
}

#[async_trait]
impl Tool for FileWriteTool {
    fn name(&self) -> &str {
        "file_write"
    }

    fn description(&self) -> &str {
        "Write content to a file inside the workspace. Creates the file if it doesn't exist, overwrites if it does."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "Workspace-relative file path to write to"
                },
                "content": {
                    "type": "string",
                    "description": "The content to write"
                }
            },
            "required": ["path", "content"]
        })
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<ToolOutput, ToolError> {
        let path = arguments["path"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'path' argument".into()))?;

        let content = arguments["content"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'content' argument".into()))?;

        let target = self.resolve(path)?;

        // Ensure parent directory exists
        if let Some(parent) = target.parent()
            && let Err(e) = tokio::fs::create_dir_all(parent).await
        {
            return Ok(ToolOutput::failed(format!(
                "Failed to create directory: {e}"
            )));
        }

        match tokio::fs::write(&target, content).await {
            Ok(()) => {
                tracing::debug!(path, bytes = content.len(), "file written");
                Ok(ToolOutput::ok(format!(
                    "Successfully wrote {} bytes to {}",
                    content.len(),
                    path
                )))
            }
            Err(e) => Ok(ToolOutput::failed(format!("Failed to write file: {e}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_definition() {
        let tool = FileWriteTool::new("/tmp/workspace");
        assert_eq!(tool.name(), "file_write");
        let schema = tool.parameters_schema();
        assert_eq!(schema["required"], serde_json::json!(["path", "content"]));
    }

    #[tokio::test]
    async fn write_and_verify() {
        let dir = tempfile::tempdir().unwrap();
        let tool = FileWriteTool::new(dir.path());

        let result = tool
            .execute(serde_json::json!({
                "path": "output.txt",
                "content": "Hello from test!"
            }))
            .await
            .unwrap();

        assert!(result.success);
        assert!(result.output.contains("16 bytes"));

        let content = std::fs::read_to_string(dir.path().join("output.txt")).unwrap();
        assert_eq!(content, "Hello from test!");
    }

    #[tokio::test]
    async fn write_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let tool = FileWriteTool::new(dir.path());

        let result = tool
            .execute(serde_json::json!({
                "path": "nested/dir/file.txt",
                "content": "nested content"
            }))
            .await
            .unwrap();

        assert!(result.success);
        let content =
            std::fs::read_to_string(dir.path().join("nested").join("dir").join("file.txt"))
                .unwrap();
        assert_eq!(content, "nested content");
    }

    #[tokio::test]
    async fn overwrite_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("overwrite.txt"), "old content").unwrap();
        let tool = FileWriteTool::new(dir.path());

        let result = tool
            .execute(serde_json::json!({
                "path": "overwrite.txt",
                "content": "new content"
            }))
            .await
            .unwrap();

        assert!(result.success);
        let content = std::fs::read_to_string(dir.path().join("overwrite.txt")).unwrap();
        assert_eq!(content, "new content");
    }

    #[tokio::test]
    async fn absolute_path_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let tool = FileWriteTool::new(dir.path());

        let result = tool
            .execute(serde_json::json!({
                "path": "/etc/crontab",
                "content": "malicious"
            }))
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn path_traversal_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let tool = FileWriteTool::new(dir.path());

        let result = tool
            .execute(serde_json::json!({
                "path": "../outside.txt",
                "content": "malicious"
            }))
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn missing_arguments_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let tool = FileWriteTool::new(dir.path());

        assert!(
            tool.execute(serde_json::json!({"content": "hello"}))
                .await
                .is_err()
        );
        assert!(
            tool.execute(serde_json::json!({"path": "a.txt"}))
                .await
                .is_err()
        );
    }
}
