//! Clock tool — reports the current date and time.

use async_trait::async_trait;
use chrono::Utc;
use reagent_core::error::ToolError;
use reagent_core::tool::{Tool, ToolOutput};

pub struct ClockTool;

#[async_trait]
impl Tool for ClockTool {
    fn name(&self) -> &str {
        "clock"
    }

    fn description(&self) -> &str {
        "Get the current UTC date and time. An optional strftime format string may be supplied."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "format": {
                    "type": "string",
                    "description": "Optional strftime format (default '%Y-%m-%d %H:%M:%S')"
                }
            }
        })
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<ToolOutput, ToolError> {
        let format = arguments["format"].as_str().unwrap_or("%Y-%m-%d %H:%M:%S");
        let now = Utc::now();

        // Bad specifiers only surface when the formatter renders.
        let rendered = format_safe(&now, format)?;

        Ok(ToolOutput {
            success: true,
            output: format!("Current date and time: {}", rendered),
            data: Some(serde_json::json!({"iso8601": now.to_rfc3339()})),
        })
    }
}

fn format_safe(now: &chrono::DateTime<Utc>, format: &str) -> Result<String, ToolError> {
    use std::fmt::Write;

    let mut out = String::new();
    write!(out, "{}", now.format(format))
        .map_err(|_| ToolError::InvalidArguments(format!("Invalid time format: '{}'", format)))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn default_format() {
        let tool = ClockTool;
        let result = tool.execute(serde_json::json!({})).await.unwrap();

        assert!(result.success);
        assert!(result.output.starts_with("Current date and time: "));
        // "YYYY-MM-DD HH:MM:SS" after the prefix
        let stamp = result.output.trim_start_matches("Current date and time: ");
        assert_eq!(stamp.len(), 19);
    }

    #[tokio::test]
    async fn custom_format() {
        let tool = ClockTool;
        let result = tool
            .execute(serde_json::json!({"format": "%Y"}))
            .await
            .unwrap();

        let stamp = result.output.trim_start_matches("Current date and time: ");
        assert_eq!(stamp.len(), 4);
        assert!(stamp.chars().all(|c| c.is_ascii_digit()));
    }

    #[tokio::test]
    async fn invalid_format_rejected() {
        let tool = ClockTool;
        let result = tool.execute(serde_json::json!({"format": "%Q%Q%"})).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn data_carries_iso_timestamp() {
        let tool = ClockTool;
        let result = tool.execute(serde_json::json!({})).await.unwrap();
        let data = result.data.unwrap();
        assert!(data["iso8601"].as_str().unwrap().contains('T'));
    }

    #[test]
    fn tool_definition() {
        let tool = ClockTool;
        let def = tool.to_definition();
        assert_eq!(def.name, "clock");
    }
}
