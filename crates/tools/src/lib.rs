//! Built-in tool implementations for Reagent.
//!
//! Tools give a run the ability to act: evaluate math expressions,
//! search a snippet base, read the clock, look up weather, and write
//! files inside a scoped workspace.

pub mod calculator;
pub mod clock;
pub mod file_write;
pub mod search;
pub mod weather;

use reagent_core::error::ToolError;
use reagent_core::tool::ToolRegistry;
use std::path::Path;

pub use calculator::CalculatorTool;
pub use clock::ClockTool;
pub use file_write::FileWriteTool;
pub use search::SearchTool;
pub use weather::WeatherTool;

/// Create a registry with all built-in tools.
///
/// `workspace` scopes the file_write tool; nothing is written outside it.
pub fn default_registry(workspace: &Path) -> Result<ToolRegistry, ToolError> {
    let mut registry = ToolRegistry::new();
    registry.register(Box::new(CalculatorTool))?;
    registry.register(Box::new(SearchTool))?;
    registry.register(Box::new(ClockTool))?;
    registry.register(Box::new(WeatherTool))?;
    registry.register(Box::new(FileWriteTool::new(workspace)))?;
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_has_all_tools() {
        let registry = default_registry(Path::new("/tmp/reagent-test")).unwrap();
        assert_eq!(registry.len(), 5);
        for name in ["calculator", "search", "clock", "weather", "file_write"] {
            assert!(registry.lookup(name).is_ok(), "missing tool: {name}");
        }
    }
}
