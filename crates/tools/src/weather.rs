//! Weather tool — fixed-table mock weather data.
//!
//! In production this would call a real weather API (OpenWeatherMap, etc.).
//! The stub covers a handful of cities so the run loop can be tested
//! end-to-end without network access; unknown cities are a soft failure
//! the reasoner can react to.

use async_trait::async_trait;
use reagent_core::error::ToolError;
use reagent_core::tool::{Tool, ToolOutput};
use serde::Serialize;

pub struct WeatherTool;

#[derive(Debug, Clone, Serialize)]
struct WeatherData {
    city: &'static str,
    temperature_f: i32,
    condition: &'static str,
    humidity_pct: u32,
}

const MOCK_DATA: &[WeatherData] = &[
    WeatherData {
        city: "new york",
        temperature_f: 72,
        condition: "Sunny",
        humidity_pct: 45,
    },
    WeatherData {
        city: "london",
        temperature_f: 63,
        condition: "Cloudy",
        humidity_pct: 70,
    },
    WeatherData {
        city: "tokyo",
        temperature_f: 75,
        condition: "Clear",
        humidity_pct: 55,
    },
    WeatherData {
        city: "paris",
        temperature_f: 68,
        condition: "Partly Cloudy",
        humidity_pct: 60,
    },
];

#[async_trait]
impl Tool for WeatherTool {
    fn name(&self) -> &str {
        "weather"
    }

    fn description(&self) -> &str {
        "Get current weather conditions for a city. Returns temperature, condition, and humidity."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "city": {
                    "type": "string",
                    "description": "The city name to look up weather for"
                }
            },
            "required": ["city"]
        })
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<ToolOutput, ToolError> {
        let city = arguments["city"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'city' argument".into()))?;

        let key = city.to_lowercase();
        let key = key.trim();

        match MOCK_DATA.iter().find(|w| w.city == key) {
            Some(weather) => Ok(ToolOutput {
                success: true,
                output: format!(
                    "Weather in {}: {}, {}°F, Humidity: {}%",
                    title_case(city),
                    weather.condition,
                    weather.temperature_f,
                    weather.humidity_pct
                ),
                data: Some(serde_json::to_value(weather).map_err(|e| {
                    ToolError::ExecutionFailed {
                        tool_name: "weather".into(),
                        reason: e.to_string(),
                    }
                })?),
            }),
            None => Ok(ToolOutput::failed(format!(
                "Weather data not available for {}",
                city
            ))),
        }
    }
}

/// Capitalize each whitespace-separated word.
fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
