//! Output formatting utilities

use serde::Serialize;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Table,
        }
    }
}

/// Pretty-printed JSON for any serializable result
pub fn to_json<T: Serialize + ?Sized>(data: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// Section banner used by listing commands
pub fn banner(title: &str) -> String {
    let rule = "=".repeat(30);
    format!("{rule}\n{title}\n{rule}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::from("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::from("table"), OutputFormat::Table);
        assert_eq!(OutputFormat::from("anything"), OutputFormat::Table);
    }

    #[test]
    fn test_banner() {
        assert_eq!(
            banner("Persons"),
            "==============================\nPersons\n=============================="
        );
    }

    #[test]
    fn test_to_json() {
        assert_eq!(to_json(&vec!["I1", "I2"]).unwrap(), "[\n  \"I1\",\n  \"I2\"\n]");
    }
}
