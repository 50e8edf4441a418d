use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Output format for projected dependency descriptions
///
/// Shared by the CLI, the config file and the formatter factory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Wire JSON, the format clients consume
    #[default]
    Json,
    /// Human-readable summary table
    #[serde(alias = "md")]
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(format!(
                "Invalid format: '{}'. Expected 'json' or 'markdown'",
                s
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => f.write_str("json"),
            OutputFormat::Markdown => f.write_str("markdown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_accepts_aliases_in_any_case() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("markdown".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!("Md".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let error = "xml".parse::<OutputFormat>().unwrap_err();
        assert!(error.contains("'xml'"));
        assert!(error.contains("json"));
        assert!(error.contains("markdown"));
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for format in [OutputFormat::Json, OutputFormat::Markdown] {
            assert_eq!(format.to_string().parse::<OutputFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_default_is_json() {
        assert_eq!(OutputFormat::default(), OutputFormat::Json);
    }

    #[test]
    fn test_deserialize_from_yaml() {
        let format: OutputFormat = serde_yaml_ng::from_str("md").unwrap();
        assert_eq!(format, OutputFormat::Markdown);
        assert!(serde_yaml_ng::from_str::<OutputFormat>("xml").is_err());
    }
}
