use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Settings for exporting the OpenAPI document
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Destination file; `None` writes to stdout
    pub output_path: Option<PathBuf>,
    pub pretty: bool,
}

impl ExportConfig {
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup; an empty `OPENAPI_OUTPUT` means stdout
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(ExportConfig {
            output_path: lookup("OPENAPI_OUTPUT")
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
            pretty: parse_bool(lookup("OPENAPI_PRETTY"), true)
                .context("OPENAPI_PRETTY must be true or false")?,
        })
    }
}

fn parse_bool(value: Option<String>, default: bool) -> Result<bool> {
    match value {
        Some(raw) => raw
            .trim()
            .parse::<bool>()
            .with_context(|| format!("invalid boolean: {:?}", raw)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ExportConfig::from_lookup(lookup_from(&[])).unwrap();
        assert!(config.output_path.is_none());
        assert!(config.pretty);
    }

    #[test]
    fn test_empty_output_means_stdout() {
        let config = ExportConfig::from_lookup(lookup_from(&[("OPENAPI_OUTPUT", "")])).unwrap();
        assert!(config.output_path.is_none());
    }

    #[test]
    fn test_output_path_and_compact() {
        let config = ExportConfig::from_lookup(lookup_from(&[
            ("OPENAPI_OUTPUT", "docs/openapi.json"),
            ("OPENAPI_PRETTY", "false"),
        ]))
        .unwrap();
        assert_eq!(config.output_path, Some(PathBuf::from("docs/openapi.json")));
        assert!(!config.pretty);
    }

    #[test]
    fn test_invalid_pretty_is_an_error() {
        let err = ExportConfig::from_lookup(lookup_from(&[("OPENAPI_PRETTY", "yes")])).unwrap_err();
        assert!(err.to_string().contains("OPENAPI_PRETTY"));
    }

    #[test]
    fn test_from_env_reads_process_environment() {
        // Only test in the crate touching these variables
        env::set_var("OPENAPI_OUTPUT", "");
        env::set_var("OPENAPI_PRETTY", "false");
        let config = ExportConfig::from_env().unwrap();
        env::remove_var("OPENAPI_OUTPUT");
        env::remove_var("OPENAPI_PRETTY");

        assert!(config.output_path.is_none());
        assert!(!config.pretty);
    }

    #[test]
    fn test_parse_bool_default() {
        assert!(parse_bool(None, true).unwrap());
        assert!(!parse_bool(None, false).unwrap());
    }

    #[test]
    fn test_parse_bool_values() {
        assert!(parse_bool(Some("true".to_string()), false).unwrap());
        assert!(!parse_bool(Some(" false ".to_string()), true).unwrap());
    }

    #[test]
    fn test_parse_bool_invalid() {
        let err = parse_bool(Some("yes".to_string()), true).unwrap_err();
        assert!(err.to_string().contains("yes"));
    }
}
