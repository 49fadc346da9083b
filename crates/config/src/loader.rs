use crate::{ConfigError, FieldsConfig, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file names to search for, in order of preference
const CONFIG_FILES: &[&str] = &[
    ".graphql-fields.yml",
    ".graphql-fields.yaml",
    ".graphql-fields.json",
];

/// Find a config file by walking up the directory tree from the given start directory.
/// Returns the path to the config file if found.
#[tracing::instrument(fields(start = %start_dir.display()))]
pub fn find_config(start_dir: &Path) -> Result<Option<PathBuf>> {
    let mut current_dir = start_dir.to_path_buf();
    let mut checked_dirs = 0;

    loop {
        tracing::trace!(dir = %current_dir.display(), "Checking directory for config files");
        for file_name in CONFIG_FILES {
            let config_path = current_dir.join(file_name);
            if config_path.is_file() {
                tracing::info!(path = %config_path.display(), checked_dirs, "Found config file");
                return Ok(Some(config_path));
            }
        }

        checked_dirs += 1;
        if !current_dir.pop() {
            tracing::debug!(checked_dirs, "No config file found");
            break;
        }
    }

    Ok(None)
}

/// Load a config from the specified path.
/// Automatically detects the format based on file extension.
#[tracing::instrument(fields(path = %path.display()))]
pub fn load_config(path: &Path) -> Result<FieldsConfig> {
    tracing::debug!("Reading config file");
    let contents = fs::read_to_string(path)?;
    let config = load_config_from_str(&contents, path)?;
    tracing::info!(
        excluded_fields = config.excluded_fields.len(),
        variables = config.variables.len(),
        "Config loaded successfully"
    );
    Ok(config)
}

/// Load a config from a string.
/// The path is used for error messages and format detection.
#[tracing::instrument(skip(contents), fields(path = %path.display(), size = contents.len()))]
pub fn load_config_from_str(contents: &str, path: &Path) -> Result<FieldsConfig> {
    let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");

    tracing::debug!(extension, "Detecting config format");

    let config = match extension {
        "yml" | "yaml" => {
            tracing::trace!("Parsing as YAML");
            parse_yaml(contents, path)?
        }
        "json" => {
            tracing::trace!("Parsing as JSON");
            parse_json(contents, path)?
        }
        _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    };

    tracing::debug!("Validating config");
    validate_config(&config, path)?;

    Ok(config)
}

/// Parse YAML configuration
fn parse_yaml(contents: &str, path: &Path) -> Result<FieldsConfig> {
    // An empty file is a valid, empty config
    if contents.trim().is_empty() {
        return Ok(FieldsConfig::default());
    }
    serde_saphyr::from_str(contents).map_err(|e| ConfigError::Invalid {
        path: path.to_path_buf(),
        message: format!("YAML parse error: {e}"),
    })
}

/// Parse JSON configuration
fn parse_json(contents: &str, path: &Path) -> Result<FieldsConfig> {
    serde_json::from_str(contents).map_err(|e| ConfigError::Invalid {
        path: path.to_path_buf(),
        message: format!("JSON parse error: {e}"),
    })
}

/// Validate the loaded configuration
fn validate_config(config: &FieldsConfig, path: &Path) -> Result<()> {
    for field in &config.excluded_fields {
        if field.trim().is_empty() {
            return Err(ConfigError::Invalid {
                path: path.to_path_buf(),
                message: "excludedFields contains an empty field name".to_string(),
            });
        }
    }

    tracing::debug!("Config validation passed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_yaml() {
        let yaml = r"
excludedFields:
  - __typename
  - age
variables:
  withPets: true
  first: 10
";

        let mut file = NamedTempFile::with_suffix(".yml").unwrap();
        file.write_all(yaml.as_bytes()).unwrap();
        file.flush().unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.excluded_fields, vec!["__typename", "age"]);
        assert_eq!(config.variables["withPets"], serde_json::json!(true));
        assert_eq!(config.variables["first"], serde_json::json!(10));
    }

    #[test]
    fn test_load_json() {
        let json = r#"{"excludedFields": ["__typename"]}"#;

        let mut file = NamedTempFile::with_suffix(".json").unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file.flush().unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.excluded_fields, vec!["__typename"]);
        assert!(config.variables.is_empty());
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let config = load_config_from_str("\n", Path::new(".graphql-fields.yml")).unwrap();
        assert_eq!(config, FieldsConfig::default());
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let result = load_config_from_str(r#"{"exclude": ["a"]}"#, Path::new("config.json"));
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_validation_empty_field_name() {
        let result = load_config_from_str(r#"{"excludedFields": ["name", " "]}"#, Path::new("config.json"));

        let Err(ConfigError::Invalid { message, .. }) = result else {
            panic!("expected validation error");
        };
        assert!(message.contains("empty field name"));
    }

    #[test]
    fn test_unsupported_format() {
        let result = load_config_from_str("excludedFields = []", Path::new("config.toml"));
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_find_config_in_current_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join(".graphql-fields.yml");
        fs::write(&config_path, "excludedFields: []").unwrap();

        let found = find_config(temp_dir.path()).unwrap();
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_in_parent_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join(".graphql-fields.json");
        fs::write(&config_path, "{}").unwrap();

        let sub_dir = temp_dir.path().join("queries").join("users");
        fs::create_dir_all(&sub_dir).unwrap();

        let found = find_config(&sub_dir).unwrap();
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_not_found() {
        let temp_dir = tempfile::tempdir().unwrap();
        let found = find_config(temp_dir.path()).unwrap();
        assert_eq!(found, None);
    }

    #[test]
    fn test_config_file_priority() {
        let temp_dir = tempfile::tempdir().unwrap();

        fs::write(temp_dir.path().join(".graphql-fields.json"), "{}").unwrap();
        fs::write(temp_dir.path().join(".graphql-fields.yml"), "excludedFields: []").unwrap();

        let found = find_config(temp_dir.path()).unwrap().unwrap();

        assert_eq!(found.file_name().unwrap(), ".graphql-fields.yml");
    }
}
