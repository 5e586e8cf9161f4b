use std::collections::HashMap;
use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::{RunletError, RunletResult};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Cmd {
    Single(String),
    Multiple(Vec<String>),
}

#[derive(Deserialize, Serialize, JsonSchema, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CommandConfig {
    pub description: Option<String>,
    pub cmd: Option<Cmd>,
    pub depends: Option<Vec<String>>,
    pub env: Option<HashMap<String, String>>,
}

#[derive(Deserialize, Serialize, JsonSchema, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigFile {
    pub shell: Option<String>,
    pub version: Option<String>,
    pub env: Option<HashMap<String, String>>,
    pub commands: HashMap<String, CommandConfig>,
}

/// A named command with its dependencies resolved from the config file
#[derive(Debug, Clone)]
pub struct Command {
    pub name: String,
    pub description: Option<String>,
    pub cmd: Option<Cmd>,
    pub depends: Vec<String>,
    pub env: HashMap<String, String>,
}

/// A fully loaded configuration: the command set plus global settings.
/// Command names are unique by construction (YAML mapping keys).
#[derive(Debug, Clone)]
pub struct Config {
    pub shell: String,
    pub env: HashMap<String, String>,
    pub commands: HashMap<String, Command>,
}

const DEFAULT_SHELL: &str = "sh";

/// Fields accepted at the top level of a runlet.yaml file
const VALID_TOP_LEVEL_FIELDS: &[&str] = &["shell", "version", "env", "commands"];

pub fn parse_config(yaml_str: &str) -> RunletResult<Config> {
    let raw: serde_yaml::Value = serde_yaml::from_str(yaml_str)?;
    validate_top_level_fields(&raw)?;

    let file: ConfigFile = serde_yaml::from_value(raw)?;
    Ok(build_config(file))
}

pub fn load_config(path: &Path) -> RunletResult<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        RunletError::Config(format!("failed to read config {}: {}", path.display(), e))
    })?;
    parse_config(&content)
}

/// JSON Schema for the config file format, for editor integration
pub fn config_schema_json() -> RunletResult<String> {
    let schema = schemars::schema_for!(ConfigFile);
    Ok(serde_json::to_string_pretty(&schema)?)
}

fn validate_top_level_fields(raw: &serde_yaml::Value) -> RunletResult<()> {
    if let Some(mapping) = raw.as_mapping() {
        for key in mapping.keys() {
            if let Some(key) = key.as_str() {
                if !VALID_TOP_LEVEL_FIELDS.contains(&key) {
                    return Err(RunletError::Config(format!(
                        "unknown top-level field '{}'",
                        key
                    )));
                }
            }
        }
    }

    Ok(())
}

fn build_config(file: ConfigFile) -> Config {
    let commands = file
        .commands
        .into_iter()
        .map(|(name, command)| {
            let command = Command {
                name: name.clone(),
                description: command.description,
                cmd: command.cmd,
                depends: command.depends.unwrap_or_default(),
                env: command.env.unwrap_or_default(),
            };
            (name, command)
        })
        .collect();

    Config {
        shell: file.shell.unwrap_or_else(|| DEFAULT_SHELL.to_string()),
        env: file.env.unwrap_or_default(),
        commands,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config_basic() {
        let yaml = r#"
shell: bash
commands:
  build:
    description: Build the project
    cmd: cargo build
  test:
    cmd:
      - cargo
      - test
    depends:
      - build
"#;
        let config = parse_config(yaml).unwrap();

        assert_eq!(config.shell, "bash");
        assert_eq!(config.commands.len(), 2);

        let build = &config.commands["build"];
        assert_eq!(build.name, "build");
        assert_eq!(build.description.as_deref(), Some("Build the project"));
        assert!(build.depends.is_empty());
        assert!(matches!(build.cmd, Some(Cmd::Single(_))));

        let test = &config.commands["test"];
        assert_eq!(test.depends, vec!["build".to_string()]);
        match &test.cmd {
            Some(Cmd::Multiple(parts)) => assert_eq!(parts, &vec!["cargo".to_string(), "test".to_string()]),
            other => panic!("expected a command list, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_config_defaults_shell() {
        let config = parse_config("commands: {}").unwrap();
        assert_eq!(config.shell, "sh");
        assert!(config.commands.is_empty());
    }

    #[test]
    fn test_unknown_top_level_field_is_rejected() {
        let yaml = r#"
comands:
  build:
    cmd: cargo build
commands: {}
"#;
        let err = parse_config(yaml).unwrap_err();
        assert!(
            err.to_string().contains("unknown top-level field 'comands'"),
            "unexpected error: {}",
            err
        );
    }

    #[test]
    fn test_unknown_command_field_is_rejected() {
        let yaml = r#"
commands:
  build:
    cmd: cargo build
    dependson:
      - test
"#;
        assert!(parse_config(yaml).is_err());
    }

    #[test]
    fn test_command_env_is_parsed() {
        let yaml = r#"
env:
  CI: "1"
commands:
  build:
    cmd: cargo build
    env:
      RUST_BACKTRACE: "1"
"#;
        let config = parse_config(yaml).unwrap();
        assert_eq!(config.env["CI"], "1");
        assert_eq!(config.commands["build"].env["RUST_BACKTRACE"], "1");
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("runlet.yaml");
        std::fs::write(&path, "commands:\n  hello:\n    cmd: echo hello\n").unwrap();

        let config = load_config(&path).unwrap();
        assert!(config.commands.contains_key("hello"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(&dir.path().join("missing.yaml")).unwrap_err();
        assert!(err.to_string().contains("failed to read config"));
    }

    #[test]
    fn test_config_schema_is_valid_json() {
        let schema = config_schema_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&schema).unwrap();
        assert!(value.is_object());
    }
}
