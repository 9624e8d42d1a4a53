//! File handling and validation for the rust-deck configuration.
//!
//! This module reads the launcher config from disk and checks the parts that
//! serde cannot: non-empty command lines, usable pane sizes and tab labels.

use std::fs::File;

use log::debug;

use crate::command_definitions::{CommandSpec, LauncherConfig};
use crate::error::Error::{EmptyCommand, NoTabs};
use crate::error::{Error, Result};

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    match File::open(path) {
        Ok(reader) => Ok(reader),
        Err(e) => Err(Error::io_error(
            file_description.to_string(),
            path.to_string(),
            e,
        )),
    }
}

fn validate_commands(commands: &[CommandSpec]) -> Result<()> {
    for command in commands {
        if command.argv.is_empty() {
            return Err(EmptyCommand(command.name.clone()));
        }
    }

    Ok(())
}

fn validate_dimensions(config: &LauncherConfig) -> Result<()> {
    let checks = [
        ("viewport", "width", config.viewport.width),
        ("viewport", "height", config.viewport.height),
        ("list", "width", config.list.width),
        ("list", "height", config.list.height),
        ("textinput", "width", config.textinput.width),
    ];

    match checks.iter().find(|(_, _, value)| *value == 0) {
        Some((pane, field, _)) => Err(Error::invalid_dimension(pane, field)),
        None => Ok(()),
    }
}

/// Checks a parsed config for everything the launcher relies on at startup.
///
/// # Errors
///
/// Returns an error if:
/// - A command has an empty `command` list
/// - A pane width or height is zero
/// - The `tabs` list is present but empty
pub fn validate_launcher_config(config: &LauncherConfig) -> Result<()> {
    validate_commands(&config.commands)?;
    validate_dimensions(config)?;

    if config.tabs.is_empty() {
        return Err(NoTabs);
    }

    Ok(())
}

/// Loads and validates the launcher configuration from a YAML file.
///
/// The path is used as given; resolve `~` first with
/// [`crate::config::get_config_path`].
///
/// # Errors
///
/// Returns an error if:
/// - The configuration file cannot be read
/// - The YAML is malformed or doesn't match the expected structure
/// - No commands are defined
/// - Any check in [`validate_launcher_config`] fails
///
/// # Examples
///
/// ```no_run
/// use rust_deck_core::config::get_config_path;
/// use rust_deck_core::file_handling::get_launcher_config;
///
/// let config = get_launcher_config(&get_config_path(None))?;
/// println!("Loaded {} commands", config.commands.len());
/// # Ok::<(), rust_deck_core::error::Error>(())
/// ```
pub fn get_launcher_config(config_path: &str) -> Result<LauncherConfig> {
    let config_reader = get_reader("config", config_path)?;

    let config: LauncherConfig = serde_yaml::from_reader(config_reader).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "config".to_string(),
            config_path.to_string(),
            e,
        )
    })?;

    if config.commands.is_empty() {
        return Err(Error::empty_command_definition(config_path.to_string()));
    }

    validate_launcher_config(&config)?;

    debug!(
        "Loaded {} commands, {} completions and {} tabs from `{}`",
        config.commands.len(),
        config.completions.len(),
        config.tabs.len(),
        config_path
    );

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(yaml_content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{yaml_content}").unwrap();
        temp_file
    }

    fn load(temp_file: &NamedTempFile) -> Result<LauncherConfig> {
        get_launcher_config(temp_file.path().to_str().unwrap())
    }

    const PANES: &str = r#"
viewport: { width: 80, height: 20 }
list: { width: 30, height: 20 }
textinput: { width: 76 }
"#;

    #[test]
    fn test_get_launcher_config_valid_yaml() {
        let yaml = format!(
            r#"
commands:
  - name: "Say hey"
    command: ["echo", "hey"]
  - name: "Show"
    command: ["cat"]
    prompt: true
completions: ["a.txt", "b.txt"]
tabs: ["main", "scratch"]
{PANES}"#
        );
        let temp_file = write_config(&yaml);

        let config = load(&temp_file).unwrap();
        assert_eq!(config.commands.len(), 2);
        assert_eq!(config.commands[0].argv, vec!["echo", "hey"]);
        assert!(config.commands[1].requires_prompt);
        assert_eq!(config.completions, vec!["a.txt", "b.txt"]);
        assert_eq!(config.tabs, vec!["main", "scratch"]);
        assert_eq!(config.viewport.height, 20);
    }

    #[test]
    fn test_get_launcher_config_no_commands() {
        let temp_file = write_config(&format!("commands: []\n{PANES}"));
        let result = load(&temp_file);
        assert!(matches!(result, Err(Error::EmptyCommandDefinition { .. })));
    }

    #[test]
    fn test_get_launcher_config_empty_argv() {
        let yaml = format!("commands:\n  - name: \"broken\"\n    command: []\n{PANES}");
        let temp_file = write_config(&yaml);
        let result = load(&temp_file);
        assert!(matches!(result, Err(EmptyCommand(name)) if name == "broken"));
    }

    #[test]
    fn test_get_launcher_config_zero_dimension() {
        let yaml = r#"
commands:
  - name: "List"
    command: ["ls"]
viewport: { width: 80, height: 0 }
list: { width: 30, height: 20 }
textinput: { width: 76 }
"#;
        let temp_file = write_config(yaml);
        let result = load(&temp_file);
        match result {
            Err(Error::InvalidDimension { pane, field }) => {
                assert_eq!(pane, "viewport");
                assert_eq!(field, "height");
            }
            other => panic!("Expected InvalidDimension, got {other:?}"),
        }
    }

    #[test]
    fn test_get_launcher_config_empty_tabs() {
        let yaml =
            format!("commands:\n  - name: \"List\"\n    command: [\"ls\"]\ntabs: []\n{PANES}");
        let temp_file = write_config(&yaml);
        assert!(matches!(load(&temp_file), Err(NoTabs)));
    }

    #[test]
    fn test_get_launcher_config_missing_pane() {
        let yaml = "commands:\n  - name: \"List\"\n    command: [\"ls\"]\n";
        let temp_file = write_config(yaml);
        assert!(matches!(load(&temp_file), Err(Error::Yaml { .. })));
    }

    #[test]
    fn test_get_launcher_config_invalid_yaml() {
        let temp_file = write_config("invalid: yaml: content: [");
        assert!(load(&temp_file).is_err());
    }

    #[test]
    fn test_get_launcher_config_file_not_found() {
        let result = get_launcher_config("/this/path/does/not/exist.yml");
        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
