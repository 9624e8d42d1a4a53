use std::process::ExitStatus;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{}", .0)]
    SubProcessExit(ExitStatus),

    #[error("could not run `{}`: {}", .program, .original)]
    Spawn {
        program: String,
        original: std::io::Error,
    },

    #[error("Nothing to run: the command line is empty.")]
    EmptyCommandLine,

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("No commands were found in the launcher config. Is `{}` empty?", .path)]
    EmptyCommandDefinition { path: String },

    #[error("Command `{}` has an empty `command` list", .0)]
    EmptyCommand(String),

    #[error("The `{}` of the `{}` pane must be greater than zero", .field, .pane)]
    InvalidDimension { pane: String, field: String },

    #[error("At least one tab must be configured")]
    NoTabs,

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),
}

impl Error {
    pub fn empty_command_definition(path: String) -> Self {
        Self::EmptyCommandDefinition { path }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }

    pub fn spawn_error(program: String, original: std::io::Error) -> Self {
        Self::Spawn { program, original }
    }

    pub fn invalid_dimension(pane: &str, field: &str) -> Self {
        Self::InvalidDimension {
            pane: pane.to_string(),
            field: field.to_string(),
        }
    }
}
