use std::fmt::{Display, Formatter};

use indexmap::IndexMap;
use serde::Deserialize;

/// Label used for the single tab created when the config names none.
pub const DEFAULT_TAB_LABEL: &str = "Output";

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub name: String,
    #[serde(rename = "command", alias = "cmd")]
    pub argv: Vec<String>,
    /// When set, the command is incomplete until the user types one more argument.
    #[serde(default, rename = "prompt")]
    pub requires_prompt: bool,
    pub working_directory: Option<String>,
    pub environment: Option<IndexMap<String, String>>,
}

impl CommandSpec {
    #[must_use]
    pub fn new(name: &str, argv: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            argv: argv.iter().map(ToString::to_string).collect(),
            requires_prompt: false,
            working_directory: None,
            environment: None,
        }
    }

    #[must_use]
    pub fn prompting(mut self) -> Self {
        self.requires_prompt = true;
        self
    }
}

impl Display for CommandSpec {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        if self.name.is_empty() {
            write!(formatter, "{}", self.argv.join(" "))
        } else {
            formatter.write_str(&self.name)
        }
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneDimensions {
    pub width: u16,
    pub height: u16,
}

/// The input pane is always one text row high, so only its width is configurable.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputDimensions {
    pub width: u16,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LauncherConfig {
    #[serde(alias = "buttons")]
    pub commands: Vec<CommandSpec>,
    pub viewport: PaneDimensions,
    pub list: PaneDimensions,
    pub textinput: InputDimensions,
    #[serde(default)]
    pub completions: Vec<String>,
    #[serde(default = "default_tabs")]
    pub tabs: Vec<String>,
}

fn default_tabs() -> Vec<String> {
    vec![DEFAULT_TAB_LABEL.to_string()]
}

/// A fully resolved command line, ready to hand to the runner.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Invocation {
    pub argv: Vec<String>,
    pub working_directory: Option<String>,
    pub environment: Option<IndexMap<String, String>>,
}

impl Invocation {
    /// Runs a non-prompting command exactly as configured.
    #[must_use]
    pub fn from_command_spec(spec: &CommandSpec) -> Self {
        Self {
            argv: spec.argv.clone(),
            working_directory: spec.working_directory.clone(),
            environment: spec.environment.clone(),
        }
    }

    /// Completes a prompting command with the single value the user typed.
    ///
    /// The value is appended as one argument, spaces included.
    #[must_use]
    pub fn with_prompt_value(spec: &CommandSpec, value: &str) -> Self {
        let mut invocation = Self::from_command_spec(spec);
        invocation.argv.push(value.to_string());
        invocation
    }

    /// Splits a free-typed line on whitespace. There is no quoting support.
    #[must_use]
    pub fn from_line(line: &str) -> Self {
        Self {
            argv: line.split_whitespace().map(ToString::to_string).collect(),
            working_directory: None,
            environment: None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.argv.is_empty()
    }
}

impl Display for Invocation {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.argv.join(" ").as_str())
    }
}
