use std::io::{self, Read};
use std::process::{Child, Command, ExitStatus, Stdio};

use itertools::Itertools;
use log::{debug, info, warn};

use crate::command_definitions::Invocation;
use crate::config;
use crate::error::{Error, Result};
use crate::tabs::Tab;

/// Runs an invocation to completion and returns its combined output.
///
/// Stdout and stderr share one pipe, so the text keeps the order in which the
/// child wrote it. Stdin is not connected. This blocks until the child exits.
///
/// # Errors
///
/// Returns an error if the command line is empty, the process cannot be
/// spawned, or it exits with a non-success status.
pub fn capture_output(invocation: &Invocation) -> Result<String> {
    let Some((program, arguments)) = invocation.argv.split_first() else {
        return Err(Error::EmptyCommandLine);
    };

    let (mut reader, writer) = io::pipe()?;

    let mut command = Command::new(program);
    command
        .args(arguments)
        .stdin(Stdio::null())
        .stdout(writer.try_clone()?)
        .stderr(writer);

    if let Some(working_directory) =
        config::expand_working_directory(invocation.working_directory.as_deref())
    {
        debug!("Executing in `{}`", working_directory);
        command.current_dir(working_directory);
    }

    if let Some(environment) = &invocation.environment {
        info!(
            "Executing with environment variables: {:?}",
            environment.iter().sorted().collect::<Vec<_>>()
        );
        command.envs(environment);
    }

    let spawn_result = command.spawn();
    // The parent's copies of the write end must be closed or the read below never sees EOF.
    drop(command);
    let mut child = spawn_result.map_err(|e| Error::spawn_error(program.clone(), e))?;

    let mut output = Vec::new();
    let read_result = reader.read_to_end(&mut output);
    let exit_status = reap(&mut child, read_result)?;

    if exit_status.success() {
        Ok(String::from_utf8_lossy(&output).into_owned())
    } else {
        Err(Error::SubProcessExit(exit_status))
    }
}

/// Waits for the child, even when reading its output failed, then reports the read error.
fn reap(child: &mut Child, read_result: io::Result<usize>) -> Result<ExitStatus> {
    let exit_status = child.wait()?;
    read_result?;
    Ok(exit_status)
}

/// Appends the outcome of a run to a tab and scrolls it to the bottom.
pub fn record_outcome(
    tab: &mut Tab,
    invocation: &Invocation,
    outcome: &Result<String>,
    rows: usize,
) {
    tab.append(&format!("Running command: {invocation}\n"));

    match outcome {
        Ok(output) => tab.append(output),
        Err(e) => {
            warn!("`{}` failed: {}", invocation, e);
            tab.append(&format!("Error: {e}\n"));
        }
    }

    tab.refresh(rows);
}

/// Runs an invocation and records it in `tab`.
///
/// An empty command line is ignored: nothing is spawned and nothing is logged.
/// Returns whether anything ran.
pub fn run_in_tab(invocation: &Invocation, tab: &mut Tab, rows: usize) -> bool {
    if invocation.is_empty() {
        debug!("Ignoring empty command line");
        return false;
    }

    info!("Running `{}` in tab `{}`", invocation, tab.label());
    let outcome = capture_output(invocation);
    record_outcome(tab, invocation, &outcome, rows);
    true
}
