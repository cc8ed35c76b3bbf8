use anyhow::anyhow;
use console::style;

use crate::{config::global_config, logger};

/// A wrapper around [`xshell::Cmd`] that logs the command in verbose mode and
/// reports its output when it fails.
#[derive(Debug)]
pub struct Cmd<'a> {
    inner: xshell::Cmd<'a>,
}

#[derive(thiserror::Error, Debug)]
#[error("Cmd error: {source} {stderr:?}")]
pub struct CmdError {
    stderr: Option<String>,
    source: anyhow::Error,
}

impl From<xshell::Error> for CmdError {
    fn from(value: xshell::Error) -> Self {
        Self {
            stderr: None,
            source: value.into(),
        }
    }
}

pub type CmdResult<T> = Result<T, CmdError>;

impl<'a> Cmd<'a> {
    pub fn new(cmd: xshell::Cmd<'a>) -> Self {
        Self { inner: cmd }
    }

    /// Run the command, streaming its output only in verbose mode.
    pub fn run(mut self) -> CmdResult<()> {
        let verbose = global_config().verbose;
        if verbose {
            logger::debug(format!("Running: {}", self.inner));
        }

        self.inner.set_quiet(!verbose);
        self.inner.set_ignore_status(true);
        let output = self.inner.output()?;
        check_output_status(&self.inner, &output)?;

        if verbose {
            logger::raw(log_output(&output));
            logger::new_line();
        }
        Ok(())
    }

    /// Run the command and return its stdout, trimmed.
    pub fn run_with_output(mut self) -> CmdResult<String> {
        logger::debug(format!("Running: {}", self.inner));
        self.inner.set_ignore_status(true);
        let output = self.inner.output()?;
        check_output_status(&self.inner, &output)?;
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_owned())
    }
}

fn check_output_status(cmd: &xshell::Cmd<'_>, output: &std::process::Output) -> CmdResult<()> {
    if output.status.success() {
        return Ok(());
    }

    logger::error_note(&format!("Command failed to run: {cmd}"), &log_output(output));
    Err(CmdError {
        stderr: Some(String::from_utf8_lossy(&output.stderr).into_owned()),
        source: anyhow!("Command failed to run: {cmd}"),
    })
}

fn log_output(output: &std::process::Output) -> String {
    let indent = |s: &str| {
        s.lines()
            .map(|l| format!("    {l}"))
            .collect::<Vec<_>>()
            .join("\n")
    };
    let status = indent(&output.status.to_string());
    let stdout = indent(&String::from_utf8_lossy(&output.stdout));
    let stderr = indent(&String::from_utf8_lossy(&output.stderr));

    format!(
        "{}\n{status}\n{}\n{stdout}\n{}\n{stderr}",
        style("  Status:").bold(),
        style("  Stdout:").bold(),
        style("  Stderr:").bold(),
    )
}

#[cfg(test)]
mod tests {
    use xshell::{cmd, Shell};

    use super::*;

    #[test]
    fn run_with_output_returns_trimmed_stdout() {
        let shell = Shell::new().unwrap();
        let out = Cmd::new(cmd!(shell, "echo cyclebuddy"))
            .run_with_output()
            .unwrap();
        assert_eq!(out, "cyclebuddy");
    }

    #[test]
    fn failing_command_keeps_stderr() {
        let shell = Shell::new().unwrap();
        let err = Cmd::new(cmd!(shell, "ls /definitely/not/a/dir"))
            .run_with_output()
            .unwrap_err();
        assert!(err.stderr.is_some());
    }
}
