use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::HarnessError;

pub const DCT_TIV: &str = "dct-tiv";
pub const TIV: &str = "tiv";

/// The three renderings compared per file, in the order they are invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Spatial,
    Dct,
    Viewer,
}

/// Narrow capability over the external tools so the comparison loop can be
/// driven by mocks in tests.
pub trait Renderer {
    /// Runs one rendering tool on `file` and returns its raw captured
    /// stdout. Every tool terminates its output with one trailing byte;
    /// callers strip it with [`trim_capture`].
    fn render(&self, file: &Path, mode: RenderMode) -> Result<Vec<u8>, HarnessError>;

    /// Runs the display command on `file` with stdout/stderr inherited, so
    /// inline terminal graphics reach the terminal directly.
    fn display(&self, file: &Path) -> Result<(), HarnessError>;
}

/// Drops the single trailing byte of a captured rendering (a newline in
/// practice). An empty capture stays empty.
pub fn trim_capture(mut bytes: Vec<u8>) -> Vec<u8> {
    bytes.pop();
    bytes
}

/// Production [`Renderer`]: shells out to `dct-tiv`, `tiv`, and the
/// configured display script.
#[derive(Debug)]
pub struct CommandRenderer {
    display_script: PathBuf,
}

impl CommandRenderer {
    pub fn new(display_script: PathBuf) -> Self {
        Self { display_script }
    }
}

impl Renderer for CommandRenderer {
    fn render(&self, file: &Path, mode: RenderMode) -> Result<Vec<u8>, HarnessError> {
        let mut cmd = match mode {
            RenderMode::Spatial => {
                let mut c = Command::new(DCT_TIV);
                c.arg(file).arg("--spatial");
                c
            }
            RenderMode::Dct => {
                let mut c = Command::new(DCT_TIV);
                c.arg(file).arg("--dct");
                c
            }
            RenderMode::Viewer => {
                let mut c = Command::new(TIV);
                c.args(["-w", "2", "-h", "1"]).arg(file);
                c
            }
        };
        capture_stdout(&mut cmd)
    }

    fn display(&self, file: &Path) -> Result<(), HarnessError> {
        let mut cmd = Command::new(&self.display_script);
        cmd.arg(file);
        let label = command_label(&cmd);

        // The exit status of the display script is not checked, only a
        // failure to start it is reported.
        cmd.status()
            .map_err(|e| HarnessError::SubprocessFailure {
                command: label,
                reason: e.to_string(),
            })?;
        Ok(())
    }
}

/// Captures stdout while letting the tool's own diagnostics pass through on
/// stderr. Non-zero exit is a failure.
fn capture_stdout(cmd: &mut Command) -> Result<Vec<u8>, HarnessError> {
    let label = command_label(cmd);

    let output = cmd
        .stderr(Stdio::inherit())
        .output()
        .map_err(|e| HarnessError::SubprocessFailure {
            command: label.clone(),
            reason: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(HarnessError::SubprocessFailure {
            command: label,
            reason: format!("exited with {}", output.status),
        });
    }

    Ok(output.stdout)
}

fn command_label(cmd: &Command) -> String {
    let mut label = cmd.get_program().to_string_lossy().into_owned();
    for arg in cmd.get_args() {
        label.push(' ');
        label.push_str(&arg.to_string_lossy());
    }
    label
}
