//! Starting editor processes
//!
//! The [`Launcher`] trait is the seam between the command layer and the OS.
//! [`ProcessLauncher`] spawns the editor as a child process and, by default,
//! does not wait for it.

use edsel_core::prelude::*;
use std::process::Command;

/// Starts an executable with the given arguments.
#[cfg_attr(test, mockall::automock)]
pub trait Launcher {
    fn launch(&self, program: &str, args: &[String]) -> std::io::Result<()>;
}

/// Launcher backed by [`std::process::Command`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessLauncher {
    wait: bool,
}

impl ProcessLauncher {
    /// Fire-and-forget launcher; the editor keeps running after we exit.
    pub fn new() -> Self {
        Self { wait: false }
    }

    /// Launcher that blocks until each editor exits (for terminal editors).
    pub fn waiting() -> Self {
        Self { wait: true }
    }

    pub fn waits(&self) -> bool {
        self.wait
    }
}

impl Launcher for ProcessLauncher {
    fn launch(&self, program: &str, args: &[String]) -> std::io::Result<()> {
        debug!("Launching {} {:?}", program, args);

        let mut child = Command::new(program).args(args).spawn()?;

        if self.wait {
            let status = child.wait()?;
            if !status.success() {
                return Err(std::io::Error::other(format!(
                    "{} exited with {}",
                    program, status
                )));
            }
        }

        Ok(())
    }
}
