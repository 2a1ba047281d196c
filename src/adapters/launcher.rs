//! Host viewer launcher
//!
//! Hands a `file://` URL to the platform's default opener.

use std::io;
use std::process::{Command, Stdio};
use tracing::debug;

/// Something that can open a URL in the user's environment
pub trait Launcher {
    fn open(&self, url: &str) -> io::Result<()>;
}

/// Launcher backed by the platform opener command
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl SystemLauncher {
    pub fn new() -> Self {
        Self
    }

    fn command(url: &str) -> Command {
        if cfg!(target_os = "macos") {
            let mut cmd = Command::new("open");
            cmd.arg(url);
            cmd
        } else if cfg!(target_os = "windows") {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", "", url]);
            cmd
        } else {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(url);
            cmd
        }
    }
}

impl Launcher for SystemLauncher {
    /// Spawns the opener and returns without waiting for it
    fn open(&self, url: &str) -> io::Result<()> {
        debug!("Launching viewer for {}", url);
        Self::command(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_carries_url() {
        let cmd = SystemLauncher::command("file:///tmp/paper.pdf");
        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(*args.last().unwrap(), "file:///tmp/paper.pdf");
    }
}
