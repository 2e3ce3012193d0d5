/// Open a folder in the file manager or a file in its default application.
use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};
use std::thread::{self, JoinHandle};
use tracing::debug;

#[cfg(target_os = "windows")]
const OPENER: &str = "explorer";
#[cfg(target_os = "macos")]
const OPENER: &str = "open";
#[cfg(not(any(target_os = "windows", target_os = "macos")))]
const OPENER: &str = "xdg-open";

/// Launch the platform opener on `path`. Does not wait for it to exit.
pub fn open_path(path: &Path) -> io::Result<()> {
    if !path.exists() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} does not exist", path.display()),
        ));
    }
    let mut command = Command::new(OPENER);
    command.arg(path);
    spawn_reaped(command).map(|_| ())
}

/// Spawn `command` and wait for it on a detached thread so the child is
/// reaped when it exits instead of lingering as a zombie.
fn spawn_reaped(mut command: Command) -> io::Result<JoinHandle<io::Result<ExitStatus>>> {
    let mut child = command.spawn()?;
    thread::Builder::new()
        .name("imagecopier-opener".into())
        .spawn(move || {
            let status = child.wait();
            match &status {
                Ok(status) => debug!("Opener exited with {status}"),
                Err(err) => debug!("Could not wait for opener: {err}"),
            }
            status
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_path_is_not_found() {
        let err = open_path(Path::new("/definitely/not/here/imagecopier")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[cfg(unix)]
    #[test]
    fn spawned_child_is_waited_for() {
        let status = spawn_reaped(Command::new("true"))
            .unwrap()
            .join()
            .unwrap()
            .unwrap();
        assert!(status.success());
    }

    #[test]
    fn unknown_program_fails_to_spawn() {
        let result = spawn_reaped(Command::new("imagecopier-no-such-opener"));
        assert!(result.is_err());
    }
}
