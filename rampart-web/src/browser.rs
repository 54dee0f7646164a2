use std::io;
use std::process::Command;

/// Opens `url` in the system's default browser without waiting on it.
///
/// The spawned process is left to its own devices; an error here only means
/// the launcher could not be started, not that the page failed to load.
pub fn open(url: &str) -> io::Result<()> {
    let mut command = if cfg!(target_os = "macos") {
        let mut command = Command::new("open");
        command.arg(url);
        command
    } else if cfg!(target_os = "windows") {
        let mut command = Command::new("cmd");
        command.args(["/c", "start", url]);
        command
    } else {
        let mut command = Command::new("xdg-open");
        command.arg(url);
        command
    };

    command.spawn()?;
    Ok(())
}
