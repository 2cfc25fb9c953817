use std::path::PathBuf;
use std::process::Command;

/// The `sara` binary built for this test run.
pub fn command() -> Command {
    let path = PathBuf::from(env!("CARGO_BIN_EXE_sara"));
    let mut command = Command::new(path);
    command.current_dir(env!("CARGO_MANIFEST_DIR"));
    command
}
