//! Failure log files

use std::{
    fs::OpenOptions,
    io::{self, Write},
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};

use crate::caught::Caught;

// gives up and reports AlreadyExists past this
const MAX_COLLISIONS: u32 = 1024;

/// `throw-<kind>-<millis>.log`, with `-<n>` before the extension for the nth collision
pub fn log_file_name(kind: &str, millis: u128, collision: u32) -> String {
    if collision == 0 {
        format!("throw-{kind}-{millis}.log")
    } else {
        format!("throw-{kind}-{millis}-{collision}.log")
    }
}

pub fn epoch_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default()
}

/// Write the message and description of `caught` to a new file in `dir`.
/// An empty `dir` means the working directory.
/// Existing files are never overwritten.
pub fn write_caught(dir: impl AsRef<Path>, caught: &Caught) -> io::Result<PathBuf> {
    let dir = dir.as_ref();
    let millis = epoch_millis();

    let mut collision = 0;
    loop {
        let path = dir.join(log_file_name(caught.kind(), millis, collision));
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(mut file) => {
                write!(file, "{}\n{}", caught.message(), caught.description())?;
                file.flush()?;
                return Ok(path);
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists && collision < MAX_COLLISIONS => {
                collision += 1;
            }
            Err(e) => return Err(e),
        }
    }
}
