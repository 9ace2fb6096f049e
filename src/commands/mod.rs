pub mod notebook;
pub mod pdf;
pub mod rename;
pub mod toc;

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Utc;
use tracing::info;

use crate::util::{backup_file, write_bytes};

pub(crate) enum Destination {
    Stdout,
    File(PathBuf),
}

pub(crate) fn resolve_destination(
    input: &Path,
    output: Option<PathBuf>,
    in_place: bool,
) -> Destination {
    match output {
        Some(path) => Destination::File(path),
        None if in_place => Destination::File(input.to_path_buf()),
        None => Destination::Stdout,
    }
}

pub(crate) fn write_destination(
    destination: &Destination,
    data: &[u8],
    backup: bool,
) -> Result<()> {
    match destination {
        Destination::Stdout => {
            use std::io::Write;

            let mut stdout = std::io::stdout().lock();
            stdout.write_all(data)?;
            stdout.flush()?;
        }
        Destination::File(path) => {
            if backup && path.exists() {
                let backup_path = backup_file(path, Utc::now())?;
                info!(path = %backup_path.display(), "wrote backup");
            }
            write_bytes(path, data)?;
            info!(path = %path.display(), bytes = data.len(), "wrote output");
        }
    }

    Ok(())
}
