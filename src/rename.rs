use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde_json::Value;
use tracing::info;

use crate::model::{RenamePlan, TitleMetadata};

const TITLE_SEPARATOR: &str = " -- ";

pub fn read_title(path: &Path) -> Result<String> {
    let raw = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let metadata: TitleMetadata = serde_json::from_slice(&raw)
        .with_context(|| format!("failed to parse json metadata {}", path.display()))?;

    match metadata.title {
        Some(Value::String(title)) => Ok(title),
        Some(_) => bail!("'title' is not a string in {}", path.display()),
        None => bail!("missing 'title' in {}", path.display()),
    }
}

pub fn title_renamed_path(path: &Path) -> Result<PathBuf> {
    let title = read_title(path)?;
    renamed_with_title(path, &title)
}

pub fn renamed_with_title(path: &Path, title: &str) -> Result<PathBuf> {
    if title.contains(['/', '\\']) {
        bail!("title contains a path separator: {title}");
    }

    let stem = path
        .file_stem()
        .and_then(|value| value.to_str())
        .with_context(|| format!("invalid UTF-8 filename: {}", path.display()))?;
    let extension = path
        .extension()
        .and_then(|value| value.to_str())
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default();

    Ok(path.with_file_name(format!("{stem}{TITLE_SEPARATOR}{title}{extension}")))
}

pub fn rename_files<F>(files: &[PathBuf], renamer: F, dry_run: bool) -> Result<Vec<RenamePlan>>
where
    F: Fn(&Path) -> Result<PathBuf>,
{
    let mut plans = Vec::with_capacity(files.len());
    for file in files {
        let target = renamer(file)?;
        info!(from = %file.display(), to = %target.display(), dry_run, "renaming");

        if !dry_run {
            if target.exists() {
                bail!("refusing to overwrite existing file: {}", target.display());
            }
            fs::rename(file, &target).with_context(|| {
                format!("failed to rename {} to {}", file.display(), target.display())
            })?;
        }

        plans.push(RenamePlan {
            from: file.display().to_string(),
            to: target.display().to_string(),
            applied: !dry_run,
        });
    }

    Ok(plans)
}
