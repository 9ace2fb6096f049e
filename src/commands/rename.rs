use anyhow::Result;
use tracing::info;

use crate::cli::RenameArgs;
use crate::rename::{rename_files, title_renamed_path};
use crate::util::print_json_pretty;

pub fn run(args: RenameArgs) -> Result<()> {
    let dry_run = !args.apply;
    let plans = rename_files(&args.files, title_renamed_path, dry_run)?;

    if dry_run {
        info!(file_count = plans.len(), "rename dry-run complete; pass --apply to rename");
    } else {
        info!(file_count = plans.len(), "rename completed");
    }

    if args.json {
        print_json_pretty(&plans)?;
    }

    Ok(())
}
