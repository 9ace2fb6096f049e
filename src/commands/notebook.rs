use std::collections::HashSet;

use anyhow::{Context, Result, bail};
use tracing::{info, warn};

use crate::cli::{NotebookArgs, NotebookClearArgs, NotebookCommands, NotebookLargestArgs};
use crate::commands::{resolve_destination, write_destination};
use crate::notebook::{
    cells_with_largest_output, clear_outputs_of_cell_ids, clear_outputs_of_largest_output_cells,
    load_notebook,
};
use crate::util::print_json_pretty;

pub fn run(args: NotebookArgs) -> Result<()> {
    match args.command {
        NotebookCommands::Largest(args) => run_largest(args),
        NotebookCommands::Clear(args) => run_clear(args),
    }
}

fn run_largest(args: NotebookLargestArgs) -> Result<()> {
    let notebook = load_notebook(&args.notebook)?;
    let stats = cells_with_largest_output(&notebook, args.count)?;

    if args.json {
        return print_json_pretty(&stats);
    }

    for entry in &stats {
        info!(
            id = %entry.id.as_deref().unwrap_or("<none>"),
            index = entry.index,
            output_size = entry.output_size,
            "cell output"
        );
    }

    Ok(())
}

fn run_clear(args: NotebookClearArgs) -> Result<()> {
    let mut notebook = load_notebook(&args.notebook)?;

    let cleared = match (args.largest, args.cell_ids.is_empty()) {
        (Some(count), _) => {
            let ids = clear_outputs_of_largest_output_cells(&mut notebook, count)?;
            info!(ids = ?ids, "selected largest-output cells");
            ids.len()
        }
        (None, false) => {
            let ids = args.cell_ids.iter().cloned().collect::<HashSet<String>>();
            let cleared = clear_outputs_of_cell_ids(&mut notebook, &ids)?;
            if cleared < ids.len() {
                warn!(
                    requested = ids.len(),
                    cleared, "some requested cell ids were not found"
                );
            }
            cleared
        }
        (None, true) => bail!("pass --cell-id or --largest to choose cells to clear"),
    };

    let mut data = serde_json::to_vec_pretty(&notebook).context("failed to serialize notebook")?;
    data.push(b'\n');

    let destination = resolve_destination(&args.notebook, args.output, args.in_place);
    write_destination(&destination, &data, args.backup)?;
    info!(
        notebook = %args.notebook.display(),
        cleared,
        "cleared cell outputs"
    );

    Ok(())
}
