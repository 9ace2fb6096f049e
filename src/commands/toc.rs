use anyhow::Result;
use tracing::info;

use crate::cli::TocArgs;
use crate::commands::{Destination, resolve_destination, write_destination};
use crate::model::TocReport;
use crate::toc::{TocOptions, add_toc_with};
use crate::util::{now_utc_string, print_json_pretty, read_text};

pub fn run(args: TocArgs) -> Result<()> {
    let markdown = read_text(&args.input)?;
    let options = TocOptions {
        anchor_base: args.anchor_base,
        seed_mode: args.seed_mode,
        patch_mode: args.patch_mode,
    };

    let outcome = add_toc_with(&markdown, &options);
    info!(
        input = %args.input.display(),
        entries = outcome.entries.len(),
        anchors_inserted = outcome.anchors_inserted,
        anchor_base = options.anchor_base.as_str(),
        seed_mode = ?options.seed_mode,
        patch_mode = ?options.patch_mode,
        "generated table of contents"
    );

    let destination = resolve_destination(&args.input, args.output, args.in_place);
    if args.json {
        if let Destination::File(_) = destination {
            write_destination(&destination, outcome.markdown.as_bytes(), args.backup)?;
        }
        let report = TocReport {
            input: args.input.display().to_string(),
            generated_at: now_utc_string(),
            anchor_base: options.anchor_base.as_str().to_string(),
            anchors_inserted: outcome.anchors_inserted,
            entry_count: outcome.entries.len(),
            entries: outcome.entries,
        };
        return print_json_pretty(&report);
    }

    write_destination(&destination, outcome.markdown.as_bytes(), args.backup)
}
