use anyhow::Result;
use tracing::info;

use crate::cli::PdfArgs;
use crate::pdf::markdown_to_pdf;
use crate::toc::add_toc_to_markdown;
use crate::util::{read_text, write_bytes};

pub fn run(args: PdfArgs) -> Result<()> {
    let mut markdown = read_text(&args.input)?;
    if args.with_toc {
        markdown = add_toc_to_markdown(&markdown);
    }

    let bytes = markdown_to_pdf(&markdown, args.title.as_deref())?;
    write_bytes(&args.output, &bytes)?;
    info!(
        input = %args.input.display(),
        output = %args.output.display(),
        bytes = bytes.len(),
        with_toc = args.with_toc,
        "wrote pdf"
    );

    Ok(())
}
