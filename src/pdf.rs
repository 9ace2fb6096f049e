use anyhow::{Result, anyhow};
use pdf_oxide::api::PdfBuilder;

pub fn markdown_to_pdf(markdown: &str, title: Option<&str>) -> Result<Vec<u8>> {
    let mut builder = PdfBuilder::new();
    if let Some(title) = title {
        builder = builder.title(title);
    }

    let pdf = builder
        .from_markdown(markdown)
        .map_err(|err| anyhow!("failed to render markdown to pdf: {err}"))?;

    Ok(pdf.into_bytes())
}
