use std::sync::OnceLock;

use clap::ValueEnum;
use regex::Regex;
use serde::Serialize;

use super::anchor::{AnchorStrategy, anchor_tag};
use super::registry::{AnchorRegistry, SeedMode, generate_anchor_name};

pub const TOC_TITLE: &str = "# Table of contents";
const TOC_INDENT: &str = "    ";

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum PatchMode {
    #[default]
    HeaderLine,
    // First literal `"## text"` anywhere, which may be a quoted copy.
    FirstOccurrence,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct TocOptions {
    pub anchor_base: AnchorStrategy,
    pub seed_mode: SeedMode,
    pub patch_mode: PatchMode,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Header {
    pub line_index: usize,
    pub level: usize,
    pub marker: String,
    pub raw_text: String,
    pub text: String,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct TocEntry {
    pub level: usize,
    pub text: String,
    pub anchor: String,
}

impl TocEntry {
    pub fn render(&self) -> String {
        format!(
            "{}- [{}](#{})",
            TOC_INDENT.repeat(self.level.saturating_sub(1)),
            self.text,
            self.anchor
        )
    }
}

#[derive(Debug, Clone)]
pub struct TocOutcome {
    pub markdown: String,
    pub entries: Vec<TocEntry>,
    pub anchors_inserted: usize,
}

/// Adds anchor tags to every header and a table of contents after the
/// first header line, using the default md5 anchors.
///
/// Running this on its own output does not reproduce the same text: the
/// anchors it inserted are treated as pre-existing and headers get new,
/// suffixed names. Keep a copy of the original when overwriting files.
pub fn add_toc_to_markdown(markdown: &str) -> String {
    add_toc_with(markdown, &TocOptions::default()).markdown
}

pub fn add_toc_with(markdown: &str, options: &TocOptions) -> TocOutcome {
    let strategy = options.anchor_base;
    add_toc_with_deriver(markdown, options.seed_mode, options.patch_mode, |header| {
        strategy.derive(header)
    })
}

pub fn add_toc_with_deriver<F>(
    markdown: &str,
    seed_mode: SeedMode,
    patch_mode: PatchMode,
    derive: F,
) -> TocOutcome
where
    F: Fn(&str) -> String,
{
    let mut registry = AnchorRegistry::seeded(markdown, seed_mode);
    let headers = extract_headers(markdown);

    let mut entries = Vec::with_capacity(headers.len());
    let mut pending_tags = Vec::new();
    for header in &headers {
        let anchor = generate_anchor_name(&header.text, &mut registry, &derive);
        if !tag_present(markdown, &anchor) {
            pending_tags.push((header, anchor_tag(&anchor)));
        }
        entries.push(TocEntry {
            level: header.level,
            text: header.text.clone(),
            anchor,
        });
    }

    let anchors_inserted = pending_tags.len();
    let patched = match patch_mode {
        PatchMode::HeaderLine => patch_header_lines(markdown, &pending_tags),
        PatchMode::FirstOccurrence => patch_first_occurrences(markdown, &pending_tags),
    };

    TocOutcome {
        markdown: splice_toc(&patched, &render_toc_block(&entries)),
        entries,
        anchors_inserted,
    }
}

pub fn extract_headers(markdown: &str) -> Vec<Header> {
    markdown
        .split_inclusive('\n')
        .enumerate()
        .filter_map(|(line_index, line)| {
            let (body, _) = split_line_ending(line);
            let (marker, raw_text) = parse_header_line(body)?;
            Some(Header {
                line_index,
                level: marker.len(),
                marker: marker.to_string(),
                raw_text: raw_text.to_string(),
                text: raw_text.trim().to_string(),
            })
        })
        .collect()
}

pub fn render_toc_block(entries: &[TocEntry]) -> String {
    let mut lines = Vec::with_capacity(entries.len() + 1);
    lines.push(TOC_TITLE.to_string());
    lines.extend(entries.iter().map(TocEntry::render));

    let mut block = lines.join("\n");
    block.push_str("\n\n");
    block
}

fn tag_present(markdown: &str, anchor: &str) -> bool {
    markdown.contains(&anchor_tag(anchor))
}

static HEADER_REGEX: OnceLock<Option<Regex>> = OnceLock::new();

fn header_regex() -> Option<&'static Regex> {
    HEADER_REGEX
        .get_or_init(|| Regex::new(r"^(#+) (.+)$").ok())
        .as_ref()
}

fn parse_header_line(body: &str) -> Option<(&str, &str)> {
    let captures = header_regex()?.captures(body)?;
    let marker = captures.get(1)?.as_str();
    let raw_text = captures.get(2)?.as_str();

    Some((marker, raw_text))
}

fn split_line_ending(line: &str) -> (&str, &str) {
    let body = line.trim_end_matches(['\r', '\n']);
    (body, &line[body.len()..])
}

fn patch_header_lines(markdown: &str, pending_tags: &[(&Header, String)]) -> String {
    let mut lines = markdown
        .split_inclusive('\n')
        .map(ToOwned::to_owned)
        .collect::<Vec<String>>();

    for (header, tag) in pending_tags {
        let Some(line) = lines.get_mut(header.line_index) else {
            continue;
        };
        let (body, ending) = split_line_ending(line);
        *line = format!("{} {}{}", body.trim_end(), tag, ending);
    }

    lines.concat()
}

fn patch_first_occurrences(markdown: &str, pending_tags: &[(&Header, String)]) -> String {
    let mut patched = markdown.to_string();
    for (header, tag) in pending_tags {
        let needle = format!("{} {}", header.marker, header.raw_text);
        patched = patched.replacen(&needle, &format!("{needle} {tag}"), 1);
    }
    patched
}

fn splice_toc(markdown: &str, toc_block: &str) -> String {
    let mut offset = 0;
    for line in markdown.split_inclusive('\n') {
        let (body, ending) = split_line_ending(line);
        offset += line.len();
        if parse_header_line(body).is_none() {
            continue;
        }

        let (head, tail) = markdown.split_at(offset);
        let separator = if ending.is_empty() { "\n" } else { "" };
        return format!("{head}{separator}{toc_block}{tail}");
    }

    format!("{toc_block}{markdown}")
}
