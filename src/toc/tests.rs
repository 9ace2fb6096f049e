use super::anchor::{AnchorStrategy, anchor_tag, normalize_header};
use super::assemble::{
    PatchMode, TOC_TITLE, TocEntry, TocOptions, add_toc_to_markdown, add_toc_with,
    add_toc_with_deriver, extract_headers, render_toc_block,
};
use super::registry::{AnchorRegistry, SeedMode, existing_anchor_names, generate_anchor_name};

const TITLE_MD5: &str = "d5d3db17";
const SECTION_MD5: &str = "73d5342e";

#[test]
fn normalize_header_collapses_whitespace_and_case() {
    assert_eq!(normalize_header("  My  Header\t"), "my-header");
    assert_eq!(normalize_header("my header"), "my-header");
}

#[test]
fn md5_anchor_base_matches_truncated_digest() {
    assert_eq!(AnchorStrategy::Md5.derive("Title"), TITLE_MD5);
    assert_eq!(AnchorStrategy::Md5.derive("My  Header"), "d0a42641");
    assert_eq!(
        AnchorStrategy::Md5.derive("My  Header"),
        AnchorStrategy::Md5.derive(" my header ")
    );
}

#[test]
fn sha256_anchor_base_is_eight_hex_chars() {
    let base = AnchorStrategy::Sha256.derive("Section");
    assert_eq!(base, "3fb45623");
    assert_eq!(base.len(), 8);
}

#[test]
fn slug_anchor_base_follows_github_shape() {
    assert_eq!(AnchorStrategy::Slug.derive("Hello World"), "hello-world");
    assert_eq!(
        AnchorStrategy::Slug.derive("API: Authentication (v2)"),
        "api-authentication-v2"
    );
    assert_eq!(AnchorStrategy::Slug.derive("  -- spaced -- out  "), "spaced-out");
    assert_eq!(AnchorStrategy::Slug.derive("!!!"), "section");
}

#[test]
fn registry_suffixes_repeated_bases_in_order() {
    let mut registry = AnchorRegistry::new();
    let derive = |_: &str| "abc".to_string();

    assert_eq!(generate_anchor_name("a", &mut registry, derive), "abc");
    assert_eq!(generate_anchor_name("b", &mut registry, derive), "abc-1");
    assert_eq!(generate_anchor_name("c", &mut registry, derive), "abc-2");
    assert_eq!(registry.count("abc"), 3);
}

#[test]
fn registry_opaque_seed_reserves_verbatim_names() {
    let mut registry = AnchorRegistry::seeded(
        "x <a name=\"abc\"></a> y <a name=\"abc-1\"></a>",
        SeedMode::Opaque,
    );

    assert_eq!(registry.count("abc"), 1);
    assert_eq!(registry.count("abc-1"), 1);

    // abc-1 is taken verbatim, so the counter skips past it.
    assert_eq!(registry.next_anchor("abc"), "abc-2");
}

#[test]
fn registry_fold_seed_raises_root_counter() {
    let mut registry = AnchorRegistry::seeded("<a name=\"abc-3\"></a>", SeedMode::FoldSuffixes);

    assert_eq!(registry.count("abc"), 4);
    assert_eq!(registry.count("abc-3"), 0);
    assert_eq!(registry.next_anchor("abc"), "abc-4");
}

#[test]
fn registry_fold_seed_leaves_non_numeric_suffixes_alone() {
    let mut registry =
        AnchorRegistry::seeded("<a name=\"getting-started\"></a>", SeedMode::FoldSuffixes);

    assert_eq!(registry.count("getting-started"), 1);
    assert_eq!(registry.next_anchor("getting-started"), "getting-started-1");
}

#[test]
fn registry_never_reissues_a_suffixed_name_as_a_base() {
    let mut registry = AnchorRegistry::new();

    assert_eq!(registry.next_anchor("a"), "a");
    assert_eq!(registry.next_anchor("a"), "a-1");
    assert_eq!(registry.next_anchor("a-1"), "a-1-1");
}

#[test]
fn existing_anchor_names_finds_every_tag() {
    let names = existing_anchor_names(
        "# One <a name=\"first\"></a>\ntext\n## Two <a name=\"second\"></a> <a name=\"first\"></a>\n",
    );
    assert_eq!(names, vec!["first", "second", "first"]);
}

#[test]
fn extract_headers_reads_level_and_trimmed_text() {
    let headers = extract_headers("# Title\nbody #not a header\n### Deep  \n#NoSpace\n#\n");

    assert_eq!(headers.len(), 2);
    assert_eq!(headers[0].level, 1);
    assert_eq!(headers[0].text, "Title");
    assert_eq!(headers[0].line_index, 0);
    assert_eq!(headers[1].level, 3);
    assert_eq!(headers[1].marker, "###");
    assert_eq!(headers[1].raw_text, "Deep  ");
    assert_eq!(headers[1].text, "Deep");
    assert_eq!(headers[1].line_index, 2);
}

#[test]
fn extract_headers_requires_text_after_marker_space() {
    let headers = extract_headers("## \n##  Spaced\n##\tTab\n##x # y\n#### Four\r\n");

    assert_eq!(headers.len(), 2);
    assert_eq!(headers[0].marker, "##");
    assert_eq!(headers[0].raw_text, " Spaced");
    assert_eq!(headers[0].text, "Spaced");
    assert_eq!(headers[1].level, 4);
    assert_eq!(headers[1].raw_text, "Four");
    assert_eq!(headers[1].line_index, 4);
}

#[test]
fn toc_entry_indents_four_spaces_per_level() {
    let entry = TocEntry {
        level: 3,
        text: "Deep".to_string(),
        anchor: "abc".to_string(),
    };
    assert_eq!(entry.render(), "        - [Deep](#abc)");
}

#[test]
fn add_toc_handles_duplicate_sections() {
    let output = add_toc_to_markdown("# Title\n## Section\n## Section\n");

    let expected = format!(
        "# Title <a name=\"{t}\"></a>\n\
         # Table of contents\n\
         - [Title](#{t})\n    \
         - [Section](#{s})\n    \
         - [Section](#{s}-1)\n\n\
         ## Section <a name=\"{s}\"></a>\n\
         ## Section <a name=\"{s}-1\"></a>\n",
        t = TITLE_MD5,
        s = SECTION_MD5,
    );
    assert_eq!(output, expected);
    assert_eq!(output.matches("<a name=").count(), 3);
}

#[test]
fn add_toc_lists_every_header_in_source_order() {
    let markdown = "# Guide\nintro\n## Install\n### Linux\n## Usage\n# Appendix\n";
    let outcome = add_toc_with(markdown, &TocOptions::default());

    let texts = outcome
        .entries
        .iter()
        .map(|entry| entry.text.as_str())
        .collect::<Vec<&str>>();
    assert_eq!(texts, vec!["Guide", "Install", "Linux", "Usage", "Appendix"]);
    assert_eq!(outcome.anchors_inserted, 5);

    let anchors = outcome
        .entries
        .iter()
        .map(|entry| entry.anchor.as_str())
        .collect::<std::collections::HashSet<&str>>();
    assert_eq!(anchors.len(), 5);
    assert!(anchors.iter().all(|anchor| anchor.len() == 8));
}

#[test]
fn add_toc_without_headers_prepends_title_only() {
    let markdown = "just text\nno headers here\n";
    let output = add_toc_to_markdown(markdown);

    assert_eq!(output, format!("{TOC_TITLE}\n\n{markdown}"));
}

#[test]
fn add_toc_terminates_trailing_header_line() {
    let output = add_toc_to_markdown("# Title");

    assert_eq!(
        output,
        format!("# Title <a name=\"{TITLE_MD5}\"></a>\n# Table of contents\n- [Title](#{TITLE_MD5})\n\n")
    );
}

#[test]
fn add_toc_preserves_crlf_line_endings() {
    let output = add_toc_to_markdown("# Title\r\ntext\r\n");

    assert!(output.starts_with(&format!("# Title <a name=\"{TITLE_MD5}\"></a>\r\n# Table of contents")));
    assert!(output.ends_with("\n\ntext\r\n"));
}

#[test]
fn add_toc_does_not_reuse_anchor_already_in_document() {
    let markdown = format!("# Title\n<a name=\"{TITLE_MD5}\"></a>\nbody\n");
    let outcome = add_toc_with(&markdown, &TocOptions::default());

    assert_eq!(outcome.entries.len(), 1);
    assert_eq!(outcome.entries[0].anchor, format!("{TITLE_MD5}-1"));
    assert_eq!(outcome.anchors_inserted, 1);
    assert_eq!(outcome.markdown.matches(&anchor_tag(TITLE_MD5)).count(), 1);
    assert!(
        outcome
            .markdown
            .starts_with(&format!("# Title {}\n", anchor_tag(&format!("{TITLE_MD5}-1"))))
    );
}

#[test]
fn add_toc_runs_twice_on_its_own_output() {
    let first = add_toc_to_markdown("# Title\n## Section\n## Section\n");
    let second = add_toc_to_markdown(&first);

    assert!(second.contains(&anchor_tag(TITLE_MD5)));
    assert!(second.contains(&anchor_tag(&format!("{SECTION_MD5}-1"))));
    assert_eq!(extract_headers(&second).len(), 5);
    assert_eq!(second.matches(TOC_TITLE).count(), 2);
}

#[test]
fn header_line_patch_ignores_quoted_copies() {
    let markdown = "> ## Setup\n# Title\n## Setup\n";
    let outcome = add_toc_with(markdown, &TocOptions::default());
    let setup_tag = anchor_tag(&outcome.entries[1].anchor);

    assert!(outcome.markdown.starts_with("> ## Setup\n# Title"));
    assert!(outcome.markdown.contains(&format!("\n## Setup {setup_tag}\n")));
}

#[test]
fn first_occurrence_patch_hits_earliest_literal_match() {
    let markdown = "> ## Setup\n# Title\n## Setup\n";
    let options = TocOptions {
        patch_mode: PatchMode::FirstOccurrence,
        ..TocOptions::default()
    };
    let outcome = add_toc_with(markdown, &options);
    let setup_tag = anchor_tag(&outcome.entries[1].anchor);

    assert!(outcome.markdown.starts_with(&format!("> ## Setup {setup_tag}\n")));
    assert!(outcome.markdown.ends_with("\n## Setup\n"));
}

#[test]
fn custom_deriver_replaces_hashing() {
    let outcome = add_toc_with_deriver(
        "# Alpha\n## Alpha\n",
        SeedMode::Opaque,
        PatchMode::HeaderLine,
        |header| header.to_lowercase(),
    );

    let anchors = outcome
        .entries
        .iter()
        .map(|entry| entry.anchor.as_str())
        .collect::<Vec<&str>>();
    assert_eq!(anchors, vec!["alpha", "alpha-1"]);
    assert!(outcome.markdown.contains("## Alpha <a name=\"alpha-1\"></a>"));
}

#[test]
fn toc_block_with_no_entries_is_title_only() {
    assert_eq!(render_toc_block(&[]), "# Table of contents\n\n");
}
