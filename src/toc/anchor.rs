use clap::ValueEnum;
use md5::{Digest, Md5};
use sha2::Sha256;

const ANCHOR_BASE_LEN: usize = 8;
const EMPTY_SLUG: &str = "section";

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum AnchorStrategy {
    #[default]
    Md5,
    Sha256,
    Slug,
}

impl AnchorStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha256 => "sha256",
            Self::Slug => "slug",
        }
    }

    pub fn derive(self, header: &str) -> String {
        match self {
            Self::Md5 => md5_anchor_base(header),
            Self::Sha256 => sha256_anchor_base(header),
            Self::Slug => slug_anchor_base(header),
        }
    }
}

pub fn normalize_header(header: &str) -> String {
    header
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join("-")
}

pub fn anchor_tag(anchor_name: &str) -> String {
    format!("<a name=\"{anchor_name}\"></a>")
}

fn md5_anchor_base(header: &str) -> String {
    let digest = Md5::digest(normalize_header(header).as_bytes());
    truncate_hex(format!("{digest:x}"))
}

fn sha256_anchor_base(header: &str) -> String {
    let digest = Sha256::digest(normalize_header(header).as_bytes());
    truncate_hex(format!("{digest:x}"))
}

fn truncate_hex(mut hex: String) -> String {
    hex.truncate(ANCHOR_BASE_LEN);
    hex
}

// GitHub-style: keeps ascii alphanumerics and '_', folds spaces and hyphens.
fn slug_anchor_base(header: &str) -> String {
    let mut slug = String::with_capacity(header.len());
    let mut pending_hyphen = false;

    for character in header.trim().chars() {
        if character.is_ascii_alphanumeric() || character == '_' {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(character.to_ascii_lowercase());
        } else if character.is_whitespace() || character == '-' {
            pending_hyphen = true;
        }
    }

    if slug.is_empty() {
        EMPTY_SLUG.to_string()
    } else {
        slug
    }
}
