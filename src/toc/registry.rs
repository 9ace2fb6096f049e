use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use clap::ValueEnum;
use regex::Regex;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum SeedMode {
    #[default]
    Opaque,
    // `root-N` raises the counter of `root` past `N`.
    FoldSuffixes,
}

// `used` holds every seeded or issued name; no name is issued twice.
#[derive(Debug, Default, Clone)]
pub struct AnchorRegistry {
    counts: HashMap<String, usize>,
    used: HashSet<String>,
}

impl AnchorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(text: &str, mode: SeedMode) -> Self {
        let mut registry = Self::new();
        for name in existing_anchor_names(text) {
            registry.reserve(&name, mode);
        }
        registry
    }

    pub fn reserve(&mut self, name: &str, mode: SeedMode) {
        self.used.insert(name.to_string());

        match mode {
            SeedMode::Opaque => {
                *self.counts.entry(name.to_string()).or_insert(0) += 1;
            }
            SeedMode::FoldSuffixes => match split_numeric_suffix(name) {
                Some((root, index)) => self.raise_count(root, index.saturating_add(1)),
                None => self.raise_count(name, 1),
            },
        }
    }

    pub fn count(&self, base: &str) -> usize {
        self.counts.get(base).copied().unwrap_or(0)
    }

    pub fn next_anchor(&mut self, base: &str) -> String {
        loop {
            let index = self.count(base);
            self.counts.insert(base.to_string(), index + 1);

            let candidate = if index == 0 {
                base.to_string()
            } else {
                format!("{base}-{index}")
            };

            if self.used.insert(candidate.clone()) {
                return candidate;
            }
        }
    }

    fn raise_count(&mut self, base: &str, at_least: usize) {
        let entry = self.counts.entry(base.to_string()).or_insert(0);
        if *entry < at_least {
            *entry = at_least;
        }
    }
}

pub fn generate_anchor_name<F>(header: &str, registry: &mut AnchorRegistry, derive: F) -> String
where
    F: Fn(&str) -> String,
{
    let base = derive(header);
    registry.next_anchor(&base)
}

static ANCHOR_TAG_REGEX: OnceLock<Option<Regex>> = OnceLock::new();

fn anchor_tag_regex() -> Option<&'static Regex> {
    ANCHOR_TAG_REGEX
        .get_or_init(|| Regex::new(r#"<a name="(.+?)"></a>"#).ok())
        .as_ref()
}

pub(super) fn existing_anchor_names(text: &str) -> Vec<String> {
    let Some(pattern) = anchor_tag_regex() else {
        return Vec::new();
    };

    pattern
        .captures_iter(text)
        .filter_map(|captures| captures.get(1))
        .map(|name| name.as_str().to_string())
        .collect()
}

fn split_numeric_suffix(name: &str) -> Option<(&str, usize)> {
    let (root, suffix) = name.rsplit_once('-')?;
    if root.is_empty() || suffix.is_empty() || !suffix.chars().all(|ch| ch.is_ascii_digit()) {
        return None;
    }

    let index = suffix.parse::<usize>().ok()?;
    if index == 0 {
        return None;
    }

    Some((root, index))
}
