use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::toc::{AnchorStrategy, PatchMode, SeedMode};

#[derive(Parser, Debug)]
#[command(
    name = "test2doc",
    version,
    about = "Markdown, notebook and metadata utilities for documentation pipelines"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Toc(TocArgs),
    Rename(RenameArgs),
    Pdf(PdfArgs),
    Notebook(NotebookArgs),
}

#[derive(Args, Debug, Clone)]
pub struct TocArgs {
    #[arg(long)]
    pub input: PathBuf,

    #[arg(long, conflicts_with = "in_place")]
    pub output: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub in_place: bool,

    #[arg(long, default_value_t = false)]
    pub backup: bool,

    #[arg(long, value_enum, default_value_t = AnchorStrategy::Md5)]
    pub anchor_base: AnchorStrategy,

    #[arg(long, value_enum, default_value_t = SeedMode::Opaque)]
    pub seed_mode: SeedMode,

    #[arg(long, value_enum, default_value_t = PatchMode::HeaderLine)]
    pub patch_mode: PatchMode,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct RenameArgs {
    #[arg(long = "file", required = true)]
    pub files: Vec<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub apply: bool,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct PdfArgs {
    #[arg(long)]
    pub input: PathBuf,

    #[arg(long)]
    pub output: PathBuf,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long, default_value_t = false)]
    pub with_toc: bool,
}

#[derive(Args, Debug, Clone)]
pub struct NotebookArgs {
    #[command(subcommand)]
    pub command: NotebookCommands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum NotebookCommands {
    Largest(NotebookLargestArgs),
    Clear(NotebookClearArgs),
}

#[derive(Args, Debug, Clone)]
pub struct NotebookLargestArgs {
    #[arg(long)]
    pub notebook: PathBuf,

    #[arg(long, default_value_t = 5)]
    pub count: usize,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct NotebookClearArgs {
    #[arg(long)]
    pub notebook: PathBuf,

    #[arg(long = "cell-id", conflicts_with = "largest")]
    pub cell_ids: Vec<String>,

    #[arg(long)]
    pub largest: Option<usize>,

    #[arg(long, conflicts_with = "in_place")]
    pub output: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub in_place: bool,

    #[arg(long, default_value_t = false)]
    pub backup: bool,
}
