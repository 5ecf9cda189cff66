// src/cli.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};
use source_metrics_core::LocQuery;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "srcmetrics",
    version,
    about = "Lines of code, test files and test functions for Go, JavaScript/TypeScript and YAML projects"
)]
pub struct Args {
    /// Project root to scan
    #[arg(value_name = "PATH", default_value = ".", value_hint = ValueHint::DirPath)]
    pub path: PathBuf,

    /// Language key (go, js, yaml); defaults to go
    #[arg(short = 'l', long = "lang", value_name = "KEY")]
    pub language: Option<String>,

    /// Print the report as a single JSON object
    #[arg(long)]
    pub json: bool,

    /// Extra directory-name fragments to skip (repeatable, comma-separated)
    #[arg(short = 'e', long = "exclude", value_name = "FRAGMENT", value_delimiter = ',')]
    pub exclude: Vec<String>,
}

impl Args {
    pub fn to_query(&self) -> LocQuery {
        let query = LocQuery::new(&self.path).with_excludes(self.exclude.iter().cloned());
        match &self.language {
            Some(key) => query.with_language(key.clone()),
            None => query,
        }
    }
}
