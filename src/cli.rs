// CLI layer: argument parsing plus the linear upload flow. The flow is
// a single sequence with no retries: check every file, build the
// payload, send one POST, print the resulting URL.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{ArgAction, Parser};
use indicatif::{ProgressBar, ProgressStyle};

use crate::api::{ApiClient, Gist, GistFile};
use crate::error::GistError;

/// Upload local files as a single gist and print its URL.
#[derive(Parser, Debug)]
#[command(name = "gistup", version, about)]
pub struct Args {
    /// Gist visibility; pass `-p false` for a private gist
    /// (requires GITHUB_TOKEN)
    #[arg(
        short,
        long,
        default_value_t = true,
        action = ArgAction::Set,
        value_name = "BOOL"
    )]
    pub public: bool,

    /// Description for the gist; when given empty, the filenames
    /// joined by ", " are used instead
    #[arg(short, long, default_value = "This is a gist")]
    pub description: String,

    /// Files to include in the gist
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

impl Args {
    /// The input filenames joined by ", ", in argument order.
    pub fn file_list(&self) -> String {
        self.files
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// The effective description: the `-d` value, or the joined
    /// filename list when that value is empty.
    pub fn resolved_description(&self) -> String {
        if self.description.is_empty() {
            self.file_list()
        } else {
            self.description.clone()
        }
    }
}

/// Read every named file into the payload map. A repeated filename
/// overwrites the earlier entry, so the content read last wins.
fn load_files(paths: &[PathBuf]) -> Result<BTreeMap<String, GistFile>, GistError> {
    let mut files = BTreeMap::new();
    for path in paths {
        println!("Checking file: {}", path.display());
        files.insert(path.display().to_string(), GistFile::read(path)?);
    }
    Ok(files)
}

/// Run the upload flow end to end. Each file is read before anything is
/// sent; the first unreadable file aborts the run with no request made.
pub fn run(args: Args) -> Result<()> {
    println!("Files: {}", args.file_list());
    let files = load_files(&args.files)?;

    let gist = Gist {
        description: args.resolved_description(),
        public: args.public,
        files,
    };

    let api = ApiClient::from_env()?;

    println!("OK");
    println!("uploading...");
    // Spinner on stderr while the blocking request is in flight.
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    spinner.set_message("Uploading...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    let response = api.create_gist(&gist);
    spinner.finish_and_clear();
    let response = response?;

    println!("--- Gist URL ---");
    println!("{}", response.html_url());
    Ok(())
}
