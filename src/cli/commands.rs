use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::models::{Category, SearchResults};
use crate::pattern::translate;
use crate::search::{SearchOptions, search};
use crate::utils::{
    enter_parent_dir, file_uri, format_path_with_tilde, get_viminfo_path, path_from_uri,
    sanitize_for_terminal,
};

#[derive(Parser)]
#[command(name = "vim-history-search")]
#[command(version = "0.1.0")]
#[command(about = "Search vim's file history and the filesystem", long_about = None)]
pub struct Cli {
    /// viminfo file to read (default: ~/.viminfo)
    #[arg(long, global = true, env = "VIMINFO")]
    pub viminfo: Option<PathBuf>,

    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search file history, plus the filesystem for path-like queries
    Search {
        /// Search string: ^ anchors the start, $ the end, ~ expands to home
        #[arg(default_value = "", allow_hyphen_values = true)]
        query: String,

        /// Do not match existing paths on disk
        #[arg(long)]
        no_filesystem: bool,

        /// Do not propose paths that do not exist yet
        #[arg(long)]
        no_new: bool,

        /// Keep NERD tree buffers in history results
        #[arg(long)]
        keep_tree_buffers: bool,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the glob pattern a search string translates to
    Pattern {
        #[arg(allow_hyphen_values = true)]
        query: String,
    },
    /// Show the file:// URI handed to the editor for a path
    Uri { path: String },
    /// Resolve a file:// URI the way the editor receives it
    ///
    /// Enters the file's parent directory when possible, then prints the path
    /// and the working directory the editor would start in.
    Open { uri: String },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Some(Commands::Search { query, no_filesystem, no_new, keep_tree_buffers, json }) => {
            let options = SearchOptions {
                include_filesystem: !no_filesystem,
                include_new_file_suggestions: !no_new,
                exclude_tree_buffers: !keep_tree_buffers,
            };
            run_search(cli.viminfo.clone(), query, &options, *json)?;
        }
        Some(Commands::Pattern { query }) => {
            println!("{}", translate(query));
        }
        Some(Commands::Uri { path }) => {
            println!("{}", file_uri(path));
        }
        Some(Commands::Open { uri }) => {
            run_open(uri)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Ignore the error if a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run_search(
    viminfo: Option<PathBuf>,
    query: &str,
    options: &SearchOptions,
    json: bool,
) -> Result<()> {
    let viminfo = match viminfo {
        Some(path) => path,
        None => get_viminfo_path()?,
    };
    tracing::debug!("Using viminfo file {}", format_path_with_tilde(&viminfo));

    let results = search(&viminfo, query, options);

    if json {
        let out = serde_json::to_string_pretty(&results.entries)
            .context("Failed to serialize search results")?;
        println!("{}", out);
    } else {
        print_results(&results, query);
    }

    Ok(())
}

fn run_open(uri: &str) -> Result<()> {
    let path = path_from_uri(uri).ok_or_else(|| anyhow!("Not a file:// URI: {}", uri))?;

    if !enter_parent_dir(&path) {
        tracing::debug!("Staying in the current directory for {}", path.display());
    }
    let cwd = std::env::current_dir().context("Failed to read the working directory")?;

    println!("{}", sanitize_for_terminal(&path.to_string_lossy()));
    println!("{}", sanitize_for_terminal(&cwd.to_string_lossy()));
    Ok(())
}

fn print_results(results: &SearchResults, query: &str) {
    if results.is_empty() {
        println!("No matches for {}", sanitize_for_terminal(query));
        return;
    }

    for category in Category::ALL {
        let mut entries = results.in_category(category).peekable();
        if entries.peek().is_none() {
            continue;
        }
        println!("{}", category.label());
        for entry in entries {
            println!("  {}", sanitize_for_terminal(&entry.display));
        }
    }
}
