//! CLI parser for `plab`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "plab")]
#[command(about = "Prompt Lab CLI: browse catalogs, manage templates, run generations", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data root directory (overrides LAB_DATA_DIR; default "data").
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List catalog problems, optionally filtered by domain and level.
    Problems {
        #[arg(long)]
        domain: Option<String>,
        #[arg(long)]
        level: Option<i64>,
    },
    /// List catalog tools, optionally filtered by category.
    Tools {
        #[arg(long)]
        category: Option<String>,
    },
    /// List saved prompt templates.
    Templates,
    /// Save a named template (system prompt file plus optional user template file).
    SaveTemplate {
        name: String,
        #[arg(long)]
        system_file: PathBuf,
        #[arg(long)]
        user_file: Option<PathBuf>,
    },
    /// Run one generation against the model and record the result.
    Generate {
        /// Problem id from the catalog.
        #[arg(short, long)]
        problem: String,
        /// Tool ids to include (at least one).
        #[arg(short, long, required = true, num_args = 1..)]
        tools: Vec<String>,
        /// Saved template name; default prompts when omitted.
        #[arg(long)]
        template: Option<String>,
        #[arg(long)]
        temperature: Option<f32>,
        #[arg(long)]
        max_tokens: Option<u32>,
    },
    /// Show recent test records, newest first.
    History {
        #[arg(short, long, default_value = "50")]
        limit: usize,
    },
    /// Compare two test records side by side (metrics, config, solutions).
    Compare {
        /// Test id of the first record.
        first: String,
        /// Test id of the second record.
        second: String,
    },
    /// Export one test record as readable text.
    Export {
        /// Test id of the record to export.
        test_id: String,
        /// Write to this file instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}
