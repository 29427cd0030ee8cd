//! Command-line arguments

use clap::{Parser, Subcommand};

use cleanslate_core::task::MissingTaskPolicy;
use cleanslate_data::{DataConfig, DataSource};

/// CleanSlate task client
///
/// Flags override the `CLEANSLATE_*` environment variables.
#[derive(Parser, Debug)]
#[command(version, about = "CleanSlate task client")]
pub struct Cli {
    /// Use the in-memory demo store instead of the REST backend
    #[arg(long)]
    pub mock: bool,

    /// REST base URL
    #[arg(long)]
    pub api_url: Option<String>,

    /// Treat deleting an unknown task as success
    #[arg(long)]
    pub ignore_missing: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List all tasks
    List,
    /// Show one task
    Show { id: String },
    /// Create a task
    Add {
        title: String,
        #[arg(default_value = "")]
        description: String,
    },
    /// Replace a task's title and description
    Edit {
        id: String,
        title: String,
        #[arg(default_value = "")]
        description: String,
    },
    /// Flip a task's completion flag
    Toggle { id: String },
    /// Delete a task
    Delete { id: String },
}

impl Cli {
    /// Apply the flags on top of an environment-derived config
    pub fn apply(&self, mut config: DataConfig) -> DataConfig {
        if self.mock {
            config.source = DataSource::Mock;
        }
        if let Some(url) = self.api_url.as_deref().map(str::trim).filter(|u| !u.is_empty()) {
            config.base_url = url.to_string();
        }
        if self.ignore_missing {
            config.missing_task_policy = MissingTaskPolicy::Ignore;
        }
        config
    }
}
