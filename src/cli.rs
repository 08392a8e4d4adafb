//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::task::{Category, CategoryFilter};

/// Top-level CLI parser for `tasklist`.
#[derive(Debug, Parser)]
#[command(name = "tasklist", version, about = "Keep a personal to-do list")]
pub struct Cli {
    /// Directory holding saved tasks (overrides `TASKLIST_STORE`).
    #[arg(long, global = true, value_name = "DIR")]
    pub store: Option<PathBuf>,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a new task.
    Add {
        /// Task title.
        title: String,
        /// Category: personal or work.
        #[arg(short, long, default_value_t = Category::Personal)]
        category: Category,
    },
    /// List tasks, grouped by category.
    List {
        /// Show only one category: all, personal or work.
        #[arg(short, long, default_value_t = CategoryFilter::All)]
        category: CategoryFilter,
    },
    /// Mark a task done, or not done if it already is.
    Toggle {
        /// Task id.
        id: String,
    },
    /// Change a task's title or category.
    Edit {
        /// Task id.
        id: String,
        /// New title.
        #[arg(short, long)]
        title: Option<String>,
        /// New category.
        #[arg(short, long)]
        category: Option<Category>,
    },
    /// Delete a task.
    Delete {
        /// Task id.
        id: String,
    },
    /// Delete every task.
    Clear,
    /// Dispatch a raw action given as JSON, e.g. `{"type":"DELETE_TASK","payload":"1"}`.
    Apply {
        /// Action JSON.
        action: String,
    },
}
