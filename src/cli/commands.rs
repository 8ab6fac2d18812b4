//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "serene")]
#[command(about = "Local rich-text diary", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new diary
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Theme to use until one is chosen (light, dark)
        #[arg(long, default_value = "light")]
        system_theme: String,
    },

    /// Write a new entry
    New {
        /// Entry title ("Untitled Entry" when blank)
        #[arg(short, long, default_value = "")]
        title: String,

        /// Entry content (supports **bold**, *italic* and <u>underline</u>)
        #[arg(short, long, default_value = "")]
        content: String,

        /// Mood emoji
        #[arg(short, long, default_value = "🌸")]
        mood: String,

        /// Font style identifier
        #[arg(long)]
        font: Option<String>,

        /// Text color identifier
        #[arg(long)]
        color: Option<String>,

        /// Image file to attach (repeatable)
        #[arg(long = "image", value_name = "FILE")]
        images: Vec<PathBuf>,

        /// Tag (repeatable)
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,
    },

    /// List entries, newest first
    List {
        /// Only entries whose title, content or mood contain this text
        #[arg(short, long)]
        search: Option<String>,

        /// Show at most this many entries
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Show one entry
    Show {
        /// Entry id
        id: String,

        /// Render the content markup as HTML
        #[arg(long)]
        render: bool,
    },

    /// Change an existing entry
    Edit {
        /// Entry id
        id: String,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        content: Option<String>,

        #[arg(short, long)]
        mood: Option<String>,

        #[arg(long)]
        font: Option<String>,

        #[arg(long)]
        color: Option<String>,

        /// Image file to attach (repeatable)
        #[arg(long = "add-image", value_name = "FILE")]
        add_images: Vec<PathBuf>,

        /// Position of an image to remove (0-based)
        #[arg(long, value_name = "INDEX")]
        remove_image: Option<usize>,

        /// Transcribed speech to append to the content
        #[arg(long, value_name = "TEXT")]
        dictate: Option<String>,
    },

    /// Delete an entry
    Delete {
        /// Entry id
        id: String,
    },

    /// Show or change the theme
    Theme {
        /// Theme to switch to (light, dark)
        value: Option<String>,

        /// Switch to the other theme
        #[arg(long, conflicts_with = "value")]
        toggle: bool,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Print today's quote
    Quote,

    /// Print a readiness report as JSON
    Health,
}
