use clap::{Parser, Subcommand, value_parser};
use clap_complete::Shell;

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Commands to handle current profile to use
    Profile { profile: Option<String> },

    /// Shows the public system parameters
    #[command(alias = "parameters")]
    Params {
        #[arg(short, long, default_value = "false")]
        json: bool,
    },

    /// Lists active tags, most used first
    Tags {
        #[arg(short, long, default_value = "false")]
        json: bool,
    },

    /// Mounts a page path, initializing the scheduler for admin pages
    Visit {
        /// Navigation path, e.g. /admin/dashboard
        path: String,
    },

    /// Prints the theme provider props a page would be wrapped with
    Theme {
        /// Page path being wrapped
        #[arg(default_value = "/")]
        path: String,
    },

    /// Generate shell completion scripts
    Completion {
        // Shell type to generate completion script for
        #[arg(value_parser = value_parser!(Shell))]
        shell: Shell,
    },
}
