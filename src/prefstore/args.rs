use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "prefstore")]
#[command(about = "Hierarchical, schema-reconciling preference store", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding settings.json (defaults to the platform data dir)
    #[arg(short, long, global = true)]
    pub dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read one parameter (defaults fill in anything unset)
    Get {
        /// Dotted path, e.g. comms.webcamFPS
        path: String,
    },

    /// Read a whole page of parameters as JSON
    Page {
        /// Dotted path of the page, e.g. comms
        path: String,
    },

    /// Write one parameter
    Set {
        /// Dotted path, e.g. comms.noiseGateThreshold
        path: String,

        /// New value, parsed as JSON; anything unparsable is a string
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Restore a subtree to its default values
    Reset {
        /// Dotted path of the subtree, e.g. comms
        path: String,
    },
}
