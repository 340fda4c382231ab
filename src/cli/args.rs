use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "picture-search",
    version,
    about = "Upload a picture, show its feature vector and search for the closest images"
)]
pub struct Cli {
    /// YAML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend origin, e.g. http://localhost:8765
    #[arg(long, global = true)]
    pub origin: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Upload a picture and print the returned feature vector
    Upload { file: Option<PathBuf> },

    /// Search with a feature vector from an earlier upload
    Search {
        #[arg(long)]
        vector: String,
    },

    /// Compare the configured pair of reference pictures
    Vision {
        #[arg(long)]
        picture1: Option<String>,
        #[arg(long)]
        picture2: Option<String>,
    },

    /// Upload a picture, then search with its vector if the upload succeeded
    Run { file: Option<PathBuf> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_with_globals() {
        let cli = Cli::try_parse_from([
            "picture-search",
            "run",
            "cat.jpg",
            "--origin",
            "http://backend:8765",
        ])
        .unwrap();

        assert_eq!(cli.origin.as_deref(), Some("http://backend:8765"));
        assert!(matches!(cli.command, Command::Run { file: Some(ref f) } if f.ends_with("cat.jpg")));
    }

    #[test]
    fn test_upload_without_file_parses() {
        let cli = Cli::try_parse_from(["picture-search", "upload"]).unwrap();
        assert!(matches!(cli.command, Command::Upload { file: None }));
    }

    #[test]
    fn test_search_requires_vector() {
        assert!(Cli::try_parse_from(["picture-search", "search"]).is_err());
    }
}
