use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

/// Raindrop - browse and share files over HTTP
#[derive(Parser, Debug)]
#[command(name = "raindrop")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "PATH", env = "RAINDROP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a directory (or a JSON resource list) as a collapsible tree
    Tree(TreeArgs),

    /// Serve a directory as a browsable resource tree
    Serve(ServeArgs),

    /// Share a single file through a download page
    Share(ShareArgs),

    /// Load a page region from a running server and print it
    Fetch(FetchArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),

    /// Print the man page
    Manpage,
}

impl Command {
    /// Verbosity used when no `-v` is given. Server sessions, downloads
    /// and requests are logged at info.
    pub fn default_verbosity(&self) -> u8 {
        match self {
            Command::Serve(_) | Command::Share(_) => 1,
            _ => 0,
        }
    }
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Args, Debug)]
pub struct TreeArgs {
    /// Directory to list
    pub path: Option<PathBuf>,

    /// Read the resource list from a JSON file instead ("-" for stdin)
    #[arg(short, long, value_name = "FILE", conflicts_with = "path")]
    pub input: Option<PathBuf>,

    /// Print the resource list as JSON instead of markup
    #[arg(long)]
    pub json: bool,

    /// Maximum nesting depth
    #[arg(short = 'd', long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Include hidden files
    #[arg(short, long)]
    pub all: bool,

    /// URL prefix for file links
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Directory to serve
    pub root: Option<PathBuf>,

    /// Address to bind
    #[arg(long, value_name = "ADDR")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Include hidden files
    #[arg(short, long)]
    pub all: bool,
}

#[derive(Args, Debug)]
pub struct ShareArgs {
    /// File offered for download
    #[arg(short = 'i', long = "file", value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Text file shown as a snippet on the page
    #[arg(short = 'I', long = "content", value_name = "FILE")]
    pub content: Option<PathBuf>,

    /// Message shown on the page
    #[arg(short, long, value_name = "TEXT", default_value = "")]
    pub message: String,

    /// Port to listen on
    #[arg(short, long, value_name = "PORT")]
    pub port: Option<u16>,
}

/// Page regions that can be fetched.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// The resource tree from /api/resources
    Resources,
    /// The share page from /api/info
    Share,
    /// The file card from /api/files
    Files,
}

#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Which page region to load
    #[arg(value_enum)]
    pub page: PageKind,

    /// Base URL of the server
    #[arg(long, value_name = "URL", default_value = "http://localhost:8080")]
    pub url: String,

    /// Maximum nesting depth of the rendered tree
    #[arg(short = 'd', long, value_name = "N")]
    pub max_depth: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_tree_command() {
        let cli = Cli::parse_from(["raindrop", "tree", "/srv/media"]);
        match cli.command {
            Command::Tree(args) => {
                assert_eq!(args.path, Some(PathBuf::from("/srv/media")));
                assert!(!args.json);
            }
            _ => panic!("Expected Tree command"),
        }
    }

    #[test]
    fn parse_tree_input_conflicts_with_path() {
        let result = Cli::try_parse_from(["raindrop", "tree", "dir", "--input", "a.json"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_share_with_options() {
        let cli = Cli::parse_from([
            "raindrop", "share", "-i", "movie.mp4", "-I", "notes.txt", "-m", "enjoy", "-p", "9000",
        ]);
        match cli.command {
            Command::Share(args) => {
                assert_eq!(args.file, Some(PathBuf::from("movie.mp4")));
                assert_eq!(args.content, Some(PathBuf::from("notes.txt")));
                assert_eq!(args.message, "enjoy");
                assert_eq!(args.port, Some(9000));
            }
            _ => panic!("Expected Share command"),
        }
    }

    #[test]
    fn parse_fetch_command() {
        let cli = Cli::parse_from(["raindrop", "fetch", "files", "--url", "http://host:1130"]);
        match cli.command {
            Command::Fetch(args) => {
                assert_eq!(args.page, PageKind::Files);
                assert_eq!(args.url, "http://host:1130");
            }
            _ => panic!("Expected Fetch command"),
        }
    }

    #[test]
    fn servers_log_at_info_by_default() {
        let share = Cli::parse_from(["raindrop", "share"]);
        assert_eq!(share.command.default_verbosity(), 1);
        let serve = Cli::parse_from(["raindrop", "serve"]);
        assert_eq!(serve.command.default_verbosity(), 1);
        let tree = Cli::parse_from(["raindrop", "tree"]);
        assert_eq!(tree.command.default_verbosity(), 0);
    }

    #[test]
    fn global_verbose_flag() {
        let cli = Cli::parse_from(["raindrop", "-vvv", "tree"]);
        assert_eq!(cli.verbose, 3);
    }
}
