use clap::Parser;
use std::path::PathBuf;

/// VS Code workspace generator for Zig projects
#[derive(Parser, Debug)]
#[command(
    name = "zigwire",
    about = "Generate VS Code workspace configuration from a Zig project's build steps",
    version,
    author,
    long_about = "zigwire runs `zig build --list-steps` in the project directory, extracts \
                  the declared steps, and writes extensions.json, tasks.json, launch.json \
                  and settings.json into the output directory.\n\n\
                  Examples:\n  \
                  zigwire . .vscode\n  \
                  zigwire /path/to/project /path/to/project/.vscode"
)]
pub struct CliArgs {
    #[arg(value_name = "PROJECT_DIR", help = "Directory containing build.zig")]
    pub project_dir: PathBuf,

    #[arg(
        value_name = "OUTPUT_DIR",
        help = "Directory to write the configuration files into (created if absent)"
    )]
    pub output_dir: PathBuf,

    #[arg(long, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, help = "Verbose logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}
