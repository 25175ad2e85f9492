use zigwire::cli::commands::CliArgs;
use zigwire::cli::handlers::handle_generate;
use zigwire::util::logging::{self, LoggingConfig};
use zigwire::VERSION;

use clap::Parser;
use tracing::{debug, Level};

fn main() {
    let args = CliArgs::parse();
    init_logging_from_args(&args);

    debug!("zigwire v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = handle_generate(&args);
    std::process::exit(exit_code);
}

fn init_logging_from_args(args: &CliArgs) {
    let level = if let Some(level_str) = &args.log_level {
        logging::parse_level(level_str)
    } else if args.verbose {
        Level::DEBUG
    } else if args.quiet {
        Level::ERROR
    } else {
        return logging::init_from_env();
    };

    logging::init_logging(LoggingConfig::with_level(level));
}
