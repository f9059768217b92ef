use std::process::ExitCode;
use clap::Parser;
use log::{debug, error};
use font_reveal::cli::Args;
use font_reveal::organizer;
use font_reveal::utils::init_logging;

fn main() -> ExitCode {
    // Usage errors exit with status 2 from here.
    let args = Args::parse();
    let debug = args.debug;

    let config = match args.into_config() {
        Ok(config) => config,
        Err(e) => {
            init_logging(debug);
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    init_logging(config.debug_mode);
    debug!("Running with {:?}", config);

    match organizer::run(&config) {
        Ok(summary) => {
            debug!("Run summary: {:?}", summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
