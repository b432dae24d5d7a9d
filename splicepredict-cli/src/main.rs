mod annotate;
mod classify;
mod logging;

use anyhow::Result;
use clap::Command;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "splicepredict";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("Databio")
        .about("Annotate VEP MaxEntScan output with splice region, native loss and donor gain.")
        .subcommand_required(true)
        .subcommand(annotate::cli::create_annotate_cli())
        .subcommand(classify::cli::create_classify_cli())
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // ANNOTATE
        //
        Some((annotate::cli::ANNOTATE_CMD, matches)) => {
            logging::init_logger(matches.get_flag("verbose"));
            annotate::handlers::run_annotate(matches)?;
        }

        //
        // CLASSIFY (counts only)
        //
        Some((classify::cli::CLASSIFY_CMD, matches)) => {
            logging::init_logger(matches.get_flag("verbose"));
            classify::handlers::run_classify(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
