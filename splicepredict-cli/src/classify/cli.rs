use clap::Command;

use crate::annotate::cli::stream_args;

pub const CLASSIFY_CMD: &str = "classify";

pub fn create_classify_cli() -> Command {
    Command::new(CLASSIFY_CMD)
        .about("Count the splice variant types of a VEP table without writing it back.")
        .args(stream_args())
}
