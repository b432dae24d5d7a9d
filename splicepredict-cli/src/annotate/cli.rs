use clap::{Arg, ArgAction, Command, arg, value_parser};

pub const ANNOTATE_CMD: &str = "annotate";

///
/// Options shared by every subcommand that streams a VEP table.
///
pub fn stream_args() -> Vec<Arg> {
    vec![
        Arg::new("input")
            .required(true)
            .help("VEP tab output with MaxEntScan fields, plain or gzipped ('-' for stdin)"),
        arg!(--config <CONFIG>)
            .required(false)
            .help("TOML or YAML file with run settings; flags override it"),
        arg!(--threads <THREADS>)
            .required(false)
            .value_parser(value_parser!(usize))
            .help("Worker threads (default: all cores)"),
        Arg::new("batch-size")
            .long("batch-size")
            .required(false)
            .value_parser(value_parser!(usize))
            .help("Rows held in memory per batch"),
        Arg::new("on-malformed")
            .long("on-malformed")
            .required(false)
            .value_parser(["skip", "abort"])
            .help("Skip rows that fail to parse, or stop at the first one"),
        arg!(--sentinel <SENTINEL>)
            .required(false)
            .help("Token that marks an empty field (default: '-')"),
        arg!(--progress)
            .action(ArgAction::SetTrue)
            .help("Show a progress spinner on stderr"),
        arg!(-v --verbose)
            .action(ArgAction::SetTrue)
            .help("Log the run summary and per-type counts"),
    ]
}

pub fn create_annotate_cli() -> Command {
    Command::new(ANNOTATE_CMD)
        .about("Append spliceVariantType, nativeLoss and donorGain columns to a VEP table.")
        .args(stream_args())
        .arg(
            arg!(--output <OUTPUT>)
                .required(false)
                .help("Output path, or a basename for '<name>.splicepredict.tsv.gz' ('-': stdout)"),
        )
        .arg(
            Arg::new("drop-metadata")
                .long("drop-metadata")
                .action(ArgAction::SetTrue)
                .help("Do not copy the '##' metadata lines to the output"),
        )
}
