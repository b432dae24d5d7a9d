use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use splicepredict_io::{
    AnnotateConfig, MalformedPolicy, annotate_stream, open_input, open_output,
    resolve_output_path,
};

///
/// Build the run settings: defaults, then the `--config` file, then individual flags.
///
pub fn config_from_matches(matches: &ArgMatches) -> Result<AnnotateConfig> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => AnnotateConfig::from_file(path)
            .with_context(|| format!("Failed to load config file {}", path))?,
        None => AnnotateConfig::default(),
    };

    if let Some(threads) = matches.get_one::<usize>("threads") {
        config.threads = Some(*threads);
    }
    if let Some(batch_size) = matches.get_one::<usize>("batch-size") {
        config.batch_size = *batch_size;
    }
    if let Some(policy) = matches.get_one::<String>("on-malformed") {
        config.on_malformed = MalformedPolicy::from_str(policy).map_err(anyhow::Error::msg)?;
    }
    if let Some(sentinel) = matches.get_one::<String>("sentinel") {
        config.sentinel = sentinel.clone();
    }
    if matches.get_flag("progress") {
        config.progress = true;
    }
    if matches.try_get_one::<bool>("drop-metadata").ok().flatten() == Some(&true) {
        config.keep_metadata = false;
    }

    config.validate()?;
    Ok(config)
}

pub fn run_annotate(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>("input")
        .expect("A path to a VEP table is required.");
    let input = Path::new(input);

    let output = resolve_output_path(input, matches.get_one::<String>("output").map(Path::new));
    let config = config_from_matches(matches)?;

    let reader = open_input(input).with_context(|| format!("Failed to open {:?}", input))?;
    let mut writer =
        open_output(&output).with_context(|| format!("Failed to create {:?}", output))?;

    let summary = annotate_stream(reader, &mut writer, &config)?;
    writer
        .finish()
        .with_context(|| format!("Failed to finish writing {:?}", output))?;

    info!(
        "Wrote {} annotated rows to {:?} ({} skipped)",
        summary.rows_annotated, output, summary.rows_skipped
    );

    Ok(())
}
