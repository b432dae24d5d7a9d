use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;

use splicepredict_core::SpliceVariantType;
use splicepredict_io::{StreamSummary, annotate_stream, open_input};

use crate::annotate::handlers::config_from_matches;

///
/// Write one `type<TAB>count` line per splice variant type, zeros included, then the
/// number of skipped rows.
///
fn write_counts<W: Write>(writer: &mut W, summary: &StreamSummary) -> io::Result<()> {
    for splice_variant_type in SpliceVariantType::ALL {
        writeln!(
            writer,
            "{}\t{}",
            splice_variant_type,
            summary.count(splice_variant_type)
        )?;
    }
    writeln!(writer, "skipped\t{}", summary.rows_skipped)?;
    Ok(())
}

pub fn run_classify(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>("input")
        .expect("A path to a VEP table is required.");
    let input = Path::new(input);

    let config = config_from_matches(matches)?;
    let reader = open_input(input).with_context(|| format!("Failed to open {:?}", input))?;

    let summary = annotate_stream(reader, &mut io::sink(), &config)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_counts(&mut handle, &summary)?;
    handle.flush()?;

    Ok(())
}
