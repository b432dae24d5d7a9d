use std::io::Write;
use std::sync::OnceLock;
use std::time::Instant;

static START_TIME: OnceLock<Instant> = OnceLock::new();

const LOG_ENV: &str = "RUST_LOG";

fn build_logger(verbose: bool, env_filters: Option<&str>) -> env_logger::Builder {
    let start = *START_TIME.get_or_init(Instant::now);

    let level = if verbose {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Warn
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    if let Some(filters) = env_filters {
        builder.parse_filters(filters);
    }
    builder
        .format(move |buf, record| {
            let elapsed = start.elapsed().as_secs();
            writeln!(
                buf,
                "[{:02}:{:02}:{:02}] {}: {}",
                elapsed / 3600,
                (elapsed % 3600) / 60,
                elapsed % 60,
                record.level(),
                record.args()
            )
        })
        .target(env_logger::Target::Stderr);
    builder
}

/// Set up stderr logging with elapsed wall time on every line.
///
/// `--verbose` lowers the level to Info (run summary, per-type counts); otherwise only
/// warnings such as skipped rows are shown. Directives in `RUST_LOG` are applied on top,
/// so `RUST_LOG=debug` wins over both.
pub fn init_logger(verbose: bool) {
    let env_filters = std::env::var(LOG_ENV).ok();
    build_logger(verbose, env_filters.as_deref()).init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::LevelFilter;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case(false, None, LevelFilter::Warn)]
    #[case(true, None, LevelFilter::Info)]
    #[case(false, Some("debug"), LevelFilter::Debug)]
    #[case(true, Some("error"), LevelFilter::Error)]
    fn test_env_filters_override_verbosity(
        #[case] verbose: bool,
        #[case] env_filters: Option<&str>,
        #[case] expected: LevelFilter,
    ) {
        let logger = build_logger(verbose, env_filters).build();
        assert_eq!(logger.filter(), expected);
    }
}
