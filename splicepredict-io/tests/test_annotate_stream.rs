use std::fs::File;
use std::io::{self, BufWriter, Cursor, Read, Write};
use std::path::Path;

use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use pretty_assertions::assert_eq;
use rstest::*;

use splicepredict_core::SpliceVariantType;
use splicepredict_io::{
    AnnotateConfig, MalformedPolicy, OutputSink, StreamError, annotate_stream, open_input,
    open_output, resolve_output_path,
};

#[fixture]
fn path_to_vep_table() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/../tests/data/vep_maxentscan.tsv")
}

fn read_gz(path: &Path) -> String {
    let mut text = String::new();
    GzDecoder::new(File::open(path).unwrap())
        .read_to_string(&mut text)
        .unwrap();
    text
}

fn annotate_file(input: &Path, output: &Path, config: &AnnotateConfig) -> String {
    let reader = open_input(input).unwrap();
    let mut writer = open_output(output).unwrap();
    annotate_stream(reader, &mut writer, config).unwrap();
    writer.finish().unwrap();
    read_gz(output)
}

/// Accepts writes until the first flush, then fails like a full disk.
struct FailAfterFlush {
    flushed: bool,
}

impl Write for FailAfterFlush {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.flushed {
            return Err(io::Error::new(io::ErrorKind::StorageFull, "no space left"));
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushed = true;
        Ok(())
    }
}

mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[rstest]
    fn test_annotates_every_scenario(path_to_vep_table: &str) {
        let tempdir = tempfile::tempdir().unwrap();
        let basename = tempdir.path().join("sample");
        let output = resolve_output_path(Path::new(path_to_vep_table), Some(basename.as_path()));
        assert!(output.to_string_lossy().ends_with("sample.splicepredict.tsv.gz"));

        let text = annotate_file(Path::new(path_to_vep_table), &output, &AnnotateConfig::default());

        let derived: Vec<(String, String)> = text
            .lines()
            .filter(|l| !l.starts_with('#'))
            .map(|l| {
                let fields: Vec<&str> = l.split('\t').collect();
                let n = fields.len();
                (fields[0].to_string(), fields[n - 3..].join("\t"))
            })
            .collect();

        let expected = vec![
            ("rs_donor_snv", "Intronic_donor_splice_region\tHIGH\tLOW"),
            ("rs_exonic_donor", "Exonic_donor_splice_region\tMODERATE\tLOW"),
            ("rs_exonic_acceptor", "Exonic_acceptor_splice_region\tHIGH\tMODERATE[upstream]"),
            ("rs_check", "check\t-\t-"),
            ("rs_last_exon", "last_exon\t-\t-"),
            ("rs_acceptor_del", "Intronic_acceptor_splice_region\tLOW\t-"),
            ("rs_deep_intronic", "Outside_native\t-\tMODERATE[intronic]"),
            ("rs_no_offsets", "unknown\t-\t-"),
            ("rs_exonic_outside", "Outside_native\t-\tHIGH"),
            ("rs_donor_ins", "Intronic_donor_splice_region\tLOW\tHIGH"),
        ];
        let expected: Vec<(String, String)> = expected
            .into_iter()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect();

        assert_eq!(derived, expected);
    }

    #[rstest]
    fn test_input_columns_are_untouched(path_to_vep_table: &str) {
        let tempdir = tempfile::tempdir().unwrap();
        let output = tempdir.path().join("annotated.tsv.gz");
        let text = annotate_file(Path::new(path_to_vep_table), &output, &AnnotateConfig::default());

        let original = std::fs::read_to_string(path_to_vep_table).unwrap();
        let kept: Vec<&str> = original
            .lines()
            .filter(|l| !l.starts_with("rs_malformed"))
            .collect();
        let written: Vec<&str> = text.lines().collect();

        assert_eq!(written.len(), kept.len());
        for (out, input) in written.iter().zip(kept.iter()) {
            if input.starts_with("##") {
                assert_eq!(out, input);
            } else {
                assert!(out.starts_with(&format!("{}\t", input)));
                assert_eq!(out.split('\t').count(), input.split('\t').count() + 3);
            }
        }
    }

    #[rstest]
    fn test_gzipped_input_matches_plain(path_to_vep_table: &str) {
        let tempdir = tempfile::tempdir().unwrap();
        let gz_input = tempdir.path().join("sample.vep.tsv.gz");
        {
            let file = File::create(&gz_input).unwrap();
            let mut encoder = GzEncoder::new(file, Compression::default());
            encoder
                .write_all(&std::fs::read(path_to_vep_table).unwrap())
                .unwrap();
            encoder.finish().unwrap();
        }

        let config = AnnotateConfig::default();
        let from_plain = annotate_file(
            Path::new(path_to_vep_table),
            &tempdir.path().join("plain.tsv.gz"),
            &config,
        );
        let from_gz = annotate_file(&gz_input, &resolve_output_path(&gz_input, None), &config);

        assert!(tempdir.path().join("sample.splicepredict.tsv.gz").exists());
        assert_eq!(from_plain, from_gz);
    }

    #[rstest]
    fn test_summary_counts(path_to_vep_table: &str) {
        let reader = open_input(path_to_vep_table).unwrap();
        let config = AnnotateConfig {
            batch_size: 3,
            threads: Some(2),
            ..Default::default()
        };
        let summary = annotate_stream(reader, &mut std::io::sink(), &config).unwrap();

        assert_eq!(summary.rows_read, 11);
        assert_eq!(summary.rows_annotated, 10);
        assert_eq!(summary.rows_skipped, 1);
        assert_eq!(summary.count(SpliceVariantType::OutsideNative), 2);
        assert_eq!(summary.count(SpliceVariantType::IntronicDonorSpliceRegion), 2);
        assert_eq!(summary.count(SpliceVariantType::Unknown), 1);
        assert_eq!(summary.by_type.values().sum::<u64>(), summary.rows_annotated);
    }

    #[rstest]
    fn test_abort_on_malformed(path_to_vep_table: &str) {
        let reader = open_input(path_to_vep_table).unwrap();
        let config = AnnotateConfig {
            on_malformed: MalformedPolicy::Abort,
            ..Default::default()
        };
        let err = annotate_stream(reader, &mut std::io::sink(), &config).unwrap_err();

        assert!(err.to_string().contains("x3"));
    }

    #[rstest]
    fn test_drop_metadata(path_to_vep_table: &str) {
        let reader = open_input(path_to_vep_table).unwrap();
        let config = AnnotateConfig {
            keep_metadata: false,
            ..Default::default()
        };
        let mut out: Vec<u8> = Vec::new();
        annotate_stream(reader, &mut out, &config).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("#Uploaded_variation\t"));
        assert!(!text.contains("## ENSEMBL"));
    }

    #[rstest]
    fn test_trailer_write_failure_is_reported(path_to_vep_table: &str) {
        let reader = open_input(path_to_vep_table).unwrap();
        let inner = BufWriter::new(FailAfterFlush { flushed: false });
        let mut sink = OutputSink::Gzip(GzEncoder::new(inner, Compression::default()));

        let summary = annotate_stream(reader, &mut sink, &AnnotateConfig::default()).unwrap();
        assert_eq!(summary.rows_annotated, 10);

        let err = sink.finish().unwrap_err();
        assert!(matches!(err, StreamError::Io(ref e) if e.kind() == io::ErrorKind::StorageFull));
    }

    #[rstest]
    fn test_invalid_byte_in_location_passes_through(path_to_vep_table: &str) {
        let mut input = std::fs::read(path_to_vep_table).unwrap();
        let at = input
            .windows(11)
            .position(|w| w == b"17:43045676")
            .unwrap();
        input[at + 3] = 0xff;

        let mut out: Vec<u8> = Vec::new();
        let summary =
            annotate_stream(Cursor::new(input.clone()), &mut out, &AnnotateConfig::default())
                .unwrap();

        assert_eq!(summary.rows_annotated, 10);
        assert_eq!(summary.rows_skipped, 1);

        let row = |bytes: &[u8]| -> Vec<u8> {
            bytes
                .split(|b| *b == b'\n')
                .find(|l| l.starts_with(b"rs_donor_snv\t"))
                .unwrap()
                .to_vec()
        };
        let written = row(&out);
        assert!(written.starts_with(&row(&input)));
        assert!(written.ends_with(b"\tIntronic_donor_splice_region\tHIGH\tLOW"));
    }
}
