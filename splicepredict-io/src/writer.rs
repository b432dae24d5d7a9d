use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::write::GzEncoder;

use splicepredict_core::DELIMITER;

use crate::config::OutputColumns;
use crate::consts::{DEFAULT_OUTPUT_SUFFIX, STDIO_PATH};
use crate::error::Result;

///
/// Strip every extension from a file name: `sample.vep.tsv.gz` becomes `sample`.
///
fn remove_all_extensions(path: &Path) -> String {
    let mut stem = path
        .file_name()
        .map(|f| f.to_string_lossy().to_string())
        .unwrap_or_default();
    while let Some((head, _ext)) = stem.rsplit_once('.') {
        if head.is_empty() {
            break;
        }
        stem = head.to_string();
    }
    stem
}

///
/// Decide where annotated output goes.
///
/// - `-` stays `-` (stdout)
/// - an output ending in `.gz` or `.tsv` is used as given
/// - any other output is a basename, and `.splicepredict.tsv.gz` is appended
/// - with no output, the input's stem gets the suffix, next to the input; stdin input
///   goes to stdout
///
pub fn resolve_output_path(input: &Path, output: Option<&Path>) -> PathBuf {
    match output {
        Some(out) if out == Path::new(STDIO_PATH) => out.to_path_buf(),
        Some(out) => {
            let name = out.to_string_lossy();
            if name.ends_with(".gz") || name.ends_with(".tsv") {
                out.to_path_buf()
            } else {
                PathBuf::from(format!("{}{}", name, DEFAULT_OUTPUT_SUFFIX))
            }
        }
        None if input == Path::new(STDIO_PATH) => PathBuf::from(STDIO_PATH),
        None => {
            let stem = remove_all_extensions(input);
            input.with_file_name(format!("{}{}", stem, DEFAULT_OUTPUT_SUFFIX))
        }
    }
}

///
/// Where annotated rows go. Gzip output needs [`OutputSink::finish`] to write its trailer;
/// dropping the sink without it leaves a truncated file and no error.
///
pub enum OutputSink<W: Write = File> {
    Gzip(GzEncoder<BufWriter<W>>),
    Plain(BufWriter<W>),
    Stdout(BufWriter<io::StdoutLock<'static>>),
}

impl<W: Write> OutputSink<W> {
    ///
    /// Write any pending bytes (and the gzip trailer) and report the first failure.
    ///
    pub fn finish(self) -> Result<()> {
        match self {
            OutputSink::Gzip(encoder) => encoder.finish()?.flush()?,
            OutputSink::Plain(mut writer) => writer.flush()?,
            OutputSink::Stdout(mut writer) => writer.flush()?,
        }
        Ok(())
    }
}

impl<W: Write> Write for OutputSink<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            OutputSink::Gzip(encoder) => encoder.write(buf),
            OutputSink::Plain(writer) => writer.write(buf),
            OutputSink::Stdout(writer) => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            OutputSink::Gzip(encoder) => encoder.flush(),
            OutputSink::Plain(writer) => writer.flush(),
            OutputSink::Stdout(writer) => writer.flush(),
        }
    }
}

///
/// Open the output sink: stdout for `-`, gzip for a `.gz` path, plain text otherwise.
///
/// Parent directories are created as needed.
///
pub fn open_output<P: AsRef<Path>>(path: P) -> Result<OutputSink> {
    let path = path.as_ref();
    if path == Path::new(STDIO_PATH) {
        return Ok(OutputSink::Stdout(BufWriter::new(io::stdout().lock())));
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = BufWriter::new(File::create(path)?);
    let sink = if path.extension().is_some_and(|e| e == "gz") {
        OutputSink::Gzip(GzEncoder::new(file, Compression::default()))
    } else {
        OutputSink::Plain(file)
    };
    Ok(sink)
}

///
/// Write the metadata lines (if kept) and the header extended with the derived columns.
///
pub fn write_header<W: Write + ?Sized>(
    writer: &mut W,
    metadata: &[Vec<u8>],
    header: &str,
    columns: &OutputColumns,
    keep_metadata: bool,
) -> Result<()> {
    if keep_metadata {
        for line in metadata {
            writer.write_all(line)?;
            writeln!(writer)?;
        }
    }

    write!(writer, "{}", header)?;
    for name in columns.names() {
        write!(writer, "{}{}", DELIMITER, name)?;
    }
    writeln!(writer)?;
    Ok(())
}
