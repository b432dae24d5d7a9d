use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use log::debug;

use splicepredict_core::{HEADER_PREFIX, METADATA_PREFIX, RecordError, Schema};

use crate::consts::{GZIP_MAGIC, READ_BUFFER_CAPACITY, STDIO_PATH};
use crate::error::Result;

///
/// Wrap a byte stream in a line reader, decompressing it if it starts with the gzip magic.
///
/// BGZF files are gzip members back to back, so the multi-member decoder covers both.
///
pub fn get_dynamic_reader<R: Read + 'static>(source: R) -> Result<Box<dyn BufRead>> {
    let mut buffered = BufReader::with_capacity(READ_BUFFER_CAPACITY, source);
    let is_gzipped = buffered.fill_buf()?.starts_with(&GZIP_MAGIC);

    let reader: Box<dyn BufRead> = if is_gzipped {
        Box::new(BufReader::with_capacity(
            READ_BUFFER_CAPACITY,
            MultiGzDecoder::new(buffered),
        ))
    } else {
        Box::new(buffered)
    };
    Ok(reader)
}

///
/// Open a VEP table from a path, or stdin for `-`.
///
pub fn open_input<P: AsRef<Path>>(path: P) -> Result<Box<dyn BufRead>> {
    let path = path.as_ref();
    if path == Path::new(STDIO_PATH) {
        return get_dynamic_reader(io::stdin());
    }
    let file = File::open(path)?;
    get_dynamic_reader(file)
}

///
/// One data line as read, without its line terminator, and its 1-based line number.
///
/// Bytes are kept undecoded so columns the engine never reads pass through untouched.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawLine {
    pub number: u64,
    pub bytes: Vec<u8>,
}

fn trim_line_end(line: &[u8]) -> &[u8] {
    let mut end = line.len();
    while end > 0 && matches!(line[end - 1], b'\n' | b'\r') {
        end -= 1;
    }
    &line[..end]
}

///
/// Reader over a VEP tab table. Metadata and the header are consumed up front; data
/// lines are then handed out in batches.
///
pub struct VepReader<R: BufRead> {
    reader: R,
    schema: Schema,
    header: String,
    metadata: Vec<Vec<u8>>,
    line_number: u64,
    buf: Vec<u8>,
}

impl<R: BufRead> VepReader<R> {
    ///
    /// Consume the `##` metadata lines and the `#` header.
    ///
    /// Fails with [`RecordError::MissingHeader`] when the input ends before a header, with
    /// [`RecordError::MissingColumn`] when the header lacks a required column, and with an
    /// `InvalidData` IO error when the header is not UTF-8.
    ///
    pub fn new(mut reader: R) -> Result<Self> {
        let mut metadata = Vec::new();
        let mut line_number = 0u64;
        let mut buf = Vec::new();

        let header = loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                return Err(RecordError::MissingHeader.into());
            }
            line_number += 1;

            let line = trim_line_end(&buf);
            if line.starts_with(METADATA_PREFIX.as_bytes()) {
                metadata.push(line.to_vec());
            } else if line.starts_with(HEADER_PREFIX.as_bytes()) {
                break String::from_utf8(line.to_vec())
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            } else if !line.iter().all(u8::is_ascii_whitespace) {
                return Err(RecordError::MissingHeader.into());
            }
        };

        let schema = Schema::from_header_line(&header)?;
        debug!(
            "Header at line {} with {} columns, {} metadata lines",
            line_number,
            schema.width(),
            metadata.len()
        );

        Ok(VepReader {
            reader,
            schema,
            header,
            metadata,
            line_number,
            buf,
        })
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn metadata(&self) -> &[Vec<u8>] {
        &self.metadata
    }

    ///
    /// Fill `batch` with up to `size` data lines. Returns the number read; `0` means the
    /// input is exhausted.
    ///
    /// Blank lines and late `##` lines are skipped.
    ///
    pub fn read_batch(&mut self, size: usize, batch: &mut Vec<RawLine>) -> Result<usize> {
        batch.clear();
        while batch.len() < size {
            self.buf.clear();
            if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
                break;
            }
            self.line_number += 1;

            let line = trim_line_end(&self.buf);
            if line.is_empty() || line.starts_with(METADATA_PREFIX.as_bytes()) {
                continue;
            }
            batch.push(RawLine {
                number: self.line_number,
                bytes: line.to_vec(),
            });
        }
        Ok(batch.len())
    }
}
