pub const STDIO_PATH: &str = "-";
pub const DEFAULT_OUTPUT_SUFFIX: &str = ".splicepredict.tsv.gz";
pub const DEFAULT_BATCH_SIZE: usize = 4096;

pub const DEFAULT_SPLICE_VARIANT_TYPE_COLUMN: &str = "spliceVariantType";
pub const DEFAULT_NATIVE_LOSS_COLUMN: &str = "nativeLoss";
pub const DEFAULT_DONOR_GAIN_COLUMN: &str = "donorGain";

pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];
pub const READ_BUFFER_CAPACITY: usize = 256 * 1024;
