/// Token used by VEP for a value that could not be computed.
pub const SENTINEL: &str = "-";

/// Prefix of metadata lines preceding the header.
pub const METADATA_PREFIX: &str = "##";

/// Prefix of the header line.
pub const HEADER_PREFIX: &str = "#";

/// Field delimiter of VEP tab output.
pub const DELIMITER: char = '\t';

/// Separators VEP uses when several consequence terms apply to one transcript.
pub const CONSEQUENCE_SEPARATORS: &[char] = &[',', '&'];

/// Name of the VEP transcript column, used for record identity only.
pub const FEATURE_COLUMN: &str = "Feature";
