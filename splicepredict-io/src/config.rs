use std::fmt::{self, Display};
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use splicepredict_core::SENTINEL;

use crate::consts::{
    DEFAULT_BATCH_SIZE, DEFAULT_DONOR_GAIN_COLUMN, DEFAULT_NATIVE_LOSS_COLUMN,
    DEFAULT_SPLICE_VARIANT_TYPE_COLUMN,
};
use crate::error::{Result, StreamError};

///
/// What to do with a row that fails normalization.
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Drop the row and log a warning.
    #[default]
    Skip,
    /// Stop the stream with an error.
    Abort,
}

impl FromStr for MalformedPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "skip" => Ok(MalformedPolicy::Skip),
            "abort" => Ok(MalformedPolicy::Abort),
            _ => Err(format!("Invalid malformed-row policy: {}", s)),
        }
    }
}

impl Display for MalformedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedPolicy::Skip => write!(f, "skip"),
            MalformedPolicy::Abort => write!(f, "abort"),
        }
    }
}

///
/// Header names of the three appended columns.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputColumns {
    pub splice_variant_type: String,
    pub native_loss: String,
    pub donor_gain: String,
}

impl Default for OutputColumns {
    fn default() -> Self {
        OutputColumns {
            splice_variant_type: DEFAULT_SPLICE_VARIANT_TYPE_COLUMN.to_string(),
            native_loss: DEFAULT_NATIVE_LOSS_COLUMN.to_string(),
            donor_gain: DEFAULT_DONOR_GAIN_COLUMN.to_string(),
        }
    }
}

impl OutputColumns {
    pub fn names(&self) -> [&str; 3] {
        [
            self.splice_variant_type.as_str(),
            self.native_loss.as_str(),
            self.donor_gain.as_str(),
        ]
    }
}

///
/// Settings for one annotation run.
///
/// Every field has a default, so a config file only needs the keys it changes:
///
/// ```toml
/// on_malformed = "abort"
/// batch_size = 10000
///
/// [output_columns]
/// splice_variant_type = "Splicing_var_type"
/// ```
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotateConfig {
    pub sentinel: String,
    pub on_malformed: MalformedPolicy,
    pub batch_size: usize,
    /// Worker threads; `None` uses every available core.
    pub threads: Option<usize>,
    pub keep_metadata: bool,
    pub progress: bool,
    pub output_columns: OutputColumns,
}

impl Default for AnnotateConfig {
    fn default() -> Self {
        AnnotateConfig {
            sentinel: SENTINEL.to_string(),
            on_malformed: MalformedPolicy::default(),
            batch_size: DEFAULT_BATCH_SIZE,
            threads: None,
            keep_metadata: true,
            progress: false,
            output_columns: OutputColumns::default(),
        }
    }
}

impl AnnotateConfig {
    ///
    /// Load a config from a TOML or YAML file, chosen by extension.
    ///
    /// # Arguments
    /// - path: path to a `.toml`, `.yaml` or `.yml` file
    ///
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;

        let config: AnnotateConfig = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => {
                toml::from_str(&text).map_err(|e| StreamError::Config(e.to_string()))?
            }
            Some("yaml") | Some("yml") => {
                serde_yaml::from_str(&text).map_err(|e| StreamError::Config(e.to_string()))?
            }
            _ => {
                return Err(StreamError::Config(format!(
                    "Unsupported config file extension: {:?}",
                    path
                )));
            }
        };
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(StreamError::Config("batch_size must be at least 1".to_string()));
        }
        if self.threads == Some(0) {
            return Err(StreamError::Config("threads must be at least 1".to_string()));
        }
        if self.sentinel.is_empty() || self.sentinel.contains('\t') {
            return Err(StreamError::Config(format!(
                "sentinel must be a non-empty token without tabs, got {:?}",
                self.sentinel
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use std::io::Write;

    fn write_config(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[rstest]
    fn test_defaults() {
        let config = AnnotateConfig::default();

        assert_eq!(config.sentinel, "-");
        assert_eq!(config.on_malformed, MalformedPolicy::Skip);
        assert_eq!(config.batch_size, DEFAULT_BATCH_SIZE);
        assert_eq!(
            config.output_columns.names(),
            ["spliceVariantType", "nativeLoss", "donorGain"]
        );
        assert!(config.validate().is_ok());
    }

    #[rstest]
    fn test_partial_toml() {
        let file = write_config(
            ".toml",
            "on_malformed = \"abort\"\nthreads = 2\n\n[output_columns]\nsplice_variant_type = \"Splicing_var_type\"\n",
        );
        let config = AnnotateConfig::from_file(file.path()).unwrap();

        assert_eq!(config.on_malformed, MalformedPolicy::Abort);
        assert_eq!(config.threads, Some(2));
        assert_eq!(config.output_columns.splice_variant_type, "Splicing_var_type");
        assert_eq!(config.output_columns.native_loss, "nativeLoss");
        assert_eq!(config.batch_size, DEFAULT_BATCH_SIZE);
    }

    #[rstest]
    fn test_yaml() {
        let file = write_config(".yaml", "sentinel: NA\nkeep_metadata: false\nbatch_size: 16\n");
        let config = AnnotateConfig::from_file(file.path()).unwrap();

        assert_eq!(config.sentinel, "NA");
        assert!(!config.keep_metadata);
        assert_eq!(config.batch_size, 16);
    }

    #[rstest]
    fn test_rejects_zero_batch() {
        let file = write_config(".toml", "batch_size = 0\n");
        let err = AnnotateConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, StreamError::Config(_)));
    }

    #[rstest]
    fn test_rejects_unknown_extension() {
        let file = write_config(".json", "{}");
        assert!(AnnotateConfig::from_file(file.path()).is_err());
    }

    #[rstest]
    #[case("skip", MalformedPolicy::Skip)]
    #[case("ABORT", MalformedPolicy::Abort)]
    fn test_policy_from_str(#[case] text: &str, #[case] expected: MalformedPolicy) {
        assert_eq!(text.parse::<MalformedPolicy>().unwrap(), expected);
    }
}
