use std::collections::HashMap;
use std::fmt::{self, Display};

use crate::consts::{DELIMITER, FEATURE_COLUMN, HEADER_PREFIX};
use crate::errors::{RecordError, Result};

///
/// The VEP columns the engine reads. Names match the VEP `MaxEntScan` plugin output
/// (`SWA` and `NCSS` modes) verbatim.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Column {
    VariantClass,
    Consequence,
    IntronStartOffset,
    IntronEndOffset,
    MaxEntScanRef,
    MaxEntScanAlt,
    MaxEntScanDiff,
    SwaDonorRef,
    SwaDonorAlt,
    SwaDonorRefComp,
    SwaDonorDiff,
    SwaAcceptorRef,
    SwaAcceptorAlt,
    SwaAcceptorRefComp,
    SwaAcceptorDiff,
    NcssUpstreamDonor,
    NcssDownstreamDonor,
    NcssUpstreamAcceptor,
    NcssDownstreamAcceptor,
}

impl Column {
    pub const COUNT: usize = 19;

    pub const ALL: [Column; Column::COUNT] = [
        Column::VariantClass,
        Column::Consequence,
        Column::IntronStartOffset,
        Column::IntronEndOffset,
        Column::MaxEntScanRef,
        Column::MaxEntScanAlt,
        Column::MaxEntScanDiff,
        Column::SwaDonorRef,
        Column::SwaDonorAlt,
        Column::SwaDonorRefComp,
        Column::SwaDonorDiff,
        Column::SwaAcceptorRef,
        Column::SwaAcceptorAlt,
        Column::SwaAcceptorRefComp,
        Column::SwaAcceptorDiff,
        Column::NcssUpstreamDonor,
        Column::NcssDownstreamDonor,
        Column::NcssUpstreamAcceptor,
        Column::NcssDownstreamAcceptor,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Column::VariantClass => "VARIANT_CLASS",
            Column::Consequence => "Consequence",
            Column::IntronStartOffset => "IntronStartOffset",
            Column::IntronEndOffset => "IntronEndOffset",
            Column::MaxEntScanRef => "MaxEntScan_ref",
            Column::MaxEntScanAlt => "MaxEntScan_alt",
            Column::MaxEntScanDiff => "MaxEntScan_diff",
            Column::SwaDonorRef => "MES-SWA_donor_ref",
            Column::SwaDonorAlt => "MES-SWA_donor_alt",
            Column::SwaDonorRefComp => "MES-SWA_donor_ref_comp",
            Column::SwaDonorDiff => "MES-SWA_donor_diff",
            Column::SwaAcceptorRef => "MES-SWA_acceptor_ref",
            Column::SwaAcceptorAlt => "MES-SWA_acceptor_alt",
            Column::SwaAcceptorRefComp => "MES-SWA_acceptor_ref_comp",
            Column::SwaAcceptorDiff => "MES-SWA_acceptor_diff",
            Column::NcssUpstreamDonor => "MES-NCSS_upstream_donor",
            Column::NcssDownstreamDonor => "MES-NCSS_downstream_donor",
            Column::NcssUpstreamAcceptor => "MES-NCSS_upstream_acceptor",
            Column::NcssDownstreamAcceptor => "MES-NCSS_downstream_acceptor",
        }
    }

    fn slot(&self) -> usize {
        *self as usize
    }
}

impl Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

///
/// Read access to the raw text of one row, keyed by [`Column`].
///
/// `None` means the column does not exist for this row, which is different from the
/// column holding the missing-value sentinel.
///
pub trait RowView {
    fn field(&self, column: Column) -> Option<&str>;
}

impl RowView for HashMap<String, String> {
    fn field(&self, column: Column) -> Option<&str> {
        self.get(column.name()).map(String::as_str)
    }
}

impl RowView for HashMap<&str, &str> {
    fn field(&self, column: Column) -> Option<&str> {
        self.get(column.name()).copied()
    }
}

///
/// Column layout of a VEP table, resolved once from its header line.
///
#[derive(Clone, Debug)]
pub struct Schema {
    names: Vec<String>,
    positions: [usize; Column::COUNT],
    feature: Option<usize>,
}

impl Schema {
    ///
    /// Build a schema from the names of the header fields.
    ///
    /// Fails with [`RecordError::MissingColumn`] for the first required column that is
    /// not present.
    ///
    pub fn new(names: Vec<String>) -> Result<Self> {
        let mut positions = [0usize; Column::COUNT];
        for column in Column::ALL {
            positions[column.slot()] = names
                .iter()
                .position(|n| n == column.name())
                .ok_or_else(|| RecordError::MissingColumn(column.name().to_string()))?;
        }
        let feature = names.iter().position(|n| n == FEATURE_COLUMN);

        Ok(Schema {
            names,
            positions,
            feature,
        })
    }

    ///
    /// Build a schema from a raw `#`-prefixed header line.
    ///
    /// The leading `#` stays part of the first column name, so output headers
    /// reproduce the input header exactly.
    ///
    pub fn from_header_line(line: &str) -> Result<Self> {
        if !line.starts_with(HEADER_PREFIX) {
            return Err(RecordError::MissingHeader);
        }
        let names = line
            .trim_end_matches(['\n', '\r'])
            .split(DELIMITER)
            .map(String::from)
            .collect();
        Schema::new(names)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of fields every data row must carry.
    pub fn width(&self) -> usize {
        self.names.len()
    }

    pub fn position(&self, column: Column) -> usize {
        self.positions[column.slot()]
    }

    pub fn feature_position(&self) -> Option<usize> {
        self.feature
    }
}

///
/// A split data row paired with the schema that names its fields.
///
pub struct IndexedRow<'a> {
    schema: &'a Schema,
    fields: &'a [&'a str],
}

impl<'a> IndexedRow<'a> {
    pub fn new(schema: &'a Schema, fields: &'a [&'a str]) -> Self {
        IndexedRow { schema, fields }
    }

    /// Value of the first column, the uploaded variation name in VEP output.
    pub fn name(&self) -> Option<&'a str> {
        self.fields.first().copied()
    }

    pub fn feature(&self) -> Option<&'a str> {
        self.schema
            .feature_position()
            .and_then(|i| self.fields.get(i).copied())
    }
}

impl RowView for IndexedRow<'_> {
    fn field(&self, column: Column) -> Option<&str> {
        self.fields.get(self.schema.position(column)).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn header_line() -> String {
        let mut names = vec!["#Uploaded_variation".to_string(), "Feature".to_string()];
        names.extend(Column::ALL.iter().rev().map(|c| c.name().to_string()));
        names.join("\t")
    }

    #[rstest]
    fn test_schema_resolves_every_column(header_line: String) {
        let schema = Schema::from_header_line(&header_line).unwrap();

        assert_eq!(schema.width(), Column::COUNT + 2);
        assert_eq!(schema.names()[0], "#Uploaded_variation");
        assert_eq!(schema.feature_position(), Some(1));
        // columns were written in reverse order after the two identity columns
        assert_eq!(schema.position(Column::NcssDownstreamAcceptor), 2);
        assert_eq!(schema.position(Column::VariantClass), Column::COUNT + 1);
    }

    #[rstest]
    fn test_schema_missing_column() {
        let line = "#Uploaded_variation\tVARIANT_CLASS\tConsequence";
        let err = Schema::from_header_line(line).unwrap_err();

        assert_eq!(err, RecordError::MissingColumn("IntronStartOffset".to_string()));
    }

    #[rstest]
    fn test_schema_requires_hash_prefix() {
        let err = Schema::from_header_line("Uploaded_variation\tFeature").unwrap_err();
        assert_eq!(err, RecordError::MissingHeader);
    }

    #[rstest]
    fn test_indexed_row_lookup(header_line: String) {
        let schema = Schema::from_header_line(&header_line).unwrap();
        let mut fields = vec!["-"; schema.width()];
        fields[0] = "rs80357713";
        fields[1] = "ENST00000357654";
        fields[schema.position(Column::VariantClass)] = "SNV";

        let row = IndexedRow::new(&schema, &fields);

        assert_eq!(row.field(Column::VariantClass), Some("SNV"));
        assert_eq!(row.field(Column::SwaDonorAlt), Some("-"));
        assert_eq!(row.name(), Some("rs80357713"));
        assert_eq!(row.feature(), Some("ENST00000357654"));
    }

    #[rstest]
    fn test_column_names_are_unique() {
        let names: std::collections::HashSet<&str> = Column::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(names.len(), Column::COUNT);
    }
}
