//! Conversion of raw VEP text into a typed [`VariantRecord`].
//!
//! This is the only stage that may reject a row. Everything past it is total.

use std::str::FromStr;

use crate::errors::{RecordError, Result};
use crate::models::{
    Column, ConsequenceSet, IndexedRow, RecordId, RowView, SpliceScores, VariantClass,
    VariantRecord,
};

fn raw<'a, R: RowView + ?Sized>(row: &'a R, column: Column) -> Result<&'a str> {
    row.field(column)
        .ok_or_else(|| RecordError::MissingColumn(column.name().to_string()))
}

///
/// Parse one nullable field. The sentinel yields `None`; anything else must parse as `T`.
///
fn parse_nullable<T: FromStr, R: RowView + ?Sized>(
    row: &R,
    column: Column,
    id: &RecordId,
    sentinel: &str,
) -> Result<Option<T>> {
    let text = raw(row, column)?.trim();
    if text == sentinel || text.is_empty() {
        return Ok(None);
    }
    text.parse::<T>()
        .map(Some)
        .map_err(|_| RecordError::MalformedRecord {
            id: id.clone(),
            column: column.name().to_string(),
            value: text.to_string(),
        })
}

///
/// Normalize one raw row into a [`VariantRecord`].
///
/// # Arguments
/// - row: the raw fields, keyed by column
/// - id: identity of the row, attached to any error
/// - sentinel: the token marking a missing value (VEP uses `-`)
///
/// # Errors
/// - [`RecordError::MalformedRecord`] when an offset or score is neither the sentinel nor a
///   number
/// - [`RecordError::MissingColumn`] when the row has no such column at all
///
pub fn normalize<R: RowView + ?Sized>(
    row: &R,
    id: RecordId,
    sentinel: &str,
) -> Result<VariantRecord> {
    let score = |column: Column| parse_nullable::<f64, R>(row, column, &id, sentinel);

    let scores = SpliceScores {
        maxentscan_ref: score(Column::MaxEntScanRef)?,
        maxentscan_alt: score(Column::MaxEntScanAlt)?,
        maxentscan_diff: score(Column::MaxEntScanDiff)?,
        swa_donor_ref: score(Column::SwaDonorRef)?,
        swa_donor_alt: score(Column::SwaDonorAlt)?,
        swa_donor_ref_comp: score(Column::SwaDonorRefComp)?,
        swa_donor_diff: score(Column::SwaDonorDiff)?,
        swa_acceptor_ref: score(Column::SwaAcceptorRef)?,
        swa_acceptor_alt: score(Column::SwaAcceptorAlt)?,
        swa_acceptor_ref_comp: score(Column::SwaAcceptorRefComp)?,
        swa_acceptor_diff: score(Column::SwaAcceptorDiff)?,
        ncss_upstream_donor: score(Column::NcssUpstreamDonor)?,
        ncss_downstream_donor: score(Column::NcssDownstreamDonor)?,
        ncss_upstream_acceptor: score(Column::NcssUpstreamAcceptor)?,
        ncss_downstream_acceptor: score(Column::NcssDownstreamAcceptor)?,
    };

    let offset = |column: Column| parse_nullable::<i64, R>(row, column, &id, sentinel);
    let intron_start_offset = offset(Column::IntronStartOffset)?;
    let intron_end_offset = offset(Column::IntronEndOffset)?;

    let class_text = raw(row, Column::VariantClass)?.trim();
    let variant_class = if class_text == sentinel {
        VariantClass::Unspecified
    } else {
        VariantClass::from_tag(class_text)
    };

    let consequence_text = raw(row, Column::Consequence)?;
    let consequence = if consequence_text.trim() == sentinel {
        ConsequenceSet::default()
    } else {
        ConsequenceSet::parse(consequence_text)
    };

    Ok(VariantRecord {
        id,
        variant_class,
        consequence,
        intron_start_offset,
        intron_end_offset,
        scores,
    })
}

///
/// Normalize a split data row against its schema, checking the field count first.
///
/// The line number is combined with the uploaded variation name and the `Feature` column
/// (when present) to identify the row in errors.
///
pub fn normalize_fields(
    row: &IndexedRow<'_>,
    expected: usize,
    found: usize,
    line: u64,
    sentinel: &str,
) -> Result<VariantRecord> {
    let id = RecordId::from_line(line)
        .with_name(row.name())
        .with_feature(row.feature());

    if expected != found {
        return Err(RecordError::FieldCount {
            id,
            expected,
            found,
        });
    }

    normalize(row, id, sentinel)
}
