use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, warn};

use super::{Dataset, LabelEncoding, Sample};
use crate::error::{MlErr, Result};

impl Dataset {
    /// Parses CSV text where each row is `feature_1,...,feature_k,label`.
    ///
    /// Rows with fewer than two columns, a field that isn't a finite number, or a column
    /// count different from the first valid row are skipped. Labels are kept as written,
    /// with a `Binary` encoding.
    ///
    /// # Returns
    /// The parsed dataset, or `NoValidRows` if every row was skipped.
    pub fn from_csv(text: &str) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(text.as_bytes());

        let mut dataset: Option<Dataset> = None;
        let mut skipped = 0;

        for (i, record) in reader.records().enumerate() {
            let row = match record {
                Ok(record) => parse_row(&record),
                Err(e) => {
                    debug!("skipping row {i}: {e}");
                    None
                }
            };

            let Some((features, label)) = row else {
                skipped += 1;
                continue;
            };

            let dataset =
                dataset.get_or_insert_with(|| Dataset::new(features.len(), LabelEncoding::Binary));

            if let Err(e) = dataset.push(Sample::new(features, label)) {
                debug!("skipping row {i}: {e}");
                skipped += 1;
            }
        }

        if skipped > 0 {
            warn!("skipped {skipped} malformed row(s)");
        }

        dataset.ok_or(MlErr::NoValidRows)
    }
}

/// Splits a record into its features and its label, if every field is a finite number.
fn parse_row(record: &StringRecord) -> Option<(Vec<f64>, f64)> {
    if record.len() < 2 {
        return None;
    }

    let mut values = record
        .iter()
        .map(|field| field.parse::<f64>().ok().filter(|v| v.is_finite()))
        .collect::<Option<Vec<_>>>()?;

    let label = values.pop()?;
    Some((values, label))
}
