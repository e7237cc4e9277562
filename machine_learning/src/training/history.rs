use csv::{ReaderBuilder, StringRecord, Terminator, Trim, WriterBuilder};

use crate::error::{MlErr, Result};

/// Decimal places used for losses and weights when exporting a history.
pub const DECIMALS: usize = 10;

/// The loss and parameters of a model at a given iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRecord {
    iter: usize,
    loss: f64,
    weights: Vec<f64>,
}

impl HistoryRecord {
    pub fn new(iter: usize, loss: f64, weights: Vec<f64>) -> Self {
        Self {
            iter,
            loss,
            weights,
        }
    }

    pub fn iter(&self) -> usize {
        self.iter
    }

    pub fn loss(&self) -> f64 {
        self.loss
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }
}

/// The ordered records of a training run. Append only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    records: Vec<HistoryRecord>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
        }
    }

    /// Appends a record.
    ///
    /// # Returns
    /// An error if its weights' length differs from the previous records'.
    pub fn push(&mut self, record: HistoryRecord) -> Result<()> {
        let expected = self.records.first().map(|first| first.weights.len());
        if let Some(expected) = expected.filter(|&n| n != record.weights.len()) {
            return Err(MlErr::SizeMismatch {
                a: "record weights",
                b: "history weights",
                got: record.weights.len(),
                expected,
            });
        }

        self.records.push(record);
        Ok(())
    }

    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    pub fn first(&self) -> Option<&HistoryRecord> {
        self.records.first()
    }

    pub fn last(&self) -> Option<&HistoryRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Exports the history as CSV with an `iter,loss,w0,...,wD` header, losses and weights
    /// written with `DECIMALS` decimal places. An empty history exports as an empty string.
    pub fn to_csv(&self) -> Result<String> {
        let Some(first) = self.records.first() else {
            return Ok(String::new());
        };

        let mut writer = WriterBuilder::new()
            .terminator(Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        writer.write_record(header(first.weights.len()))?;

        for record in &self.records {
            let row = [record.iter.to_string(), format!("{:.DECIMALS$}", record.loss)]
                .into_iter()
                .chain(record.weights.iter().map(|w| format!("{w:.DECIMALS$}")));

            writer.write_record(row)?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| MlErr::Csv(e.into_error().into()))?;

        String::from_utf8(bytes).map_err(|e| MlErr::MalformedHistory {
            row: 0,
            reason: e.to_string(),
        })
    }

    /// Parses a history previously exported with `to_csv`.
    ///
    /// # Returns
    /// The parsed history, or a `MalformedHistory` error pointing at the first bad row
    /// (the header is row 0).
    pub fn from_csv(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::new());
        }

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(text.as_bytes());

        let headers = reader.headers()?.clone();
        let nweights = parse_header(&headers)?;

        let mut history = Self::new();
        for (i, record) in reader.records().enumerate() {
            let row = i + 1;
            let record = record.map_err(|e| malformed(row, e))?;
            history.push(parse_record(&record, nweights, row)?)?;
        }

        Ok(history)
    }
}

fn header(nweights: usize) -> Vec<String> {
    ["iter".to_string(), "loss".to_string()]
        .into_iter()
        .chain((0..nweights).map(|j| format!("w{j}")))
        .collect()
}

fn parse_header(headers: &StringRecord) -> Result<usize> {
    let nweights = headers.len().saturating_sub(2);
    let expected = header(nweights);

    if nweights == 0 || !headers.iter().eq(expected.iter().map(String::as_str)) {
        return Err(malformed(
            0,
            format!("expected header {}", expected.join(",")),
        ));
    }

    Ok(nweights)
}

fn parse_record(record: &StringRecord, nweights: usize, row: usize) -> Result<HistoryRecord> {
    if record.len() != nweights + 2 {
        return Err(malformed(
            row,
            format!("expected {} fields, got {}", nweights + 2, record.len()),
        ));
    }

    let iter = record[0]
        .parse::<usize>()
        .map_err(|e| malformed(row, format!("iter {:?}: {e}", &record[0])))?;

    let values = record
        .iter()
        .skip(1)
        .map(|field| {
            field
                .parse::<f64>()
                .map_err(|e| malformed(row, format!("{field:?}: {e}")))
        })
        .collect::<Result<Vec<_>>>()?;

    let (loss, weights) = values
        .split_first()
        .ok_or_else(|| malformed(row, "missing loss"))?;

    Ok(HistoryRecord::new(iter, *loss, weights.to_vec()))
}

fn malformed(row: usize, reason: impl ToString) -> MlErr {
    MlErr::MalformedHistory {
        row,
        reason: reason.to_string(),
    }
}
