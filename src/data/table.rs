//! Crop record table and CSV loading.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Error type for crop data loading.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to open crop data {path}: {source}")]
    Open { path: String, source: csv::Error },
    #[error("failed to parse crop data record: {0}")]
    Record(#[from] csv::Error),
    #[error("crop data contains no records")]
    Empty,
}

/// One historical observation: a (region, crop, year) row with its climate
/// measures and yield.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CropRecord {
    /// Region identifier.
    #[serde(rename = "Area")]
    pub area: String,
    /// Crop identifier.
    #[serde(rename = "Item")]
    pub item: String,
    /// Observation year.
    #[serde(rename = "Year")]
    pub year: u16,
    /// Average temperature, degrees Celsius.
    #[serde(rename = "Avg_Temp")]
    pub avg_temp: f32,
    /// Average rainfall, millimetres.
    #[serde(rename = "Avg_rainfall")]
    pub avg_rainfall: f32,
    /// Pesticide use, tonnes.
    #[serde(rename = "Pesticides(tonnes)")]
    pub pesticides: f32,
    /// Observed yield.
    #[serde(rename = "Yield")]
    pub crop_yield: f32,
}

/// Read-only historical crop table.
///
/// # Example
///
/// ```no_run
/// use cropcast::CropTable;
///
/// let table = CropTable::from_path("data/final_crop_data.csv").unwrap();
/// let selection = table.select("India", Some("Wheat"));
/// ```
#[derive(Debug, Clone)]
pub struct CropTable {
    records: Vec<CropRecord>,
}

impl CropTable {
    /// Create a table from records already in memory.
    pub fn from_records(records: Vec<CropRecord>) -> Self {
        Self { records }
    }

    /// Load a table from a CSV file.
    ///
    /// # Errors
    ///
    /// [`TableError::Open`] when the file can't be opened,
    /// [`TableError::Record`] on a malformed row, and [`TableError::Empty`]
    /// when the file holds no data rows.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, TableError> {
        let path = path.as_ref();
        let reader = csv::Reader::from_path(path).map_err(|source| TableError::Open {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_csv_reader(reader)
    }

    /// Load a table from any CSV reader (headers expected).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, TableError> {
        Self::from_csv_reader(csv::Reader::from_reader(reader))
    }

    fn from_csv_reader<R: Read>(mut reader: csv::Reader<R>) -> Result<Self, TableError> {
        let mut records = Vec::new();
        for result in reader.deserialize() {
            let record: CropRecord = result?;
            records.push(record);
        }

        if records.is_empty() {
            return Err(TableError::Empty);
        }

        Ok(Self { records })
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records.
    pub fn records(&self) -> &[CropRecord] {
        &self.records
    }

    /// Distinct region names, in first-seen order.
    pub fn areas(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for record in &self.records {
            if !seen.contains(&record.area.as_str()) {
                seen.push(record.area.as_str());
            }
        }
        seen
    }

    /// Distinct crop names, in first-seen order.
    pub fn items(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for record in &self.records {
            if !seen.contains(&record.item.as_str()) {
                seen.push(record.item.as_str());
            }
        }
        seen
    }

    /// Records for a region, optionally narrowed to one crop.
    ///
    /// `item = None` means no crop filter (a dashboard's "All" selection).
    pub fn select(&self, area: &str, item: Option<&str>) -> Vec<&CropRecord> {
        self.records
            .iter()
            .filter(|r| r.area == area)
            .filter(|r| item.map_or(true, |item| r.item == item))
            .collect()
    }
}
