use crate::models::{parse_trait_cell, BreedRecord, Trait};
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading the breed catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to open catalog: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Catalog has no \"Breed\" column")]
    MissingBreedColumn,

    #[error("Empty breed name on line {0}")]
    EmptyBreedName(usize),

    #[error("Duplicate breed: {0}")]
    DuplicateBreed(String),
}

/// Static breed reference data, loaded once and read-only afterwards
#[derive(Debug, Clone, Default)]
pub struct BreedCatalog {
    breeds: Vec<BreedRecord>,
}

impl BreedCatalog {
    pub fn new(breeds: Vec<BreedRecord>) -> Self {
        Self { breeds }
    }

    /// Load a catalog from a CSV file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file = File::open(path.as_ref())?;
        let catalog = Self::from_reader(file)?;
        tracing::info!(
            "Loaded {} breeds from {}",
            catalog.len(),
            path.as_ref().display()
        );
        Ok(catalog)
    }

    /// Parse a catalog from CSV data
    ///
    /// The header must contain a `Breed` column. Columns named after a known
    /// trait are parsed; any other column is ignored. Cells that are not a
    /// value on the 1-5 scale are stored as missing.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let breed_column = headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case("breed"))
            .ok_or(CatalogError::MissingBreedColumn)?;

        let trait_columns: Vec<(usize, Trait)> = headers
            .iter()
            .enumerate()
            .filter_map(|(idx, header)| header.parse::<Trait>().ok().map(|t| (idx, t)))
            .collect();

        if trait_columns.is_empty() {
            tracing::warn!("Catalog header has no known trait columns");
        }

        let mut seen = HashSet::new();
        let mut breeds = Vec::new();
        let mut missing_cells = 0usize;

        for (row, record) in csv_reader.records().enumerate() {
            let record = record?;
            // Header is line 1
            let line = row + 2;

            let name = record.get(breed_column).unwrap_or_default().trim();
            if name.is_empty() {
                return Err(CatalogError::EmptyBreedName(line));
            }
            if !seen.insert(name.to_string()) {
                return Err(CatalogError::DuplicateBreed(name.to_string()));
            }

            let mut breed = BreedRecord::new(name);
            for (idx, t) in &trait_columns {
                match record.get(*idx).and_then(parse_trait_cell) {
                    Some(value) => {
                        breed.values.insert(*t, value);
                    }
                    None => missing_cells += 1,
                }
            }
            breeds.push(breed);
        }

        if missing_cells > 0 {
            tracing::warn!("{} catalog cells were missing or malformed and will be penalized", missing_cells);
        }

        Ok(Self { breeds })
    }

    pub fn breeds(&self) -> &[BreedRecord] {
        &self.breeds
    }

    pub fn get(&self, name: &str) -> Option<&BreedRecord> {
        self.breeds.iter().find(|b| b.name == name)
    }

    pub fn len(&self) -> usize {
        self.breeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.breeds.is_empty()
    }
}
