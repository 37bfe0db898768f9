//! Airport lookup table
//!
//! Builds the code-to-name and code-to-city mappings used by the substitution
//! pass. Every airport is registered under both its ICAO and IATA code.
//!
//! The CSV layout is positional and has no header handling:
//!
//! | index | column                        |
//! |-------|-------------------------------|
//! | 0     | airport full name             |
//! | 1     | country or region (unused)    |
//! | 2     | city                          |
//! | 3     | ICAO code                     |
//! | 4     | IATA code                     |

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use log::debug;

use crate::error::{Error, Result};

/// Number of columns a lookup row must provide
const REQUIRED_FIELDS: usize = 5;

/// One row of the airport lookup table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AirportRecord {
    pub full_name: String,
    pub country: String,
    pub city: String,
    pub icao_code: String,
    pub iata_code: String,
}

impl AirportRecord {
    /// Build a record from a raw CSV row.
    ///
    /// `row` is the 1-based row number used in error messages.
    pub fn from_csv(record: &StringRecord, row: usize) -> Result<Self> {
        if record.len() < REQUIRED_FIELDS {
            return Err(Error::MalformedLookup {
                row,
                reason: format!(
                    "expected at least {} fields, found {}",
                    REQUIRED_FIELDS,
                    record.len()
                ),
            });
        }

        let field = |idx: usize| record.get(idx).unwrap_or_default().to_string();

        Ok(Self {
            full_name: field(0),
            country: field(1),
            city: field(2),
            icao_code: field(3),
            iata_code: field(4),
        })
    }

    /// Name of the first required field that is empty, if any
    fn missing_field(&self) -> Option<&'static str> {
        if self.full_name.is_empty() {
            Some("airport name")
        } else if self.city.is_empty() {
            Some("city")
        } else if self.icao_code.is_empty() {
            Some("ICAO code")
        } else if self.iata_code.is_empty() {
            Some("IATA code")
        } else {
            None
        }
    }
}

/// Resolved code mappings, read-only once built
#[derive(Debug, Clone, Default)]
pub struct AirportLookup {
    names: HashMap<String, String>,
    cities: HashMap<String, String>,
}

impl AirportLookup {
    /// Build both mappings from an ordered sequence of records.
    ///
    /// Fails on the first record missing a required field; no partial table
    /// is returned. Later records overwrite earlier ones that share a code.
    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = AirportRecord>,
    {
        let mut lookup = Self::default();

        for (idx, record) in records.into_iter().enumerate() {
            if let Some(field) = record.missing_field() {
                return Err(Error::MalformedLookup {
                    row: idx + 1,
                    reason: format!("{} is empty", field),
                });
            }

            for code in [&record.icao_code, &record.iata_code] {
                lookup.names.insert(code.clone(), record.full_name.clone());
                lookup.cities.insert(code.clone(), record.city.clone());
            }
        }

        debug!("Airport lookup resolved {} codes", lookup.names.len());
        Ok(lookup)
    }

    /// Airport full name for an ICAO or IATA code
    pub fn name(&self, code: &str) -> Option<&str> {
        self.names.get(code).map(String::as_str)
    }

    /// City name for an ICAO or IATA code
    pub fn city(&self, code: &str) -> Option<&str> {
        self.cities.get(code).map(String::as_str)
    }

    pub fn names(&self) -> &HashMap<String, String> {
        &self.names
    }

    pub fn cities(&self) -> &HashMap<String, String> {
        &self.cities
    }

    /// Number of distinct codes registered
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Decode airport records from CSV data
pub fn read_records<R: Read>(reader: R) -> Result<Vec<AirportRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (idx, row) in rdr.records().enumerate() {
        let row = row?;
        records.push(AirportRecord::from_csv(&row, idx + 1)?);
    }

    Ok(records)
}

/// Load and resolve a lookup table from a CSV file
pub fn load_lookup(path: &Path) -> Result<AirportLookup> {
    if !path.exists() {
        return Err(Error::LookupNotFound(path.to_path_buf()));
    }

    let file = std::fs::File::open(path).map_err(Error::io("open", path))?;
    let records = read_records(file)?;
    debug!("Read {} lookup rows from {}", records.len(), path.display());

    AirportLookup::from_records(records)
}
