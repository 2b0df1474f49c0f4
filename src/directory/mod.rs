mod airports;
pub(crate) mod builtin;
mod records;

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{AppError, AppResult};

pub use airports::{AirportIndex, DEFAULT_AIRPORT_RESULTS};
pub use records::{Airport, Guest, Supplier};

/// Guests, suppliers and airports the booking form suggests from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directory {
    pub guests: Vec<Guest>,
    pub suppliers: Vec<Supplier>,
    pub airports: Vec<Airport>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct DirectoryFile {
    guests: Option<Vec<Guest>>,
    suppliers: Option<Vec<Supplier>>,
    airports: Option<Vec<Airport>>,
}

impl Default for Directory {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Directory {
    pub fn builtin() -> Self {
        Self {
            guests: builtin::guests(),
            suppliers: builtin::suppliers(),
            airports: builtin::airports(),
        }
    }

    /// Loads a JSON data file. Tables missing from the file fall back to the
    /// built-in ones.
    pub fn load_from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| {
            AppError::io_with_context(source, format!("failed to read data: {}", path.display()))
        })?;
        let parsed: DirectoryFile = serde_json::from_str(&raw)
            .map_err(|source| AppError::data(path, source.to_string()))?;

        let directory = Self {
            guests: parsed.guests.unwrap_or_else(builtin::guests),
            suppliers: parsed.suppliers.unwrap_or_else(builtin::suppliers),
            airports: parsed.airports.unwrap_or_else(builtin::airports),
        };
        directory.validate(path)?;
        tracing::info!(
            path = %path.display(),
            guests = directory.guests.len(),
            suppliers = directory.suppliers.len(),
            airports = directory.airports.len(),
            "directory loaded"
        );
        Ok(directory)
    }

    pub fn airport_index(&self, limit: usize) -> AirportIndex {
        AirportIndex::new(self.airports.clone(), limit)
    }

    fn validate(&self, path: &Path) -> AppResult<()> {
        if let Some(guest) = self.guests.iter().find(|g| g.name.trim().is_empty()) {
            return Err(AppError::data(path, format!("guest {} has no name", guest.id)));
        }
        if let Some(supplier) = self.suppliers.iter().find(|s| s.name.trim().is_empty()) {
            return Err(AppError::data(
                path,
                format!("supplier {} has no name", supplier.id),
            ));
        }
        if let Some(airport) = self
            .airports
            .iter()
            .find(|a| a.code.len() != 3 || !a.code.chars().all(|c| c.is_ascii_uppercase()))
        {
            return Err(AppError::data(
                path,
                format!("airport code must be three uppercase letters: {:?}", airport.code),
            ));
        }
        Ok(())
    }
}
