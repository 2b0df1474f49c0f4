use crate::error::AppResult;
use crate::lookup::CandidateSource;

use super::records::Airport;

pub const DEFAULT_AIRPORT_RESULTS: usize = 10;

/// Airport lookup: code prefix, city or name, case-insensitive.
#[derive(Debug, Clone)]
pub struct AirportIndex {
    airports: Vec<Airport>,
    limit: usize,
}

impl AirportIndex {
    pub fn new(airports: Vec<Airport>, limit: usize) -> Self {
        Self {
            airports,
            limit: limit.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    pub fn find(&self, query: &str) -> Vec<Airport> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        let mut exact = Vec::new();
        let mut rest = Vec::new();
        for airport in &self.airports {
            let code = airport.code.to_lowercase();
            if code == needle {
                exact.push(airport.clone());
            } else if code.starts_with(&needle)
                || airport.city.to_lowercase().contains(&needle)
                || airport.name.to_lowercase().contains(&needle)
            {
                rest.push(airport.clone());
            }
        }

        exact.extend(rest);
        exact.truncate(self.limit);
        exact
    }
}

impl CandidateSource<Airport> for AirportIndex {
    fn search(&self, query: &str) -> AppResult<Vec<Airport>> {
        Ok(self.find(query))
    }
}

#[cfg(test)]
mod tests {
    use crate::directory::builtin;

    use super::{AirportIndex, DEFAULT_AIRPORT_RESULTS};

    fn codes(found: &[crate::directory::Airport]) -> Vec<&str> {
        found.iter().map(|airport| airport.code.as_str()).collect()
    }

    #[test]
    fn exact_code_ranks_first() {
        let mut airports = builtin::airports();
        airports.insert(
            0,
            crate::directory::Airport {
                code: "XDL".to_string(),
                name: "Delta Field".to_string(),
                city: "Deltaville".to_string(),
                country: "Nowhere".to_string(),
            },
        );
        let index = AirportIndex::new(airports, DEFAULT_AIRPORT_RESULTS);
        assert_eq!(codes(&index.find("del")), vec!["DEL", "XDL"]);
        assert_eq!(codes(&index.find("goa")), vec!["GOI", "GOX"]);
    }

    #[test]
    fn matches_city_and_name() {
        let index = AirportIndex::new(builtin::airports(), DEFAULT_AIRPORT_RESULTS);
        assert_eq!(codes(&index.find("Paris")), vec!["CDG", "ORY"]);
        assert_eq!(codes(&index.find("changi")), vec!["SIN"]);
        assert!(index.find("   ").is_empty());
    }

    #[test]
    fn results_are_capped() {
        let index = AirportIndex::new(builtin::airports(), 3);
        assert_eq!(index.find("in").len(), 3);

        let uncapped = AirportIndex::new(builtin::airports(), DEFAULT_AIRPORT_RESULTS);
        assert_eq!(uncapped.find("international").len(), DEFAULT_AIRPORT_RESULTS);
    }
}
