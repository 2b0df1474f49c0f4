use serde::{Deserialize, Serialize};

use crate::picker::Candidate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub tour: Option<String>,
}

impl Candidate for Guest {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn detail(&self) -> Option<String> {
        match (&self.tour, &self.phone) {
            (Some(tour), _) => Some(tour.clone()),
            (None, Some(phone)) => Some(phone.clone()),
            (None, None) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: String,
    pub name: String,
    pub service: String,
    #[serde(default)]
    pub city: Option<String>,
}

impl Candidate for Supplier {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn detail(&self) -> Option<String> {
        Some(match &self.city {
            Some(city) => format!("{} · {city}", self.service),
            None => self.service.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Airport {
    pub code: String,
    pub name: String,
    pub city: String,
    pub country: String,
}

impl Airport {
    /// The text written into the airport field, e.g. `DEL - Delhi`.
    pub fn label(&self) -> String {
        format!("{} - {}", self.code, self.city)
    }
}

impl Candidate for Airport {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn detail(&self) -> Option<String> {
        Some(format!("{} · {}, {}", self.code, self.city, self.country))
    }

    fn commit_value(&self) -> String {
        self.label()
    }
}
