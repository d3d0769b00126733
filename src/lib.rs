use serde::Deserialize;

pub mod affiliations;
pub mod format;
pub mod generate;

pub use affiliations::{AffiliationIndex, AffiliationRegistry, IndexStyle};

pub const EXIT_STATUS_SUCCESS: u8 = 0;
pub const EXIT_STATUS_OPTION_ERROR: u8 = 3;
pub const EXIT_STATUS_FAILURE: u8 = 5;

/// One row of the authors CSV file
#[derive(Debug, Clone, Deserialize)]
pub struct AuthorRecord {
    #[serde(rename = "Firstnames")]
    pub firstnames: String,
    #[serde(rename = "Lastname")]
    pub lastname: String,
    #[serde(rename = "Affiliation")]
    pub affiliation: String,
    #[serde(rename = "ORCID", default)]
    pub orcid: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub affiliation: AffiliationIndex,
    pub orcid: Option<String>,
}

impl Author {
    /// An empty ORCID string is treated as absent
    pub fn new(name: String, affiliation: AffiliationIndex, orcid: Option<String>) -> Self {
        Self {
            name,
            affiliation,
            orcid: orcid.filter(|o| !o.is_empty()),
        }
    }

    pub fn escaped_name(&self) -> String {
        format::escape_latex(&self.name)
    }
}

#[derive(Debug, Clone)]
pub struct AuthorList {
    pub authors: Vec<Author>,
    pub affiliations: AffiliationRegistry,
}

impl AuthorList {
    /// Authors joined with ", " in output order
    pub fn joined_names(&self) -> String {
        self.authors
            .iter()
            .map(|author| author.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
