use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Fields read off a Croatian identity card. Anything the model could not
/// read is `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct IdCardRecord {
    #[serde(default)]
    pub ime: Option<String>,
    #[serde(default)]
    pub prezime: Option<String>,
    #[serde(default)]
    pub datum_rodenja: Option<String>,
    #[serde(default)]
    pub mjesto_rodenja: Option<String>,
    #[serde(default)]
    pub broj_osobne_iskaznice: Option<String>,
}

impl IdCardRecord {
    /// Checks an extracted JSON object against the record shape.
    pub fn validate(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::schema(e.to_string()))
    }
}
