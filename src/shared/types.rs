use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DateError;
use crate::utils::format::parse_wedding_date;

/// The wedding document served by the backend.
///
/// Only `date` is required; every other block is optional and the page simply
/// skips sections it has no data for. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeddingInfo {
    pub date: String,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub message: Option<Message>,
    #[serde(default)]
    pub groom: Option<Person>,
    #[serde(default)]
    pub bride: Option<Person>,
    #[serde(default)]
    pub gallery_images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub intro: Option<String>,
    #[serde(default)]
    pub invitation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub name: String,
    #[serde(default)]
    pub phone_number: Option<String>,
}

impl WeddingInfo {
    /// Calendar date of the ceremony. Checked once at the fetch boundary, so
    /// for a `WeddingInfo` that reached the page this cannot fail.
    pub fn wedding_date(&self) -> Result<NaiveDate, DateError> {
        parse_wedding_date(&self.date)
    }

    pub fn validate(&self) -> Result<(), DateError> {
        self.wedding_date().map(|_| ())
    }
}
