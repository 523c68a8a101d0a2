//! Spreadsheet (CSV) row shapes for registrar and housing-office exports.
//!
//! The header names are fixed by the upstream exports, so the structs map
//! them explicitly with serde renames.

use serde::{Deserialize, Serialize};

/// A row of the registrar's draw-number export.
///
/// Columns: `First Name, Last Name, Year, In Dorm, Number, Email`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawNumberRecord {
    #[serde(rename = "First Name")]
    pub first_name: String,
    #[serde(rename = "Last Name")]
    pub last_name: String,
    /// Registrar year code: `SR`, `JR`, `SO`, or `FR`.
    #[serde(rename = "Year")]
    pub year: String,
    /// Dorm name of an in-dorm preference; blank for none.
    #[serde(rename = "In Dorm")]
    pub in_dorm: Option<String>,
    #[serde(rename = "Number")]
    pub number: f64,
    #[serde(rename = "Email")]
    pub email: String,
}

/// A row of the housing office's preplacement export.
///
/// Columns: `First Name, Last Name, Email, Dorm, Room, Preplacement Reason`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreplacementRecord {
    #[serde(rename = "First Name")]
    pub first_name: String,
    #[serde(rename = "Last Name")]
    pub last_name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Dorm")]
    pub dorm: String,
    #[serde(rename = "Room")]
    pub room: String,
    #[serde(rename = "Preplacement Reason")]
    pub reason: Option<String>,
}

impl PreplacementRecord {
    /// Reslife role derived from the free-form reason column.
    ///
    /// Only proctor and mentor placements carry a role; every other reason
    /// (or a blank one) maps to `none`.
    pub fn reslife_role(&self) -> &'static str {
        match &self.reason {
            Some(reason) => {
                let reason = reason.to_lowercase();
                if reason.contains("proctor") {
                    "proctor"
                } else if reason.contains("mentor") {
                    "mentor"
                } else {
                    "none"
                }
            }
            None => "none",
        }
    }
}
