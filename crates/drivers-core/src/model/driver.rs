use serde::{Deserialize, Serialize};

/// Driver - the single entity managed by the registry
///
/// Field names serialize in camelCase (`firstName`, `phoneNumber`) to match
/// the table columns and the JSON shape clients already consume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    /// Storage-assigned identifier; ignored on insert
    #[serde(default)]
    pub id: i64,

    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    /// Unique across all drivers
    #[serde(default)]
    pub email: String,

    /// Unique across all drivers
    #[serde(default)]
    pub phone_number: String,
}

impl Driver {
    /// Create a driver that has not been persisted yet (id 0)
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            phone_number: phone_number.into(),
        }
    }

    /// Return a copy carrying the given id
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    /// "First Last", as shown in logs and messages
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
