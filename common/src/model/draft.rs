//! Profile drafts: the "profile without id" that the admin form edits and the
//! store turns into a [`Profile`](crate::model::profile::Profile).
//!
//! Form edits go through [`ProfileDraft::set`] and [`ProfileDraft::set_address`]
//! so that every update replaces exactly one field. Top level fields are a
//! shallow merge; address fields are merged inside the nested address.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::profile::Address;

/// Top level text fields of a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Description,
    Photo,
    Email,
    Phone,
}

impl DraftField {
    pub const ALL: [DraftField; 5] = [
        DraftField::Name,
        DraftField::Description,
        DraftField::Photo,
        DraftField::Email,
        DraftField::Phone,
    ];

    /// Form label, also used when reporting missing fields.
    pub fn label(self) -> &'static str {
        match self {
            DraftField::Name => "Name",
            DraftField::Description => "Description",
            DraftField::Photo => "Photo URL",
            DraftField::Email => "Email",
            DraftField::Phone => "Phone",
        }
    }
}

/// Fields of the nested address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressField {
    Street,
    City,
    Country,
    Latitude,
    Longitude,
}

impl AddressField {
    pub const ALL: [AddressField; 5] = [
        AddressField::Street,
        AddressField::City,
        AddressField::Country,
        AddressField::Latitude,
        AddressField::Longitude,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AddressField::Street => "Street",
            AddressField::City => "City",
            AddressField::Country => "Country",
            AddressField::Latitude => "Latitude",
            AddressField::Longitude => "Longitude",
        }
    }

    /// Coordinates always hold a number, so they can never be missing.
    pub fn is_required(self) -> bool {
        !matches!(self, AddressField::Latitude | AddressField::Longitude)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

/// Parses coordinate input text. Blank, non-numeric and non-finite values
/// give `None`.
pub fn parse_coordinate(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}

/// A profile that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProfileDraft {
    pub name: String,
    pub description: String,
    pub photo: String,
    pub email: String,
    pub phone: String,
    pub address: Address,
}

impl ProfileDraft {
    /// The initial form shape: empty strings and coordinates `[0, 0]`.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Description => &self.description,
            DraftField::Photo => &self.photo,
            DraftField::Email => &self.email,
            DraftField::Phone => &self.phone,
        }
    }

    /// Replaces one top level field.
    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let slot = match field {
            DraftField::Name => &mut self.name,
            DraftField::Description => &mut self.description,
            DraftField::Photo => &mut self.photo,
            DraftField::Email => &mut self.email,
            DraftField::Phone => &mut self.phone,
        };
        *slot = value.into();
    }

    /// Text value of an address field as the form shows it.
    pub fn address_value(&self, field: AddressField) -> String {
        let address = &self.address;
        match field {
            AddressField::Street => address.street.clone(),
            AddressField::City => address.city.clone(),
            AddressField::Country => address.country.clone(),
            AddressField::Latitude => address.coordinates.latitude.to_string(),
            AddressField::Longitude => address.coordinates.longitude.to_string(),
        }
    }

    /// Replaces one address field, keeping the other address fields.
    ///
    /// Returns `false` when a coordinate value does not parse as a number; the
    /// previous coordinate is kept in that case.
    pub fn set_address(&mut self, field: AddressField, value: &str) -> bool {
        let address = &mut self.address;
        match field {
            AddressField::Street => address.street = value.to_string(),
            AddressField::City => address.city = value.to_string(),
            AddressField::Country => address.country = value.to_string(),
            AddressField::Latitude | AddressField::Longitude => {
                let Some(number) = parse_coordinate(value) else {
                    return false;
                };
                if field == AddressField::Latitude {
                    address.coordinates.latitude = number;
                } else {
                    address.coordinates.longitude = number;
                }
            }
        }
        true
    }

    /// Labels of required fields that are blank, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let top = DraftField::ALL
            .into_iter()
            .filter(|field| self.get(*field).trim().is_empty())
            .map(DraftField::label);
        let nested = AddressField::ALL
            .into_iter()
            .filter(|field| field.is_required())
            .filter(|field| self.address_value(*field).trim().is_empty())
            .map(AddressField::label);
        top.chain(nested).collect()
    }

    pub fn validate(&self) -> Result<(), DraftError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(DraftError::MissingFields(missing))
        }
    }
}
