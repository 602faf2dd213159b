use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use crate::model::draft::ProfileDraft;

/// Identifier assigned to a profile by the store when it is created.
///
/// Serialized as a bare integer. `Display`/`FromStr` let the id travel through
/// route segments such as `/profile/2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(pub u32);

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProfileId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(ProfileId)
    }
}

/// Latitude/longitude pair.
///
/// On the wire this is always a two element array `[lat, lng]`, which is the
/// shape Leaflet expects for `center` and marker positions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<[f64; 2]> for Coordinates {
    fn from([latitude, longitude]: [f64; 2]) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<Coordinates> for [f64; 2] {
    fn from(coordinates: Coordinates) -> Self {
        [coordinates.latitude, coordinates.longitude]
    }
}

/// Postal address of a profile, including where to put the map marker.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub country: String,
    pub coordinates: Coordinates,
}

impl Address {
    /// Single line form used by the details page: `street, city, country`.
    pub fn one_line(&self) -> String {
        format!("{}, {}, {}", self.street, self.city, self.country)
    }
}

/// A person listed in the directory.
///
/// Profiles are only ever produced by the store (which assigns `id`) and are
/// replaced whole; there is no partial update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    pub name: String,
    pub description: String,
    /// URL of the profile picture.
    pub photo: String,
    pub email: String,
    pub phone: String,
    pub address: Address,
}

impl Profile {
    /// Attaches a store-assigned id to a draft.
    pub fn from_draft(id: ProfileId, draft: ProfileDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            photo: draft.photo,
            email: draft.email,
            phone: draft.phone,
            address: draft.address,
        }
    }

    /// The draft this profile would have been created from.
    pub fn to_draft(&self) -> ProfileDraft {
        ProfileDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            photo: self.photo.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
        }
    }
}
