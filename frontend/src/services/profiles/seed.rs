use common::model::profile::{Address, Coordinates, Profile, ProfileId};

const PLACEHOLDER_PHOTO: &str = "https://via.placeholder.com/150";

/// Records the application starts with when seeding is enabled.
pub fn demo_profiles() -> Vec<Profile> {
    vec![
        Profile {
            id: ProfileId(1),
            name: "John Doe".to_string(),
            description: "Software Engineer".to_string(),
            photo: PLACEHOLDER_PHOTO.to_string(),
            email: "john@example.com".to_string(),
            phone: "123-456-7890".to_string(),
            address: Address {
                street: "123 Tech St".to_string(),
                city: "San Francisco".to_string(),
                country: "USA".to_string(),
                coordinates: Coordinates::new(37.7749, -122.4194),
            },
        },
        Profile {
            id: ProfileId(2),
            name: "Jane Smith".to_string(),
            description: "Data Scientist".to_string(),
            photo: PLACEHOLDER_PHOTO.to_string(),
            email: String::new(),
            phone: String::new(),
            address: Address {
                street: "456 Data Ave".to_string(),
                city: "New York".to_string(),
                country: "USA".to_string(),
                coordinates: Coordinates::new(40.7128, -74.0060),
            },
        },
    ]
}
