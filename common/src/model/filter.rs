use crate::model::profile::Profile;

/// Case-insensitive substring match on the profile name.
pub fn name_matches(profile: &Profile, term: &str) -> bool {
    profile.name.to_lowercase().contains(&term.to_lowercase())
}

/// Returns the profiles whose name contains `term`, ignoring case.
///
/// Order is preserved and an empty term keeps every profile.
pub fn filter_by_name<'a>(profiles: &'a [Profile], term: &str) -> Vec<&'a Profile> {
    profiles
        .iter()
        .filter(|profile| name_matches(profile, term))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::draft::ProfileDraft;
    use crate::model::profile::ProfileId;

    fn named(id: u32, name: &str) -> Profile {
        let mut draft = ProfileDraft::empty();
        draft.name = name.to_string();
        Profile::from_draft(ProfileId(id), draft)
    }

    fn ids(profiles: &[&Profile]) -> Vec<u32> {
        profiles.iter().map(|p| p.id.0).collect()
    }

    #[test]
    fn empty_term_keeps_everything_in_order() {
        let profiles = vec![named(3, "Zed"), named(1, "Amy"), named(2, "Bob")];
        assert_eq!(ids(&filter_by_name(&profiles, "")), vec![3, 1, 2]);
    }

    #[test]
    fn match_ignores_case() {
        let profiles = vec![named(1, "John Doe"), named(2, "Jane Smith"), named(3, "Johanna")];

        assert_eq!(ids(&filter_by_name(&profiles, "JOH")), vec![1, 3]);
        assert_eq!(ids(&filter_by_name(&profiles, "smith")), vec![2]);
        assert_eq!(ids(&filter_by_name(&profiles, "e S")), vec![2]);
    }

    #[test]
    fn no_match_gives_empty_result() {
        let profiles = vec![named(1, "John Doe")];
        assert!(filter_by_name(&profiles, "xyz").is_empty());
    }

    #[test]
    fn only_the_name_is_searched() {
        let mut profile = named(1, "John Doe");
        profile.description = "Data Scientist".to_string();
        assert!(!name_matches(&profile, "data"));
    }
}
