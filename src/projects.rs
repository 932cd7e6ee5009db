use serde::Deserialize;

/// One archive entry. The list is configuration data embedded at build time,
/// never mutated at runtime.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Project {
    pub year: String,
    pub name: String,
    pub made_at: String,
    pub built_with: Vec<String>,
    pub link: String,
}

const PROJECTS_JSON: &str = include_str!("projects.json");

/// The full project list, newest first. Both the table and the card
/// renderings on the archive page are backed by this one list.
pub fn archive_projects() -> Vec<Project> {
    serde_json::from_str(PROJECTS_JSON).expect("projects.json is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_list_parses() {
        let projects = archive_projects();
        assert_eq!(projects.len(), 8);
    }

    #[test]
    fn every_entry_is_complete() {
        for project in archive_projects() {
            assert!(!project.year.is_empty());
            assert!(!project.name.is_empty());
            assert!(!project.made_at.is_empty());
            assert!(!project.built_with.is_empty());
            assert!(project.link.starts_with("https://"));
        }
    }

    #[test]
    fn table_and_cards_see_identical_tuples() {
        // The table and the card list each read this accessor; every entry
        // must come out with the same (year, name, made_at, built_with, link).
        let table = archive_projects();
        let cards = archive_projects();
        assert_eq!(table.len(), cards.len());
        for (row, card) in table.iter().zip(&cards) {
            assert_eq!(row, card);
        }
    }

    #[test]
    fn newest_projects_first() {
        let projects = archive_projects();
        let years: Vec<i32> = projects
            .iter()
            .map(|p| p.year.parse().expect("year is numeric"))
            .collect();
        assert!(years.windows(2).all(|w| w[0] >= w[1]));
    }
}
