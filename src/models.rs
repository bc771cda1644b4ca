//! Frontend Models
//!
//! Data structures matching backend entities, plus the local form draft.

use serde::{Deserialize, Serialize};

/// Note attached to an artwork added through the form
pub const DEFAULT_PLACE_NOTE: &str = "Хочу побачити";

/// Server-assigned ids; the backend sends plain JSON numbers
pub type ProjectId = i64;
pub type PlaceId = i64;

/// Travel plan project (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub places: Vec<Place>,
}

/// Artwork attached to a project (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Place {
    pub id: PlaceId,
    pub external_id: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub is_visited: bool,
}

/// Unsaved form input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub art_id: String,
}

impl ProjectDraft {
    /// HTML `required` on the name input: any non-empty value, whitespace included
    pub fn is_submittable(&self) -> bool {
        !self.name.is_empty()
    }

    /// Build the create payload. At most one place, and only for a non-blank artwork id.
    pub fn to_args(&self) -> CreateProjectArgs {
        let art_id = self.art_id.trim();
        let places = if art_id.is_empty() {
            Vec::new()
        } else {
            vec![CreatePlaceArgs {
                external_id: art_id.to_string(),
                notes: DEFAULT_PLACE_NOTE.to_string(),
            }]
        };

        CreateProjectArgs {
            name: self.name.clone(),
            description: self.description.clone(),
            start_date: self.start_date.clone(),
            places,
        }
    }
}

// ========================
// Request / Response Bodies
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateProjectArgs {
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub places: Vec<CreatePlaceArgs>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePlaceArgs {
    pub external_id: String,
    pub notes: String,
}

/// Error body returned by the backend on rejected requests
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorDetail {
    /// Only string details are shown; validation errors come back as arrays.
    pub fn message(self) -> Option<String> {
        match self.detail {
            Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn draft(name: &str, art_id: &str) -> ProjectDraft {
        ProjectDraft {
            name: name.to_string(),
            art_id: art_id.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_args_with_artwork() {
        let args = draft("Trip", "27992").to_args();
        assert_eq!(
            serde_json::to_value(&args).unwrap(),
            json!({
                "name": "Trip",
                "description": "",
                "start_date": "",
                "places": [{ "external_id": "27992", "notes": "Хочу побачити" }]
            })
        );
    }

    #[test]
    fn test_args_trim_artwork_id() {
        let args = draft("Trip", "  123 ").to_args();
        assert_eq!(args.places.len(), 1);
        assert_eq!(args.places[0].external_id, "123");
    }

    #[test]
    fn test_args_without_artwork() {
        assert!(draft("Trip", "").to_args().places.is_empty());
        assert!(draft("Trip", "   ").to_args().places.is_empty());
    }

    #[test]
    fn test_submittable_requires_name() {
        assert!(draft("Trip", "").is_submittable());
        assert!(!draft("", "1").is_submittable());
        assert!(draft("  ", "").is_submittable());
    }

    #[test]
    fn test_project_decodes_missing_fields() {
        let project: Project = serde_json::from_value(json!({
            "id": 3,
            "name": "Weekend",
            "description": null,
            "is_completed": false
        }))
        .unwrap();
        assert_eq!(project.description, None);
        assert_eq!(project.start_date, None);
        assert!(project.places.is_empty());
    }

    #[test]
    fn test_place_decodes_in_order() {
        let project: Project = serde_json::from_value(json!({
            "id": 1,
            "name": "Trip",
            "is_completed": true,
            "places": [
                { "id": 9, "external_id": "b", "notes": null, "is_visited": true },
                { "id": 2, "external_id": "a", "notes": "x", "is_visited": false }
            ]
        }))
        .unwrap();
        let ids: Vec<PlaceId> = project.places.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![9, 2]);
        assert_eq!(project.places[1].notes.as_deref(), Some("x"));
    }

    #[test]
    fn test_ids_beyond_u32() {
        let project: Project = serde_json::from_value(json!({
            "id": 5_000_000_000i64,
            "name": "Big",
            "is_completed": false,
            "places": [{ "id": 4_294_967_296i64, "external_id": "1", "is_visited": false }]
        }))
        .unwrap();
        assert_eq!(project.id, 5_000_000_000);
        assert_eq!(project.places[0].id, 4_294_967_296);
    }

    #[test]
    fn test_error_detail_message() {
        let d: ErrorDetail = serde_json::from_str(r#"{"detail":"Project not found"}"#).unwrap();
        assert_eq!(d.message().as_deref(), Some("Project not found"));

        let d: ErrorDetail = serde_json::from_str(r#"{"detail":[{"loc":["body","name"]}]}"#).unwrap();
        assert_eq!(d.message(), None);

        let d: ErrorDetail = serde_json::from_str("{}").unwrap();
        assert_eq!(d.message(), None);
    }
}
