use serde::{Deserialize, Deserializer};

use crate::db::models::NewProject;
use crate::utils::validation::{validate_max_length, validate_required};

pub const NAME_MAX_LENGTH: usize = 100;
pub const ROOT_PATH_MAX_LENGTH: usize = 255;

/// Deserialize optional string, treating empty strings as None
fn deserialize_optional_string<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => Ok(Some(s.to_string())),
    }
}

/// Submitted project creation form
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectForm {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub root_path: Option<String>,
    #[serde(default)]
    pub description: String,
}

/// Field-level errors for [`ProjectForm`]
#[derive(Debug, Clone, Default)]
pub struct ProjectFormErrors {
    pub name: Vec<String>,
    pub root_path: Vec<String>,
    pub description: Vec<String>,
}

impl ProjectFormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.root_path.is_empty() && self.description.is_empty()
    }
}

impl ProjectForm {
    /// Validate the form, returning the record to insert or the field errors
    pub fn validate(&self) -> Result<NewProject, ProjectFormErrors> {
        let name = self.name.trim();
        let description = self.description.trim();
        let root_path = self.root_path.as_deref().map(str::trim);

        let mut errors = ProjectFormErrors::default();

        errors.name.extend(
            validate_required(name)
                .or_else(|| validate_max_length(name, NAME_MAX_LENGTH)),
        );
        errors.description.extend(validate_required(description));
        if let Some(path) = root_path {
            errors
                .root_path
                .extend(validate_max_length(path, ROOT_PATH_MAX_LENGTH));
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewProject {
            name: name.to_string(),
            root_path: root_path.map(str::to_string),
            description: description.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, root_path: Option<&str>, description: &str) -> ProjectForm {
        ProjectForm {
            name: name.to_string(),
            root_path: root_path.map(str::to_string),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        let project = form("  Demo ", None, "desc").validate().unwrap();
        assert_eq!(project.name, "Demo");
        assert_eq!(project.description, "desc");
        assert!(project.root_path.is_none());
    }

    #[test]
    fn test_missing_required_fields() {
        let errors = form("", None, "").validate().unwrap_err();
        assert_eq!(errors.name.len(), 1);
        assert_eq!(errors.description.len(), 1);
        assert!(errors.root_path.is_empty());
    }

    #[test]
    fn test_length_limits() {
        let long_name = "n".repeat(NAME_MAX_LENGTH + 1);
        let long_path = "p".repeat(ROOT_PATH_MAX_LENGTH + 1);

        let errors = form(&long_name, Some(&long_path), "desc")
            .validate()
            .unwrap_err();
        assert_eq!(errors.name.len(), 1);
        assert_eq!(errors.root_path.len(), 1);
        assert!(errors.description.is_empty());

        let exact_name = "n".repeat(NAME_MAX_LENGTH);
        assert!(form(&exact_name, None, "desc").validate().is_ok());
    }
}
