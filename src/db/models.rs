use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

/// A named unit of work grouping tracked files
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub root_path: Option<String>,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProject {
    pub name: String,
    pub root_path: Option<String>,
    pub description: String,
}

/// Review state of one file, scoped to a project
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProjectFile {
    pub id: i64,
    pub project_id: i64,
    pub file_name: String,
    pub last_read_commit: String,
    pub current_commit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProjectFile {
    pub project_id: i64,
    pub file_name: String,
    pub last_read_commit: String,
    pub current_commit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectWithFiles {
    #[serde(flatten)]
    pub project: Project,
    pub files: Vec<ProjectFile>,
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for ProjectFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.file_name)
    }
}
