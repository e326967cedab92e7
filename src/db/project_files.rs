use crate::db::{models::*, DbPool};
use crate::error::Result;

/// Register a file against a project
pub async fn create_project_file(pool: &DbPool, new_file: &NewProjectFile) -> Result<ProjectFile> {
    let file = sqlx::query_as::<_, ProjectFile>(
        r#"
        INSERT INTO project_files (project_id, file_name, last_read_commit, current_commit)
        VALUES (?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(new_file.project_id)
    .bind(&new_file.file_name)
    .bind(&new_file.last_read_commit)
    .bind(&new_file.current_commit)
    .fetch_one(pool)
    .await?;

    Ok(file)
}

/// List the files belonging to a project
pub async fn list_files_for_project(pool: &DbPool, project_id: i64) -> Result<Vec<ProjectFile>> {
    let files = sqlx::query_as::<_, ProjectFile>(
        "SELECT * FROM project_files WHERE project_id = ? ORDER BY id",
    )
    .bind(project_id)
    .fetch_all(pool)
    .await?;

    Ok(files)
}

/// Count the files belonging to a project
pub async fn count_files_for_project(pool: &DbPool, project_id: i64) -> Result<i64> {
    let count = sqlx::query_scalar("SELECT COUNT(*) FROM project_files WHERE project_id = ?")
        .bind(project_id)
        .fetch_one(pool)
        .await?;

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{init_pool, projects, run_migrations};

    async fn setup() -> (DbPool, Project) {
        let pool = init_pool("sqlite::memory:").await.unwrap();
        run_migrations(&pool).await.unwrap();

        let project = projects::create_project(
            &pool,
            &NewProject {
                name: "Demo".to_string(),
                root_path: Some("/src/demo".to_string()),
                description: "desc".to_string(),
            },
        )
        .await
        .unwrap();

        (pool, project)
    }

    fn new_file(project_id: i64, name: &str) -> NewProjectFile {
        NewProjectFile {
            project_id,
            file_name: name.to_string(),
            last_read_commit: "abc123".to_string(),
            current_commit: "def456".to_string(),
        }
    }

    #[tokio::test]
    async fn test_files_are_scoped_to_project() {
        let (pool, project) = setup().await;
        let other = projects::create_project(
            &pool,
            &NewProject {
                name: "Other".to_string(),
                root_path: None,
                description: "other".to_string(),
            },
        )
        .await
        .unwrap();

        create_project_file(&pool, &new_file(project.id, "src/main.rs"))
            .await
            .unwrap();
        create_project_file(&pool, &new_file(project.id, "src/lib.rs"))
            .await
            .unwrap();
        create_project_file(&pool, &new_file(other.id, "README.md"))
            .await
            .unwrap();

        let files = list_files_for_project(&pool, project.id).await.unwrap();
        let names: Vec<String> = files.iter().map(|f| f.to_string()).collect();
        assert_eq!(names, vec!["src/main.rs", "src/lib.rs"]);
        assert_eq!(count_files_for_project(&pool, other.id).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_file_requires_existing_project() {
        let (pool, _project) = setup().await;

        let result = create_project_file(&pool, &new_file(9999, "orphan.rs")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_deleting_project_cascades_to_files() {
        let (pool, project) = setup().await;

        create_project_file(&pool, &new_file(project.id, "a.txt"))
            .await
            .unwrap();
        create_project_file(&pool, &new_file(project.id, "b.txt"))
            .await
            .unwrap();
        assert_eq!(count_files_for_project(&pool, project.id).await.unwrap(), 2);

        projects::delete_project(&pool, project.id).await.unwrap();

        assert_eq!(count_files_for_project(&pool, project.id).await.unwrap(), 0);
    }
}
