use crate::db::{models::*, project_files, DbPool};
use crate::error::{Error, Result};

/// Create a new project
pub async fn create_project(pool: &DbPool, new_project: &NewProject) -> Result<Project> {
    let project = sqlx::query_as::<_, Project>(
        r#"
        INSERT INTO projects (name, root_path, description)
        VALUES (?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(&new_project.name)
    .bind(&new_project.root_path)
    .bind(&new_project.description)
    .fetch_one(pool)
    .await?;

    Ok(project)
}

/// Get project by ID
pub async fn get_project(pool: &DbPool, project_id: i64) -> Result<Project> {
    let project = sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = ?")
        .bind(project_id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Project {project_id} not found")))?;

    Ok(project)
}

/// List all projects in insertion order
pub async fn list_projects(pool: &DbPool) -> Result<Vec<Project>> {
    let projects = sqlx::query_as::<_, Project>("SELECT * FROM projects ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(projects)
}

/// Count projects
pub async fn count_projects(pool: &DbPool) -> Result<i64> {
    let count = sqlx::query_scalar("SELECT COUNT(*) FROM projects")
        .fetch_one(pool)
        .await?;

    Ok(count)
}

/// Delete a project together with its files
pub async fn delete_project(pool: &DbPool, project_id: i64) -> Result<()> {
    let result = sqlx::query("DELETE FROM projects WHERE id = ?")
        .bind(project_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("Project {project_id} not found")));
    }

    Ok(())
}

/// Get a project along with every file registered against it
pub async fn get_project_with_files(pool: &DbPool, project_id: i64) -> Result<ProjectWithFiles> {
    let project = get_project(pool, project_id).await?;
    let files = project_files::list_files_for_project(pool, project.id).await?;

    Ok(ProjectWithFiles { project, files })
}
