use sqlx::{PgPool, postgres::PgPoolOptions};
use std::time::Duration;

pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    // Create projects table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS projects (
            id SERIAL PRIMARY KEY,
            name VARCHAR(50) NOT NULL,
            description VARCHAR(500) NOT NULL,
            author_id INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Create users table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            is_supervisor BOOLEAN NOT NULL DEFAULT FALSE
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Create applicants table; the composite key makes duplicate
    // applications impossible at the storage level
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS applicants (
            project_id INTEGER NOT NULL,
            student_id INTEGER NOT NULL,
            PRIMARY KEY (project_id, student_id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Create views table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS views (
            project_id INTEGER NOT NULL,
            student_id INTEGER NOT NULL,
            PRIMARY KEY (project_id, student_id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes for better query performance
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_projects_author_id ON projects(author_id)")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_applicants_student_id ON applicants(student_id)")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_users_email ON users(email)")
        .execute(pool)
        .await?;

    tracing::info!("Database migrations completed successfully");
    Ok(())
}
