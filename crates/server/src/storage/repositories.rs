// Repository layer for database operations
//
// Each `list_*` query is a field-equality find: a NULL parameter leaves that
// column unconstrained. Results come back in insertion order (`seq`).

use anyhow::Result;
use eventstats_core::{Event, Participation, Record, Student};
use sqlx::PgPool;
use uuid::Uuid;

use crate::storage::error::StoreError;
use crate::storage::models::*;

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Create database connection from URL
    pub async fn from_url(database_url: &str) -> Result<Self> {
        let pool = PgPool::connect(database_url).await?;
        Ok(Self { pool })
    }

    /// Apply pending schema migrations
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    /// Round-trip a trivial query to check the connection
    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    // ============================================
    // Students
    // ============================================

    pub async fn create_student(&self, input: &Student) -> Result<StudentRow> {
        let row = sqlx::query_as::<_, StudentRow>(
            r#"
            INSERT INTO students (id, roll_number, name, branch, current_semester, academic_year)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, roll_number, name, branch, current_semester, academic_year, created_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&input.roll_number)
        .bind(&input.name)
        .bind(&input.branch)
        .bind(input.current_semester)
        .bind(&input.academic_year)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| -> anyhow::Error {
            if e.as_database_error()
                .is_some_and(|db_err| db_err.is_unique_violation())
            {
                StoreError::DuplicateKey {
                    collection: Student::COLLECTION,
                    key: input.roll_number.clone(),
                }
                .into()
            } else {
                e.into()
            }
        })?;

        Ok(row)
    }

    pub async fn get_student_by_roll_number(
        &self,
        roll_number: &str,
    ) -> Result<Option<StudentRow>> {
        let row = sqlx::query_as::<_, StudentRow>(
            r#"
            SELECT id, roll_number, name, branch, current_semester, academic_year, created_at
            FROM students
            WHERE roll_number = $1
            "#,
        )
        .bind(roll_number)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn list_students(&self, filter: &StudentFilter) -> Result<Vec<StudentRow>> {
        let rows = sqlx::query_as::<_, StudentRow>(
            r#"
            SELECT id, roll_number, name, branch, current_semester, academic_year, created_at
            FROM students
            WHERE ($1::text IS NULL OR academic_year = $1)
              AND ($2::text IS NULL OR branch = $2)
            ORDER BY seq ASC
            "#,
        )
        .bind(&filter.academic_year)
        .bind(&filter.branch)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    // ============================================
    // Events (series definitions)
    // ============================================

    pub async fn create_event(&self, input: &Event) -> Result<EventRow> {
        let row = sqlx::query_as::<_, EventRow>(
            r#"
            INSERT INTO events (id, name, branch, academic_year)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, branch, academic_year, created_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&input.name)
        .bind(&input.branch)
        .bind(&input.academic_year)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn list_events(&self, filter: &EventFilter) -> Result<Vec<EventRow>> {
        let rows = sqlx::query_as::<_, EventRow>(
            r#"
            SELECT id, name, branch, academic_year, created_at
            FROM events
            WHERE ($1::text IS NULL OR academic_year = $1)
              AND ($2::text IS NULL OR branch = $2)
            ORDER BY seq ASC
            "#,
        )
        .bind(&filter.academic_year)
        .bind(&filter.branch)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    // ============================================
    // Participations (one row per student per occurrence)
    // ============================================

    pub async fn create_participation(&self, input: &Participation) -> Result<ParticipationRow> {
        let row = sqlx::query_as::<_, ParticipationRow>(
            r#"
            INSERT INTO participations (id, roll_number, event_name, event_date, semester, status, academic_year, branch)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, roll_number, event_name, event_date, semester, status, academic_year, branch, created_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&input.roll_number)
        .bind(&input.event_name)
        .bind(input.event_date)
        .bind(input.semester)
        .bind(input.status.as_str())
        .bind(&input.academic_year)
        .bind(&input.branch)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn list_participations(
        &self,
        filter: &ParticipationFilter,
    ) -> Result<Vec<ParticipationRow>> {
        let rows = sqlx::query_as::<_, ParticipationRow>(
            r#"
            SELECT id, roll_number, event_name, event_date, semester, status, academic_year, branch, created_at
            FROM participations
            WHERE ($1::text IS NULL OR roll_number = $1)
              AND ($2::text IS NULL OR academic_year = $2)
            ORDER BY seq ASC
            "#,
        )
        .bind(&filter.roll_number)
        .bind(&filter.academic_year)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
