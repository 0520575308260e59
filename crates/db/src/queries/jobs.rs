// crates/db/src/queries/jobs.rs
//! Job CRUD: create, filtered listing, detail fetch, partial update, delete.

use tracing::{debug, info};

use super::sql::{bind_values, job_filter_clause, job_update_clause};
use super::types::{
    Job, JobDetail, JobFilter, JobRow, JobSummary, JobSummaryRow, JobUpdate, NewJob,
};
use crate::{Database, DbError, DbResult};

const JOB_COLUMNS: &str = "id, title, salary, equity, company_handle";

impl Database {
    /// Insert a job and return it with its generated id.
    ///
    /// An unknown `company_handle` fails the foreign key and comes back as
    /// [`DbError::Constraint`].
    pub async fn create_job(&self, job: &NewJob) -> DbResult<Job> {
        let row: JobRow = sqlx::query_as(&format!(
            "INSERT INTO jobs (title, salary, equity, company_handle) \
             VALUES (?1, ?2, ?3, ?4) RETURNING {JOB_COLUMNS}"
        ))
        .bind(&job.title)
        .bind(job.salary)
        .bind(job.equity.as_deref())
        .bind(&job.company_handle)
        .fetch_one(self.pool())
        .await
        .map_err(DbError::from_write)?;

        let job = Job::from(row);
        info!(job_id = job.id, handle = %job.company_handle, "Job created");
        Ok(job)
    }

    /// List jobs matching `filter`, ordered by title, each with its company name.
    pub async fn list_jobs(&self, filter: &JobFilter) -> DbResult<Vec<JobSummary>> {
        let clause = job_filter_clause(filter);
        let sql = format!(
            r#"SELECT j.id, j.title, j.salary, j.equity, j.company_handle, c.name
               FROM jobs j
               LEFT JOIN companies c ON c.handle = j.company_handle{}
               ORDER BY j.title, j.id"#,
            clause.to_sql()
        );
        debug!(?filter, predicates = clause.predicates().len(), "Listing jobs");

        let rows: Vec<JobSummaryRow> = bind_values(sqlx::query_as(&sql), clause.values())
            .fetch_all(self.pool())
            .await?;

        Ok(rows.into_iter().map(JobSummary::from).collect())
    }

    /// Fetch a single job row without its company.
    pub async fn find_job(&self, id: i64) -> DbResult<Job> {
        let row: Option<JobRow> =
            sqlx::query_as(&format!("SELECT {JOB_COLUMNS} FROM jobs WHERE id = ?1"))
                .bind(id)
                .fetch_optional(self.pool())
                .await?;

        row.map(Job::from).ok_or(DbError::JobNotFound(id))
    }

    /// Fetch a job with its full company record embedded.
    pub async fn get_job(&self, id: i64) -> DbResult<JobDetail> {
        let job = self.find_job(id).await?;
        let company = self.get_company(&job.company_handle).await?;
        Ok(JobDetail::new(job, company))
    }

    /// Apply the fields present in `update` and return the updated job.
    ///
    /// `id` and `company_handle` are never written.
    pub async fn update_job(&self, id: i64, update: &JobUpdate) -> DbResult<Job> {
        let clause = job_update_clause(update);
        if clause.is_empty() {
            return Err(DbError::NoUpdateFields);
        }

        let sql = format!(
            "UPDATE jobs SET {} WHERE id = ?{} RETURNING {JOB_COLUMNS}",
            clause.to_sql(),
            clause.next_placeholder()
        );
        let row: Option<JobRow> = bind_values(sqlx::query_as(&sql), clause.values())
            .bind(id)
            .fetch_optional(self.pool())
            .await
            .map_err(DbError::from_write)?;

        let job = row.map(Job::from).ok_or(DbError::JobNotFound(id))?;
        info!(job_id = id, fields = clause.values().len(), "Job updated");
        Ok(job)
    }

    /// Delete a job permanently.
    pub async fn remove_job(&self, id: i64) -> DbResult<()> {
        let row: Option<(i64,)> = sqlx::query_as("DELETE FROM jobs WHERE id = ?1 RETURNING id")
            .bind(id)
            .fetch_optional(self.pool())
            .await?;

        match row {
            Some(_) => {
                info!(job_id = id, "Job removed");
                Ok(())
            }
            None => Err(DbError::JobNotFound(id)),
        }
    }
}
