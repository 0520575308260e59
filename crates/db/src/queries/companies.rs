// crates/db/src/queries/companies.rs
// Company lookups backing the job detail view, plus inserts for seeding.

use tracing::info;

use super::types::{Company, CompanyRow, NewCompany};
use crate::{Database, DbError, DbResult};

impl Database {
    /// Insert a company.
    pub async fn create_company(&self, company: &NewCompany) -> DbResult<Company> {
        let row: CompanyRow = sqlx::query_as(
            r#"INSERT INTO companies (handle, name, description, num_employees, logo_url)
               VALUES (?1, ?2, ?3, ?4, ?5)
               RETURNING handle, name, description, num_employees, logo_url"#,
        )
        .bind(&company.handle)
        .bind(&company.name)
        .bind(&company.description)
        .bind(company.num_employees)
        .bind(company.logo_url.as_deref())
        .fetch_one(self.pool())
        .await
        .map_err(DbError::from_write)?;

        info!(handle = %company.handle, "Company created");
        Ok(Company::from(row))
    }

    /// Get a company by handle.
    pub async fn get_company(&self, handle: &str) -> DbResult<Company> {
        let row: Option<CompanyRow> = sqlx::query_as(
            r#"SELECT handle, name, description, num_employees, logo_url
               FROM companies
               WHERE handle = ?1"#,
        )
        .bind(handle)
        .fetch_optional(self.pool())
        .await?;

        row.map(Company::from)
            .ok_or_else(|| DbError::CompanyNotFound(handle.to_string()))
    }
}
