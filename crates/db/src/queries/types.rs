// crates/db/src/queries/types.rs
//! Row shapes returned by the job and company queries.
//!
//! Field names are camelCase on the wire; columns stay snake_case.

use serde::{Deserialize, Serialize};

/// A job posting as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: i64,
    pub title: String,
    pub salary: Option<i64>,
    /// Fraction of ownership in [0, 1], kept as the decimal string it was written as.
    pub equity: Option<String>,
    pub company_handle: String,
}

pub(crate) type JobRow = (i64, String, Option<i64>, Option<String>, String);

impl From<JobRow> for Job {
    fn from((id, title, salary, equity, company_handle): JobRow) -> Self {
        Self {
            id,
            title,
            salary,
            equity,
            company_handle,
        }
    }
}

/// List-view row: a job plus the owning company's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSummary {
    pub id: i64,
    pub title: String,
    pub salary: Option<i64>,
    pub equity: Option<String>,
    pub company_handle: String,
    pub company_name: Option<String>,
}

pub(crate) type JobSummaryRow = (i64, String, Option<i64>, Option<String>, String, Option<String>);

impl From<JobSummaryRow> for JobSummary {
    fn from(
        (id, title, salary, equity, company_handle, company_name): JobSummaryRow,
    ) -> Self {
        Self {
            id,
            title,
            salary,
            equity,
            company_handle,
            company_name,
        }
    }
}

/// Detail view: the job with its company embedded in place of the handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDetail {
    pub id: i64,
    pub title: String,
    pub salary: Option<i64>,
    pub equity: Option<String>,
    pub company: Company,
}

impl JobDetail {
    pub fn new(job: Job, company: Company) -> Self {
        Self {
            id: job.id,
            title: job.title,
            salary: job.salary,
            equity: job.equity,
            company,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub handle: String,
    pub name: String,
    pub description: String,
    pub num_employees: Option<i64>,
    pub logo_url: Option<String>,
}

pub(crate) type CompanyRow = (String, String, String, Option<i64>, Option<String>);

impl From<CompanyRow> for Company {
    fn from((handle, name, description, num_employees, logo_url): CompanyRow) -> Self {
        Self {
            handle,
            name,
            description,
            num_employees,
            logo_url,
        }
    }
}

/// Input for creating a company.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCompany {
    pub handle: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub num_employees: Option<i64>,
    #[serde(default)]
    pub logo_url: Option<String>,
}

/// Input for creating a job.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJob {
    pub title: String,
    #[serde(default)]
    pub salary: Option<i64>,
    #[serde(default)]
    pub equity: Option<String>,
    pub company_handle: String,
}

/// Fields to change on an existing job. `None` leaves the column untouched.
///
/// `id` and `companyHandle` are deliberately absent: neither can change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JobUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub salary: Option<i64>,
    #[serde(default)]
    pub equity: Option<String>,
}

impl JobUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.salary.is_none() && self.equity.is_none()
    }
}

/// Search filters for listing jobs. All present filters must match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JobFilter {
    /// Keep jobs with `salary >= min_salary`.
    #[serde(default)]
    pub min_salary: Option<i64>,
    /// `Some(true)` keeps jobs with equity above zero; `Some(false)` and
    /// `None` apply no equity constraint.
    #[serde(default)]
    pub has_equity: Option<bool>,
    /// Case-insensitive substring of the title.
    #[serde(default)]
    pub title: Option<String>,
}
