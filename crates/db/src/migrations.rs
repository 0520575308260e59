/// Inline SQL migrations for the jobly schema.
///
/// One statement per entry; `Database::run_migrations` applies each entry
/// once and records its 1-based index in `_migrations`.

pub const MIGRATIONS: &[&str] = &[
    // Migration 1: companies
    r#"
CREATE TABLE IF NOT EXISTS companies (
    handle TEXT PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    description TEXT NOT NULL,
    num_employees INTEGER CHECK (num_employees >= 0),
    logo_url TEXT
);
"#,
    // Migration 2: jobs. AUTOINCREMENT keeps ids from being reused after deletes.
    r#"
CREATE TABLE IF NOT EXISTS jobs (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    salary INTEGER CHECK (salary >= 0),
    equity TEXT CHECK (equity IS NULL OR CAST(equity AS REAL) BETWEEN 0 AND 1),
    company_handle TEXT NOT NULL REFERENCES companies(handle) ON DELETE CASCADE
);
"#,
    r#"
CREATE INDEX IF NOT EXISTS idx_jobs_company ON jobs(company_handle);
"#,
    r#"
CREATE INDEX IF NOT EXISTS idx_jobs_title ON jobs(title);
"#,
];
