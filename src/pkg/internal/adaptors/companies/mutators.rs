use sqlx::PgConnection;

use crate::pkg::internal::adaptors::companies::spec::{CompanyEntry, NewCompany};
use crate::prelude::Result;

pub struct CompanyMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> CompanyMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        CompanyMutator { pool }
    }

    /// Inserts every company in a single statement. Atomicity across the
    /// batch comes from the caller's transaction.
    pub async fn bulk_create(&mut self, companies: Vec<NewCompany>) -> Result<Vec<CompanyEntry>> {
        if companies.is_empty() {
            return Ok(Vec::new());
        }
        let mut query_builder = sqlx::QueryBuilder::new(
            "INSERT INTO companies (name, cgpa, deadline, form_link, profiles, branches) ",
        );
        query_builder.push_values(companies, |mut b, company| {
            b.push_bind(company.name)
                .push_bind(company.cgpa)
                .push_bind(company.deadline)
                .push_bind(company.form_link)
                .push_bind(company.profiles)
                .push_bind(company.branches);
        });
        query_builder.push(" RETURNING id, name, cgpa, deadline, form_link, profiles, branches");
        let rows = query_builder
            .build_query_as::<CompanyEntry>()
            .fetch_all(&mut *self.pool)
            .await?;
        Ok(rows)
    }
}
