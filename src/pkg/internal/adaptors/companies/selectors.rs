use sqlx::PgConnection;

use crate::pkg::internal::adaptors::companies::spec::CompanyEntry;
use crate::prelude::Result;

pub struct CompanySelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> CompanySelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        CompanySelector { pool }
    }

    pub async fn closest_deadline(&mut self) -> Result<Option<CompanyEntry>> {
        let row = sqlx::query_as::<_, CompanyEntry>(
            "SELECT id, name, cgpa, deadline, form_link, profiles, branches
             FROM companies ORDER BY deadline ASC, id ASC LIMIT 1",
        )
        .fetch_optional(&mut *self.pool)
        .await?;
        Ok(row)
    }

    pub async fn count(&mut self) -> Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM companies")
            .fetch_one(&mut *self.pool)
            .await?;
        Ok(count)
    }
}
