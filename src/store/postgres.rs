//! Postgres-backed store for the `contract_templates` table.

use sqlx::PgPool;
use sqlx::postgres::PgRow;
use sqlx::Row;
use time::OffsetDateTime;
use uuid::Uuid;

use super::ContractTemplateStore;
use crate::services::contract_template::ContractTemplateError;
use crate::template::{ContractTemplate, ContractType, NewContractTemplate, RenewalFrequency, SlaHours};

const COLUMNS: &str = "id, name, description, contract_type, renewal_frequency,
    sla_low_response_time, sla_low_resolution_time,
    sla_medium_response_time, sla_medium_resolution_time,
    sla_high_response_time, sla_high_resolution_time,
    rate_standard, rate_after_hours, support_hours, net_terms, details,
    created_at, updated_at";

#[derive(Clone)]
pub struct PgContractTemplateStore {
    pool: PgPool,
}

impl PgContractTemplateStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Decode one row. Enum columns that hold values outside the known option
/// lists are reported as decode errors rather than silently dropped.
fn template_from_row(row: &PgRow) -> Result<ContractTemplate, sqlx::Error> {
    let raw_type: String = row.try_get("contract_type")?;
    let contract_type = ContractType::from_str(&raw_type).ok_or_else(|| sqlx::Error::ColumnDecode {
        index: "contract_type".into(),
        source: format!("unknown contract type: {raw_type}").into(),
    })?;

    let raw_frequency: Option<String> = row.try_get("renewal_frequency")?;
    let renewal_frequency = match raw_frequency {
        Some(raw) => Some(RenewalFrequency::from_str(&raw).ok_or_else(|| sqlx::Error::ColumnDecode {
            index: "renewal_frequency".into(),
            source: format!("unknown renewal frequency: {raw}").into(),
        })?),
        None => None,
    };

    Ok(ContractTemplate {
        id: row.try_get("id")?,
        fields: NewContractTemplate {
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            contract_type,
            renewal_frequency,
            sla: SlaHours {
                low_response: row.try_get("sla_low_response_time")?,
                low_resolution: row.try_get("sla_low_resolution_time")?,
                medium_response: row.try_get("sla_medium_response_time")?,
                medium_resolution: row.try_get("sla_medium_resolution_time")?,
                high_response: row.try_get("sla_high_response_time")?,
                high_resolution: row.try_get("sla_high_resolution_time")?,
            },
            rate_standard: row.try_get("rate_standard")?,
            rate_after_hours: row.try_get("rate_after_hours")?,
            support_hours: row.try_get("support_hours")?,
            net_terms: row.try_get("net_terms")?,
            details: row.try_get("details")?,
        },
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

#[async_trait::async_trait]
impl ContractTemplateStore for PgContractTemplateStore {
    async fn create(&self, fields: NewContractTemplate) -> Result<ContractTemplate, ContractTemplateError> {
        let id = Uuid::new_v4();
        let now = OffsetDateTime::now_utc();
        sqlx::query(
            "INSERT INTO contract_templates (
                id, name, description, contract_type, renewal_frequency,
                sla_low_response_time, sla_low_resolution_time,
                sla_medium_response_time, sla_medium_resolution_time,
                sla_high_response_time, sla_high_resolution_time,
                rate_standard, rate_after_hours, support_hours, net_terms, details,
                created_at, updated_at
             ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $17)",
        )
        .bind(id)
        .bind(&fields.name)
        .bind(&fields.description)
        .bind(fields.contract_type.as_str())
        .bind(fields.renewal_frequency.map(RenewalFrequency::as_str))
        .bind(fields.sla.low_response)
        .bind(fields.sla.low_resolution)
        .bind(fields.sla.medium_response)
        .bind(fields.sla.medium_resolution)
        .bind(fields.sla.high_response)
        .bind(fields.sla.high_resolution)
        .bind(&fields.rate_standard)
        .bind(&fields.rate_after_hours)
        .bind(&fields.support_hours)
        .bind(&fields.net_terms)
        .bind(&fields.details)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(ContractTemplate::new(id, fields, now))
    }

    async fn list(&self) -> Result<Vec<ContractTemplate>, ContractTemplateError> {
        let rows = sqlx::query(&format!(
            "SELECT {COLUMNS} FROM contract_templates ORDER BY lower(name) COLLATE \"C\" ASC, id ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(template_from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(ContractTemplateError::from)
    }

    async fn get(&self, id: Uuid) -> Result<ContractTemplate, ContractTemplateError> {
        let row = sqlx::query(&format!("SELECT {COLUMNS} FROM contract_templates WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(ContractTemplateError::NotFound(id))?;

        Ok(template_from_row(&row)?)
    }

    async fn update(&self, id: Uuid, fields: NewContractTemplate) -> Result<ContractTemplate, ContractTemplateError> {
        let row = sqlx::query(&format!(
            "UPDATE contract_templates SET
                name = $2, description = $3, contract_type = $4, renewal_frequency = $5,
                sla_low_response_time = $6, sla_low_resolution_time = $7,
                sla_medium_response_time = $8, sla_medium_resolution_time = $9,
                sla_high_response_time = $10, sla_high_resolution_time = $11,
                rate_standard = $12, rate_after_hours = $13, support_hours = $14,
                net_terms = $15, details = $16, updated_at = $17
             WHERE id = $1
             RETURNING {COLUMNS}"
        ))
        .bind(id)
        .bind(&fields.name)
        .bind(&fields.description)
        .bind(fields.contract_type.as_str())
        .bind(fields.renewal_frequency.map(RenewalFrequency::as_str))
        .bind(fields.sla.low_response)
        .bind(fields.sla.low_resolution)
        .bind(fields.sla.medium_response)
        .bind(fields.sla.medium_resolution)
        .bind(fields.sla.high_response)
        .bind(fields.sla.high_resolution)
        .bind(&fields.rate_standard)
        .bind(&fields.rate_after_hours)
        .bind(&fields.support_hours)
        .bind(&fields.net_terms)
        .bind(&fields.details)
        .bind(OffsetDateTime::now_utc())
        .fetch_optional(&self.pool)
        .await?
        .ok_or(ContractTemplateError::NotFound(id))?;

        Ok(template_from_row(&row)?)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ContractTemplateError> {
        let result = sqlx::query("DELETE FROM contract_templates WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ContractTemplateError::NotFound(id));
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "live-db-tests"))]
#[path = "postgres_test.rs"]
mod tests;
