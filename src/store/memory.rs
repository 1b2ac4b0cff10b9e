//! In-memory store backed by a `HashMap` behind a tokio `RwLock`.

use std::collections::HashMap;

use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::ContractTemplateStore;
use crate::services::contract_template::ContractTemplateError;
use crate::template::{ContractTemplate, NewContractTemplate};

#[derive(Default)]
pub struct MemoryContractTemplateStore {
    templates: RwLock<HashMap<Uuid, ContractTemplate>>,
}

impl MemoryContractTemplateStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl ContractTemplateStore for MemoryContractTemplateStore {
    async fn create(&self, fields: NewContractTemplate) -> Result<ContractTemplate, ContractTemplateError> {
        let record = ContractTemplate::new(Uuid::new_v4(), fields, OffsetDateTime::now_utc());
        self.templates.write().await.insert(record.id, record.clone());
        Ok(record)
    }

    async fn list(&self) -> Result<Vec<ContractTemplate>, ContractTemplateError> {
        let mut rows: Vec<ContractTemplate> = self.templates.read().await.values().cloned().collect();
        rows.sort_by(|a, b| {
            a.fields
                .name
                .to_lowercase()
                .cmp(&b.fields.name.to_lowercase())
                .then(a.id.cmp(&b.id))
        });
        Ok(rows)
    }

    async fn get(&self, id: Uuid) -> Result<ContractTemplate, ContractTemplateError> {
        self.templates
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(ContractTemplateError::NotFound(id))
    }

    async fn update(&self, id: Uuid, fields: NewContractTemplate) -> Result<ContractTemplate, ContractTemplateError> {
        let mut templates = self.templates.write().await;
        let record = templates.get_mut(&id).ok_or(ContractTemplateError::NotFound(id))?;
        record.fields = fields;
        record.updated_at = OffsetDateTime::now_utc();
        Ok(record.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), ContractTemplateError> {
        match self.templates.write().await.remove(&id) {
            Some(_) => Ok(()),
            None => Err(ContractTemplateError::NotFound(id)),
        }
    }
}

#[cfg(test)]
#[path = "memory_test.rs"]
mod tests;
