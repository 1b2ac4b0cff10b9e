//! Contract template persistence.
//!
//! DESIGN
//! ======
//! Handlers never talk to Postgres directly. They go through
//! `ContractTemplateStore`, which has a Postgres implementation for
//! production and an in-memory one for tests and `STORE=memory` runs.

pub mod memory;
pub mod postgres;

use uuid::Uuid;

use crate::services::contract_template::ContractTemplateError;
use crate::template::{ContractTemplate, NewContractTemplate};

pub use memory::MemoryContractTemplateStore;
pub use postgres::PgContractTemplateStore;

#[async_trait::async_trait]
pub trait ContractTemplateStore: Send + Sync {
    /// Insert a new template and return the stored record.
    ///
    /// # Errors
    ///
    /// Returns a database error if the insert fails.
    async fn create(&self, fields: NewContractTemplate) -> Result<ContractTemplate, ContractTemplateError>;

    /// All templates ordered by name (case-insensitive), then id.
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails.
    async fn list(&self) -> Result<Vec<ContractTemplate>, ContractTemplateError>;

    /// # Errors
    ///
    /// Returns `NotFound` if no template has this id.
    async fn get(&self, id: Uuid) -> Result<ContractTemplate, ContractTemplateError>;

    /// Replace every editable field and bump `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no template has this id.
    async fn update(&self, id: Uuid, fields: NewContractTemplate) -> Result<ContractTemplate, ContractTemplateError>;

    /// # Errors
    ///
    /// Returns `NotFound` if no template has this id.
    async fn delete(&self, id: Uuid) -> Result<(), ContractTemplateError>;
}
