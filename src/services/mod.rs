//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own validation and store orchestration so route handlers
//! can stay focused on HTTP translation and rendering.

pub mod contract_template;
