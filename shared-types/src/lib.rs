pub mod query;
pub mod settings;

pub use query::{ProcessQueryRequest, Record, ResponseKind, StructuredResult};
pub use settings::{ApiKeyConfig, SettingsResponse};
