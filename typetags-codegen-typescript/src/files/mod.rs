//! Emitted artifact kinds, one struct per output file.

mod base_ts;
mod enums_ts;
mod index_ts;
mod models_ts;
mod schema_models_ts;

pub use base_ts::BaseTs;
pub use enums_ts::EnumsTs;
pub use index_ts::IndexTs;
pub use models_ts::ModelsTs;
pub use schema_models_ts::SchemaModelsTs;

pub(crate) use base_ts::base_aliases;
pub(crate) use enums_ts::enum_union;
pub(crate) use models_ts::model_interfaces;
