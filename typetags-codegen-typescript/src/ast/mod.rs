//! TypeScript declaration builders.

mod exports;
mod imports;
mod interface;
mod types;

pub use exports::Export;
pub use imports::Import;
pub use interface::Interface;
pub use types::{TypeAlias, Union};
