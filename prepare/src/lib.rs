#[macro_use]
extern crate log;

pub mod encode;
pub mod error;
pub mod output;
pub mod tables;

pub use error::PrepareError;
pub use tables::prepare;
pub use tables::PreparedTables;
