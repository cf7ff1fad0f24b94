pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Operation};

pub use adapters::http::HttpTransport;
pub use core::client::MeasurableClient;
pub use domain::model::{
    EntityKind, EntityReference, HierarchyQueryScope, IdSelector, Measurable,
};
pub use domain::ports::{ConfigProvider, Transport};
pub use utils::error::{ClientError, Result};
