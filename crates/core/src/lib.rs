pub mod config;
pub mod error;
pub mod lookup;
pub mod pipeline;
pub mod provider;
pub mod rewrite;

pub use config::{load_config, AppConfig, EnvironmentError, SchemaError};
pub use error::{CoreError, Result};
pub use lookup::{parse_lookup, LookupDescriptor, ParseError, Strategy};
pub use pipeline::{execute_pipeline, PipelineReport};
pub use provider::{
    validate_result, AddressResult, LookupError, ProviderRegistry, ValidationError,
};
pub use rewrite::{rewrite_target_files, UpdateError};
