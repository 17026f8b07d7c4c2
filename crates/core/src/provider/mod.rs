//! Lookup providers and the dispatch registry
//!
//! One handler per [`Strategy`] variant, dispatched from a single exhaustive
//! `match`. Every provider's raw output is routed through
//! [`result::validate_result`] before it is trusted; the registry only ever
//! hands back a validated [`AddressResult`].

pub mod error;
pub mod result;

mod echo;
mod exec;
mod http;
mod interface;

use std::time::Duration;

use tracing::debug;

use crate::lookup::{LookupDescriptor, Strategy};

pub use error::{LookupError, ValidationError};
pub use result::{validate_result, AddressResult};

/// Default deadline for the `exec` and `http` providers.
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Dispatches a parsed lookup descriptor to its provider.
///
/// Each invocation is attempted exactly once; there are no retries. The
/// timeout bounds the `exec` and `http` providers (the `interface` and
/// `echo` providers never block).
#[derive(Debug, Clone)]
pub struct ProviderRegistry {
    timeout: Duration,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_LOOKUP_TIMEOUT,
        }
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Resolve a descriptor to a validated address.
    pub fn resolve(&self, descriptor: &LookupDescriptor) -> crate::Result<AddressResult> {
        debug!(
            strategy = %descriptor.strategy,
            args = ?descriptor.args,
            "dispatching lookup"
        );

        let raw = match descriptor.strategy {
            Strategy::Interface => interface::query(&descriptor.args)?,
            Strategy::Echo => echo::join(&descriptor.args),
            Strategy::Exec => exec::run(&descriptor.args, self.timeout)?,
            Strategy::Http => http::request(&descriptor.args, self.timeout)?,
        };

        let result = result::validate_result(&raw)?;
        debug!(address = %result.external_address, "lookup resolved");
        Ok(result)
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::lookup::parse_lookup;

    #[test]
    fn echo_lookup_joins_args_with_commas() {
        let registry = ProviderRegistry::new();
        let descriptor = parse_lookup("echo(bar, baz)").unwrap();

        let result = registry.resolve(&descriptor).unwrap();
        assert_eq!(result.external_address, "bar,baz");
    }

    #[test]
    fn echo_lookup_is_deterministic() {
        let registry = ProviderRegistry::new();
        let descriptor = parse_lookup("echo(10.1.1.1)").unwrap();

        for _ in 0..3 {
            let result = registry.resolve(&descriptor).unwrap();
            assert_eq!(result.external_address, "10.1.1.1");
        }
    }

    #[test]
    fn echo_lookup_without_args_fails_validation() {
        let registry = ProviderRegistry::new();
        let descriptor = parse_lookup("echo()").unwrap();

        let err = registry.resolve(&descriptor).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::EmptyAddress)
        ));
    }

    #[test]
    fn interface_lookup_without_args_reports_arity() {
        let registry = ProviderRegistry::new();
        let descriptor = parse_lookup("interface()").unwrap();

        let err = registry.resolve(&descriptor).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Lookup(LookupError::WrongArgumentCount { .. })
        ));
    }

    #[test]
    fn exec_lookup_runs_the_command() {
        let registry = ProviderRegistry::new();
        let descriptor =
            parse_lookup("exec(echo, {\"external_address\": \"192.0.2.7\"})").unwrap();

        let result = registry.resolve(&descriptor).unwrap();
        assert_eq!(result.external_address, "192.0.2.7");
    }
}
