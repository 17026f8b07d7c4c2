use anyhow::Result;
use beacon_core::{parse_lookup, ProviderRegistry};
use clap::Parser;

/// Resolve a lookup descriptor and print the discovered address
#[derive(Debug, Parser)]
pub struct LookupCommand {
    /// Lookup descriptor, e.g. 'echo(10.0.0.5)' or 'http(GET, https://example.com/address)'
    #[arg(value_name = "DESCRIPTOR")]
    pub descriptor: String,
}

impl LookupCommand {
    pub fn execute(&self) -> Result<i32> {
        let descriptor = match parse_lookup(&self.descriptor) {
            Ok(descriptor) => descriptor,
            Err(error) => {
                eprintln!("invalid lookup descriptor: {error}");
                return Ok(1);
            }
        };

        let registry = ProviderRegistry::new();
        match registry.resolve(&descriptor) {
            Ok(result) => {
                println!("{}", result.external_address);
                Ok(0)
            }
            Err(error) => {
                let error = anyhow::Error::new(error);
                eprintln!("lookup failed: {error:#}");
                Ok(1)
            }
        }
    }
}
