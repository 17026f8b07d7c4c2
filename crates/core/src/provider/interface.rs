//! `interface` provider: query a local network interface

use std::net::IpAddr;

use serde_json::{json, Value};
use sysinfo::Networks;
use tracing::debug;

use crate::lookup::Strategy;
use crate::provider::error::LookupError;

/// Look up the primary address of the named local interface.
///
/// Loopback addresses are skipped; IPv4 wins over IPv6 when the interface
/// carries both. An unknown interface or one without a usable address is a
/// [`LookupError`].
pub(crate) fn query(args: &[String]) -> Result<Value, LookupError> {
    let [name] = args else {
        return Err(LookupError::WrongArgumentCount {
            strategy: Strategy::Interface,
            expected: "1",
            actual: args.len(),
        });
    };

    let networks = Networks::new_with_refreshed_list();

    let Some((_, data)) = networks.iter().find(|(ifname, _)| ifname.as_str() == name) else {
        let mut available: Vec<String> = networks.iter().map(|(ifname, _)| ifname.clone()).collect();
        available.sort();
        return Err(LookupError::InterfaceNotFound {
            name: name.clone(),
            available,
        });
    };

    let addresses: Vec<IpAddr> = data.ip_networks().iter().map(|network| network.addr).collect();
    debug!(interface = %name, ?addresses, "inspecting interface");

    let address = pick_address(&addresses).ok_or_else(|| LookupError::InterfaceWithoutAddress {
        name: name.clone(),
    })?;

    Ok(json!({ "external_address": address.to_string() }))
}

fn pick_address(addresses: &[IpAddr]) -> Option<IpAddr> {
    let mut usable = addresses.iter().copied().filter(|addr| !addr.is_loopback());
    let first = usable.next()?;
    if first.is_ipv4() {
        return Some(first);
    }
    usable.find(IpAddr::is_ipv4).or(Some(first))
}
