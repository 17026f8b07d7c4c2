//! `http` provider: address discovery via an HTTP(S) endpoint

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::Method;
use serde_json::Value;
use tracing::debug;

use crate::lookup::Strategy;
use crate::provider::error::LookupError;

/// Perform a `method` request against `url` and parse the JSON body.
///
/// Fails on an invalid method, transport error, non-2xx status, or a body
/// that is not JSON. The timeout covers the whole request.
pub(crate) fn request(args: &[String], timeout: Duration) -> Result<Value, LookupError> {
    let [method, url] = args else {
        return Err(LookupError::WrongArgumentCount {
            strategy: Strategy::Http,
            expected: "2",
            actual: args.len(),
        });
    };

    let method = Method::from_bytes(method.to_ascii_uppercase().as_bytes()).map_err(|_| {
        LookupError::InvalidMethod {
            method: method.clone(),
        }
    })?;

    debug!(%method, url = %url, "running http lookup");

    let client = Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|source| LookupError::HttpRequest {
            url: url.clone(),
            source,
        })?;

    let response = client
        .request(method, url.as_str())
        .send()
        .map_err(|source| LookupError::HttpRequest {
            url: url.clone(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(LookupError::HttpStatus {
            url: url.clone(),
            status,
        });
    }

    response.json().map_err(|source| LookupError::HttpBody {
        url: url.clone(),
        source,
    })
}
