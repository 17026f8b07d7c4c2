//! Target config rewriting
//!
//! Each target file is a YAML document with a `service.url` field. The
//! rewrite swaps the URL's host for the discovered address, keeps the
//! original scheme, port, path, and query, and leaves every other field of
//! the document in place (re-serialization may reformat). Files are
//! processed sequentially in list order and processing aborts on the first
//! failure; see DESIGN.md for the policy rationale.

pub mod error;

use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::Value;
use tracing::{debug, info};
use url::Url;

pub use error::UpdateError;

/// Rewrite the service URL host in every target file, in order.
///
/// When `backup` is set, each file is copied to `<path>.bak` before it is
/// touched. Aborts on the first failing file; earlier files keep their new
/// address, later files are left untouched.
pub fn rewrite_target_files(
    address: &str,
    paths: &[String],
    backup: bool,
) -> Result<(), UpdateError> {
    for path in paths {
        rewrite_target_file(address, Path::new(path), backup)?;
    }
    Ok(())
}

/// Rewrite a single target file in place.
pub fn rewrite_target_file(address: &str, path: &Path, backup: bool) -> Result<(), UpdateError> {
    if backup {
        let backup_path = backup_path_for(path);
        fs::copy(path, &backup_path).map_err(|source| UpdateError::Backup {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), backup = %backup_path.display(), "wrote backup");
    }

    let content = fs::read_to_string(path).map_err(|source| UpdateError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut document: Value = serde_yaml::from_str(&content).map_err(|source| UpdateError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let slot = document
        .get_mut("service")
        .and_then(|service| service.get_mut("url"))
        .ok_or_else(|| UpdateError::MissingServiceUrl {
            path: path.to_path_buf(),
        })?;
    let current = slot
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| UpdateError::MissingServiceUrl {
            path: path.to_path_buf(),
        })?;

    let updated = replace_host(&current, address).map_err(|error| match error {
        HostReplaceError::Parse(source) => UpdateError::InvalidServiceUrl {
            path: path.to_path_buf(),
            url: current.clone(),
            source,
        },
        HostReplaceError::Host => UpdateError::HostRewrite {
            path: path.to_path_buf(),
            address: address.to_string(),
        },
    })?;
    *slot = Value::String(updated.clone());

    let serialized = serde_yaml::to_string(&document).map_err(|source| UpdateError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;

    fs::write(path, serialized).map_err(|source| UpdateError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), url = %updated, "updated service URL");
    Ok(())
}

#[derive(Debug)]
enum HostReplaceError {
    Parse(url::ParseError),
    Host,
}

/// Swap the host component of `original`, retaining port, scheme, path,
/// and query.
fn replace_host(original: &str, address: &str) -> Result<String, HostReplaceError> {
    let mut url = Url::parse(original).map_err(HostReplaceError::Parse)?;
    url.set_host(Some(address))
        .map_err(|_| HostReplaceError::Host)?;
    Ok(url.to_string())
}

fn backup_path_for(path: &Path) -> PathBuf {
    let mut backup = path.as_os_str().to_os_string();
    backup.push(".bak");
    PathBuf::from(backup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_target(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn service_url(path: &Path) -> String {
        let document: Value = serde_yaml::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        document["service"]["url"].as_str().unwrap().to_string()
    }

    #[test]
    fn host_is_replaced_and_port_preserved() {
        assert_eq!(
            replace_host("http://old-host:8080/api", "10.0.0.5").unwrap(),
            "http://10.0.0.5:8080/api"
        );
    }

    #[test]
    fn scheme_path_and_query_survive() {
        assert_eq!(
            replace_host("https://a.example.com/api/v1?watch=true", "198.51.100.2").unwrap(),
            "https://198.51.100.2/api/v1?watch=true"
        );
    }

    #[test]
    fn url_without_port_gets_none_added() {
        assert_eq!(
            replace_host("http://old-host/api", "10.0.0.5").unwrap(),
            "http://10.0.0.5/api"
        );
    }

    #[test]
    fn garbage_url_is_a_parse_failure() {
        assert!(matches!(
            replace_host("not a url", "10.0.0.5"),
            Err(HostReplaceError::Parse(_))
        ));
    }

    #[test]
    fn unusable_address_is_a_host_failure() {
        assert!(matches!(
            replace_host("http://old:8080/", "bad host"),
            Err(HostReplaceError::Host)
        ));
    }

    #[test]
    fn rewrite_updates_the_url_and_keeps_other_fields() {
        let dir = TempDir::new().unwrap();
        let path = write_target(
            &dir,
            "watson.yml",
            r#"
service:
  url: "http://old-host:8080/api"
  name: "watson"
logging:
  level: debug
"#,
        );

        rewrite_target_file("10.0.0.5", &path, false).unwrap();

        let document: Value =
            serde_yaml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            document["service"]["url"].as_str(),
            Some("http://10.0.0.5:8080/api")
        );
        assert_eq!(document["service"]["name"].as_str(), Some("watson"));
        assert_eq!(document["logging"]["level"].as_str(), Some("debug"));
    }

    #[test]
    fn backup_holds_the_pre_mutation_content() {
        let dir = TempDir::new().unwrap();
        let original = "service:\n  url: \"http://x:9000/\"\n";
        let path = write_target(&dir, "watson.yml", original);

        rewrite_target_file("10.1.1.1", &path, true).unwrap();

        let backup = fs::read_to_string(dir.path().join("watson.yml.bak")).unwrap();
        assert_eq!(backup, original);
        assert_eq!(service_url(&path), "http://10.1.1.1:9000/");
    }

    #[test]
    fn no_backup_file_without_the_flag() {
        let dir = TempDir::new().unwrap();
        let path = write_target(&dir, "watson.yml", "service:\n  url: \"http://x:9000/\"\n");

        rewrite_target_file("10.1.1.1", &path, false).unwrap();

        assert!(!dir.path().join("watson.yml.bak").exists());
    }

    #[test]
    fn missing_service_url_names_the_path() {
        let dir = TempDir::new().unwrap();
        let path = write_target(&dir, "broken.yml", "service:\n  name: watson\n");

        let err = rewrite_target_file("10.1.1.1", &path, false).unwrap_err();
        assert!(matches!(err, UpdateError::MissingServiceUrl { .. }));
        assert_eq!(err.path(), &path);
    }

    #[test]
    fn non_string_service_url_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_target(&dir, "broken.yml", "service:\n  url: 9000\n");

        let err = rewrite_target_file("10.1.1.1", &path, false).unwrap_err();
        assert!(matches!(err, UpdateError::MissingServiceUrl { .. }));
    }

    #[test]
    fn unreadable_target_names_the_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.yml");

        let err = rewrite_target_file("10.1.1.1", &path, false).unwrap_err();
        assert!(matches!(err, UpdateError::Read { .. }));
        assert_eq!(err.path(), &path);
    }

    #[test]
    fn processing_aborts_on_first_failure() {
        let dir = TempDir::new().unwrap();
        let good_first = write_target(&dir, "a.yml", "service:\n  url: \"http://x:9000/\"\n");
        let broken = write_target(&dir, "b.yml", "service: {}\n");
        let good_last = write_target(&dir, "c.yml", "service:\n  url: \"http://y:9000/\"\n");

        let paths = vec![
            good_first.display().to_string(),
            broken.display().to_string(),
            good_last.display().to_string(),
        ];

        let err = rewrite_target_files("10.1.1.1", &paths, false).unwrap_err();
        assert_eq!(err.path(), &broken);

        // First file was rewritten before the failure, last one never touched.
        assert_eq!(service_url(&good_first), "http://10.1.1.1:9000/");
        assert_eq!(service_url(&good_last), "http://y:9000/");
    }
}
