//! INI serialization logic for converting `ConfigFile` → INI string.
//!
//! This module contains the `to_config_string()` function that produces
//! the commented INI representation written to `config.ini`.

use std::path::Path;

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let bearer_token = config.server.bearer_token.as_deref().unwrap_or("");

    format!(
        r#"[server]
; Feature server base URL. The WFS endpoint is <base_url>/wfs
base_url = {}
; Timeout in seconds for every request (reads and transactions)
timeout = {}
; Bearer credential sent as "Authorization: Bearer <token>" (leave empty for none)
bearer_token = {}

[layer]
; Workspace name. Also used as the XML namespace prefix in transactions
workspace = {}
; Namespace URI of the workspace (must match the server's workspace namespace)
namespace_uri = {}
; Name of the geometry attribute on the feature types
geometry_field = {}

[transaction]
; How absent feature properties are written into insert/update fragments:
;   omit      - leave the element out (server keeps or nulls the value)
;   empty     - write an empty element
;   undefined - write the literal text "undefined"
missing_property = {}

[logging]
; Log file location
file = {}
"#,
        config.server.base_url,
        config.server.timeout,
        bearer_token,
        config.layer.workspace,
        config.layer.namespace_uri,
        config.layer.geometry_field,
        config.transaction.missing_property,
        path_to_string(&config.logging.file),
    )
}

/// Render a path for the config file, collapsing the home directory to `~`.
fn path_to_string(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ini::Ini;

    #[test]
    fn test_output_is_valid_ini() {
        let content = to_config_string(&ConfigFile::default());
        let ini = Ini::load_from_str(&content).unwrap();

        let server = ini.section(Some("server")).unwrap();
        assert_eq!(server.get("base_url"), Some("http://localhost:8085/geoserver"));
        assert_eq!(server.get("timeout"), Some("5"));

        let transaction = ini.section(Some("transaction")).unwrap();
        assert_eq!(transaction.get("missing_property"), Some("omit"));
    }

    #[test]
    fn test_bearer_token_written() {
        let mut config = ConfigFile::default();
        config.server.bearer_token = Some("tok".to_string());

        let content = to_config_string(&config);
        assert!(content.contains("bearer_token = tok"));
    }
}
