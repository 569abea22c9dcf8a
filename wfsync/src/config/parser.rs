//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This module contains the `parse_ini()` function and its helpers.
//! It is the single place where INI key names are mapped to struct fields.

use ini::Ini;
use std::path::PathBuf;

use super::file::ConfigFileError;
use super::settings::ConfigFile;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [server] section
    if let Some(section) = ini.section(Some("server")) {
        if let Some(v) = section.get("base_url") {
            let v = v.trim();
            if !(v.starts_with("http://") || v.starts_with("https://")) {
                return Err(invalid(
                    "server",
                    "base_url",
                    v,
                    "must be an http:// or https:// URL",
                ));
            }
            config.server.base_url = v.trim_end_matches('/').to_string();
        }
        if let Some(v) = section.get("timeout") {
            config.server.timeout = match v.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(invalid(
                        "server",
                        "timeout",
                        v,
                        "must be a positive integer (seconds)",
                    ))
                }
            };
        }
        if let Some(v) = section.get("bearer_token") {
            let v = v.trim();
            if !v.is_empty() {
                config.server.bearer_token = Some(v.to_string());
            }
        }
    }

    // [layer] section
    if let Some(section) = ini.section(Some("layer")) {
        if let Some(v) = section.get("workspace") {
            let v = v.trim();
            if !is_xml_prefix(v) {
                return Err(invalid(
                    "layer",
                    "workspace",
                    v,
                    "must be a valid XML namespace prefix (letters, digits, '_', '-', '.')",
                ));
            }
            config.layer.workspace = v.to_string();
        }
        if let Some(v) = section.get("namespace_uri") {
            let v = v.trim();
            if v.is_empty() {
                return Err(invalid("layer", "namespace_uri", v, "must not be empty"));
            }
            config.layer.namespace_uri = v.to_string();
        }
        if let Some(v) = section.get("geometry_field") {
            let v = v.trim();
            if v.is_empty() {
                return Err(invalid("layer", "geometry_field", v, "must not be empty"));
            }
            config.layer.geometry_field = v.to_string();
        }
    }

    // [transaction] section
    if let Some(section) = ini.section(Some("transaction")) {
        if let Some(v) = section.get("missing_property") {
            config.transaction.missing_property = v.trim().parse().map_err(|_| {
                invalid(
                    "transaction",
                    "missing_property",
                    v,
                    "must be one of: omit, empty, undefined",
                )
            })?;
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file = expand_tilde(v);
            }
        }
    }

    Ok(config)
}

fn invalid(section: &str, key: &str, value: &str, reason: &str) -> ConfigFileError {
    ConfigFileError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Checks that a workspace name can be used as an XML namespace prefix.
fn is_xml_prefix(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
