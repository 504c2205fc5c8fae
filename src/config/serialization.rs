//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Serialize to a commented TOML document
    pub fn to_toml(&self) -> String {
        format!(
            r#"# shoebox configuration
#
# Environment variables override these values:
#   SHOEBOX_API_URL, SHOEBOX_TIMEOUT, SHOEBOX_THEME
# Runtime toggles (env only): SHOEBOX_NO_TUI=1, SHOEBOX_DEMO=1

# Base URL of the stats backend; requests go to <api_url>/api/stats
api_url = {api_url}

# Seconds before a stats request is abandoned
request_timeout_secs = {timeout}

# Color theme: "dark", "light", "trail"
theme = {theme}

# Yearly km table order: "ascending" (oldest first) or "descending"
yearly_order = {yearly_order}

[logging]
# trace, debug, info, warn, error (RUST_LOG takes precedence)
level = {level}
# Also write JSON logs to rotating files
file_enabled = {file_enabled}
file_dir = {file_dir}
# hourly, daily, never
file_rotation = {file_rotation}
file_prefix = {file_prefix}
"#,
            api_url = toml_string(&self.api_url),
            timeout = self.request_timeout_secs,
            theme = toml_string(&self.theme),
            yearly_order = toml_string(self.yearly_order.as_str()),
            level = toml_string(&self.logging.level),
            file_enabled = self.logging.file_enabled,
            file_dir = toml_string(&self.logging.file_dir.display().to_string()),
            file_rotation = toml_string(self.logging.file_rotation.as_str()),
            file_prefix = toml_string(&self.logging.file_prefix),
        )
    }
}

/// Quoted and escaped TOML string literal
fn toml_string(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}
