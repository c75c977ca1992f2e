use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Placeholder replaced with the user's description in the style template.
pub const PROMPT_PLACEHOLDER: &str = "{prompt}";

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub share: ShareConfig,
}

/// Settings for the image generation service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Base URL of the models API (e.g., "https://generativelanguage.googleapis.com/v1beta/models").
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Model identifier appended to the endpoint.
    #[serde(default = "default_model")]
    pub model: String,
    /// Direct API key. Takes precedence over `api_key_env`.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Template wrapped around the user's description. Must contain `{prompt}`.
    #[serde(default = "default_style_template")]
    pub style_template: String,
    /// Aspect ratio requested from the model (e.g., "1:1").
    #[serde(default = "default_aspect_ratio")]
    pub aspect_ratio: String,
    /// Connection timeout in seconds (default: 10).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
    /// Total request timeout in seconds. Unset means no timeout.
    #[serde(default)]
    pub request_timeout_seconds: Option<u64>,
}

/// Settings for the share sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareConfig {
    /// Share targets offered in the share dialog, in display order.
    #[serde(default = "default_share_targets")]
    pub targets: Vec<ShareTargetKind>,
    /// Directory for the "save" target. Defaults to the pictures directory.
    #[serde(default)]
    pub export_dir: Option<PathBuf>,
}

/// Known share targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareTargetKind {
    /// Copy the image to the system clipboard.
    Clipboard,
    /// Save the file into the export directory.
    Save,
}

fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com/v1beta/models".to_string()
}

fn default_model() -> String {
    "gemini-2.5-flash-image".to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

fn default_style_template() -> String {
    "A black-and-white coloring page for kids: {prompt}. Clean, bold black outlines \
     on a plain white background. No color, no shading, no gray tones."
        .to_string()
}

fn default_aspect_ratio() -> String {
    "1:1".to_string()
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_share_targets() -> Vec<ShareTargetKind> {
    vec![ShareTargetKind::Clipboard, ShareTargetKind::Save]
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            api_key: None,
            api_key_env: default_api_key_env(),
            style_template: default_style_template(),
            aspect_ratio: default_aspect_ratio(),
            connect_timeout_seconds: default_connect_timeout(),
            request_timeout_seconds: None,
        }
    }
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            targets: default_share_targets(),
            export_dir: None,
        }
    }
}

impl GenerationConfig {
    /// Resolve the API key from the config or the configured env var.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| {
                std::env::var(&self.api_key_env)
                    .ok()
                    .filter(|key| !key.trim().is_empty())
            })
    }
}

impl ShareConfig {
    /// Directory used by the "save" target.
    ///
    /// Falls back to the pictures dir, then downloads, then the working dir.
    pub fn resolved_export_dir(&self) -> PathBuf {
        self.export_dir
            .clone()
            .or_else(dirs::picture_dir)
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_template_contains_placeholder() {
        assert!(GenerationConfig::default()
            .style_template
            .contains(PROMPT_PLACEHOLDER));
    }

    #[test]
    fn explicit_api_key_wins() {
        let config = GenerationConfig {
            api_key: Some("direct".to_string()),
            api_key_env: "COLORPAGE_TEST_UNSET_KEY_VAR".to_string(),
            ..GenerationConfig::default()
        };
        assert_eq!(config.resolve_api_key().as_deref(), Some("direct"));
    }

    #[test]
    fn blank_api_key_is_ignored() {
        let config = GenerationConfig {
            api_key: Some("   ".to_string()),
            api_key_env: "COLORPAGE_TEST_UNSET_KEY_VAR".to_string(),
            ..GenerationConfig::default()
        };
        assert!(config.resolve_api_key().is_none());
    }

    #[test]
    fn explicit_export_dir_wins() {
        let config = ShareConfig {
            export_dir: Some(PathBuf::from("/tmp/pages")),
            ..ShareConfig::default()
        };
        assert_eq!(config.resolved_export_dir(), PathBuf::from("/tmp/pages"));
    }
}
