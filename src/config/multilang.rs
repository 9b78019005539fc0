//! `[multilang]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[multilang]` section in tola-lang.toml.
///
/// # Example
/// ```toml
/// [multilang]
/// extensions = [".html", ".xml"]
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct MultilangConfig {
    /// Output extensions split by a `lang` list. `"*"` matches every page.
    ///
    /// Filename-convention siblings are linked on every extension regardless.
    #[serde(default = "defaults::multilang::extensions")]
    #[educe(Default = defaults::multilang::extensions())]
    pub extensions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_multilang_config_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();
        assert_eq!(config.multilang.extensions, vec![".html".to_string()]);
    }

    #[test]
    fn test_multilang_config_full() {
        let config = r#"
            [multilang]
            extensions = [".html", ".xml"]
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();
        assert_eq!(config.multilang.extensions, vec![".html", ".xml"]);
    }

    #[test]
    fn test_multilang_config_unknown_field() {
        let config = r#"
            [multilang]
            languages = ["en"]
        "#;
        assert!(toml::from_str::<SiteConfig>(config).is_err());
    }
}
