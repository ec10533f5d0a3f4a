use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;

use crate::core::explanations::topics::ExplanationTopic;

/// Layout of the text panel and the topic texts it can show.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExplanationConfig {
    /// Topic rendered next to the animation.
    pub topic: String,
    /// Extra or overriding topic texts, keyed by topic id.
    pub topics: BTreeMap<String, String>,
    pub panel_width: u32,
    /// Characters per wrapped line.
    pub wrap_width: usize,
    pub margin_left: u32,
    pub margin_top: u32,
    pub line_height: u32,
    pub font_size: f32,
    pub font_family: String,
    /// Directories scanned for additional font files.
    pub font_dirs: Vec<PathBuf>,
}

impl Default for ExplanationConfig {
    fn default() -> Self {
        Self {
            topic: ExplanationTopic::default().id().to_string(),
            topics: BTreeMap::new(),
            panel_width: 300,
            wrap_width: 40,
            margin_left: 20,
            margin_top: 10,
            line_height: 15,
            font_size: 11.0,
            font_family: "DejaVu Sans, Arial, sans-serif".to_string(),
            font_dirs: Vec::new(),
        }
    }
}

impl ExplanationConfig {
    /// Body text for `topic`, configured texts first, then the built-ins.
    #[must_use]
    pub fn body(&self, topic: &str) -> Option<&str> {
        self.topics
            .get(topic)
            .map(String::as_str)
            .or_else(|| ExplanationTopic::from_id(topic).map(ExplanationTopic::body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_topic_has_builtin_body() {
        let config = ExplanationConfig::default();

        assert_eq!(
            config.body(&config.topic),
            Some(ExplanationTopic::MandelbrotIterative.body())
        );
    }

    #[test]
    fn configured_topics_override_builtins() {
        let mut config = ExplanationConfig::default();
        config
            .topics
            .insert("mandelbrot_iter".to_string(), "custom".to_string());
        config
            .topics
            .insert("julia".to_string(), "about julia".to_string());

        assert_eq!(config.body("mandelbrot_iter"), Some("custom"));
        assert_eq!(config.body("julia"), Some("about julia"));
        assert_eq!(config.body("unknown"), None);
    }

    #[test]
    fn deserialize_keeps_defaults_for_missing_fields() {
        let config: ExplanationConfig =
            serde_json::from_str(r#"{"panel_width": 200, "topics": {"x": "y"}}"#).unwrap();

        assert_eq!(config.panel_width, 200);
        assert_eq!(config.wrap_width, 40);
        assert_eq!(config.body("x"), Some("y"));
        assert!(config.body("mandelbrot_iter").is_some());
    }
}
