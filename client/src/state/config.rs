//! Editor configuration resolved from the hosting page's query parameters.
//!
//! DESIGN
//! ======
//! The two locators are the editor's entire configuration surface: where the
//! image lives and which Bubble workflow receives the finished annotation
//! list. Either may be absent — a missing image degrades to a placeholder,
//! a missing save URL blocks saving with a visible message.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Inline SVG shown when no `imageUrl` parameter was supplied, so the editor
/// renders without crashing or fetching a missing asset.
pub const PLACEHOLDER_IMAGE: &str = "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' \
     width='800' height='600'%3E%3Crect width='800' height='600' fill='%23d8d4cc'/%3E%3C/svg%3E";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorConfig {
    /// Source image locator (`imageUrl` query parameter).
    pub image_url: Option<String>,
    /// Bubble workflow locator (`bubbleUrl` query parameter).
    pub bubble_save_url: Option<String>,
}

impl EditorConfig {
    /// Build from raw query-parameter values. Blank values count as absent.
    #[must_use]
    pub fn from_params(image_url: Option<String>, bubble_save_url: Option<String>) -> Self {
        Self {
            image_url: non_blank(image_url),
            bubble_save_url: non_blank(bubble_save_url),
        }
    }

    /// The image source to load: the configured URL, or the placeholder.
    #[must_use]
    pub fn image_source(&self) -> String {
        self.image_url
            .clone()
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_owned())
    }

    /// The message blocking a save, if the configuration is incomplete.
    #[must_use]
    pub fn save_blocker(&self) -> Option<&'static str> {
        if self.bubble_save_url.is_none() {
            return Some("no Bubble save URL configured");
        }
        if self.image_url.is_none() {
            return Some("no image URL configured");
        }
        None
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}
