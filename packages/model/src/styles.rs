//! Style payloads: per-section [`StyleProps`] and the document-wide
//! [`GlobalStyles`] theme.

use serde::{Deserialize, Serialize};

/// Four-sided spacing in pixels (padding or margin)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxSpacing {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl BoxSpacing {
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// Vertical/horizontal shorthand
    pub fn symmetric(vertical: f64, horizontal: f64) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// CSS shorthand, e.g. `16px 32px 16px 32px`
    pub fn to_css(&self) -> String {
        format!(
            "{}px {}px {}px {}px",
            self.top, self.right, self.bottom, self.left
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// Per-section style overrides. Every field is optional; the renderer
/// supplies defaults for whatever is absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<BoxSpacing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<BoxSpacing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_width: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl StyleProps {
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn with_padding(mut self, padding: BoxSpacing) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn with_text_align(mut self, align: TextAlign) -> Self {
        self.text_align = Some(align);
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    Square,
    Rounded,
    Pill,
}

impl ButtonStyle {
    pub fn border_radius(&self) -> &'static str {
        match self {
            ButtonStyle::Square => "0",
            ButtonStyle::Rounded => "6px",
            ButtonStyle::Pill => "9999px",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardStyle {
    Flat,
    Outlined,
    Elevated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpacingScale {
    Compact,
    Normal,
    Spacious,
}

impl SpacingScale {
    /// Gap between repeated items (grid cells, cards)
    pub fn gap(&self) -> &'static str {
        match self {
            SpacingScale::Compact => "12px",
            SpacingScale::Normal => "24px",
            SpacingScale::Spacious => "40px",
        }
    }
}

/// Document-wide theme. Missing fields in stored documents fall back to the
/// defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GlobalStyles {
    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,
    pub background_color: String,
    pub text_color: String,
    pub heading_font: String,
    pub body_font: String,
    pub button_style: ButtonStyle,
    pub card_style: CardStyle,
    pub spacing: SpacingScale,
}

impl Default for GlobalStyles {
    fn default() -> Self {
        Self {
            primary_color: "#2563eb".to_string(),
            secondary_color: "#64748b".to_string(),
            accent_color: "#f59e0b".to_string(),
            background_color: "#ffffff".to_string(),
            text_color: "#1e293b".to_string(),
            heading_font: "Inter, sans-serif".to_string(),
            body_font: "Inter, sans-serif".to_string(),
            button_style: ButtonStyle::Rounded,
            card_style: CardStyle::Elevated,
            spacing: SpacingScale::Normal,
        }
    }
}

impl GlobalStyles {
    /// Copy with the patch's fields layered on top
    pub fn patched(&self, patch: &GlobalStylesPatch) -> GlobalStyles {
        let pick = |value: &Option<String>, current: &String| {
            value.clone().unwrap_or_else(|| current.clone())
        };

        GlobalStyles {
            primary_color: pick(&patch.primary_color, &self.primary_color),
            secondary_color: pick(&patch.secondary_color, &self.secondary_color),
            accent_color: pick(&patch.accent_color, &self.accent_color),
            background_color: pick(&patch.background_color, &self.background_color),
            text_color: pick(&patch.text_color, &self.text_color),
            heading_font: pick(&patch.heading_font, &self.heading_font),
            body_font: pick(&patch.body_font, &self.body_font),
            button_style: patch.button_style.unwrap_or(self.button_style),
            card_style: patch.card_style.unwrap_or(self.card_style),
            spacing: patch.spacing.unwrap_or(self.spacing),
        }
    }
}

/// Partial update to [`GlobalStyles`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GlobalStylesPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading_font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_style: Option<ButtonStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_style: Option<CardStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<SpacingScale>,
}

impl GlobalStylesPatch {
    pub fn is_empty(&self) -> bool {
        *self == GlobalStylesPatch::default()
    }
}
