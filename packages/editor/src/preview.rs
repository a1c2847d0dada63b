use serde::{Deserialize, Serialize};

/// Canvas viewport the editor simulates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewMode {
    #[default]
    Desktop,
    Tablet,
    Mobile,
}

impl PreviewMode {
    /// CSS width of the canvas frame
    pub fn width(self) -> &'static str {
        match self {
            PreviewMode::Desktop => "100%",
            PreviewMode::Tablet => "768px",
            PreviewMode::Mobile => "375px",
        }
    }
}

/// Whether the canvas is being edited or shown as a shopper would see it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionMode {
    #[default]
    Editing,
    Previewing,
}

impl SessionMode {
    pub fn toggled(self) -> Self {
        match self {
            SessionMode::Editing => SessionMode::Previewing,
            SessionMode::Previewing => SessionMode::Editing,
        }
    }

    /// Canvas interactions are inert while editing
    pub fn renders_inert(self) -> bool {
        self == SessionMode::Editing
    }
}
