//! Style resolution.
//!
//! Precedence, highest first:
//! 1. explicit `section.styles` values
//! 2. fixed defaults (padding `32px`, background `transparent`, ...)
//! 3. `GlobalStyles`, only for typography and colour the section leaves unset

use crate::vdom::StyleMap;
use shelf_model::{CardStyle, GlobalStyles, Section, StyleProps, TextAlign};

pub const DEFAULT_PADDING: &str = "32px";
pub const DEFAULT_MARGIN: &str = "0";
pub const DEFAULT_BACKGROUND: &str = "transparent";
pub const DEFAULT_MAX_WIDTH: &str = "100%";

/// A string style value, treating `""` as unset
fn set(value: &Option<String>) -> Option<&String> {
    value.as_ref().filter(|v| !v.is_empty())
}

fn map(entries: &[(&str, &str)]) -> StyleMap {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Styles for the outer box of a section
pub fn container_styles(styles: &StyleProps, theme: &GlobalStyles) -> StyleMap {
    let mut out = StyleMap::new();

    out.insert(
        "background-color".to_string(),
        set(&styles.background_color)
            .cloned()
            .unwrap_or_else(|| DEFAULT_BACKGROUND.to_string()),
    );

    if let Some(image) = set(&styles.background_image) {
        out.insert("background-image".to_string(), format!("url({})", image));
        out.insert("background-size".to_string(), "cover".to_string());
        out.insert("background-position".to_string(), "center".to_string());
    }

    out.insert(
        "padding".to_string(),
        styles
            .padding
            .map(|p| p.to_css())
            .unwrap_or_else(|| DEFAULT_PADDING.to_string()),
    );
    out.insert(
        "margin".to_string(),
        styles
            .margin
            .map(|m| m.to_css())
            .unwrap_or_else(|| DEFAULT_MARGIN.to_string()),
    );
    out.insert(
        "text-align".to_string(),
        styles.text_align.unwrap_or(TextAlign::Left).as_str().to_string(),
    );
    out.insert(
        "max-width".to_string(),
        set(&styles.max_width)
            .cloned()
            .unwrap_or_else(|| DEFAULT_MAX_WIDTH.to_string()),
    );

    if let Some(radius) = set(&styles.border_radius) {
        out.insert("border-radius".to_string(), radius.clone());
    }

    out.insert(
        "color".to_string(),
        set(&styles.color)
            .cloned()
            .unwrap_or_else(|| theme.text_color.clone()),
    );
    out.insert("font-family".to_string(), theme.body_font.clone());

    out
}

/// Alignment a section asks for: explicit style, then its `alignment`
/// setting, then `fallback`
pub fn resolve_alignment(section: &Section, fallback: TextAlign) -> TextAlign {
    if let Some(align) = section.styles.text_align {
        return align;
    }
    match section.setting_str("alignment") {
        Some("left") => TextAlign::Left,
        Some("center") => TextAlign::Center,
        Some("right") => TextAlign::Right,
        _ => fallback,
    }
}

pub fn heading_styles(theme: &GlobalStyles) -> StyleMap {
    map(&[("font-family", theme.heading_font.as_str()), ("margin", "0 0 16px 0")])
}

pub fn button_styles(theme: &GlobalStyles) -> StyleMap {
    map(&[
        ("background-color", theme.primary_color.as_str()),
        ("color", "#ffffff"),
        ("border", "none"),
        ("border-radius", theme.button_style.border_radius()),
        ("padding", "12px 24px"),
        ("font-family", theme.body_font.as_str()),
        ("cursor", "pointer"),
    ])
}

pub fn card_styles(theme: &GlobalStyles) -> StyleMap {
    let mut out = map(&[("border-radius", "8px"), ("padding", "16px")]);
    match theme.card_style {
        CardStyle::Flat => {
            out.insert("border".to_string(), "none".to_string());
        }
        CardStyle::Outlined => {
            out.insert("border".to_string(), "1px solid #e5e7eb".to_string());
        }
        CardStyle::Elevated => {
            out.insert(
                "box-shadow".to_string(),
                "0 1px 3px rgba(0, 0, 0, 0.12)".to_string(),
            );
        }
    }
    out
}

pub fn grid_styles(columns: usize, theme: &GlobalStyles) -> StyleMap {
    map(&[
        ("display", "grid"),
        (
            "grid-template-columns",
            format!("repeat({}, minmax(0, 1fr))", columns).as_str(),
        ),
        ("gap", theme.spacing.gap()),
    ])
}

/// `:root` custom properties exposing the theme to custom CSS
pub fn theme_variables(theme: &GlobalStyles) -> StyleMap {
    map(&[
        ("--primary-color", theme.primary_color.as_str()),
        ("--secondary-color", theme.secondary_color.as_str()),
        ("--accent-color", theme.accent_color.as_str()),
        ("--background-color", theme.background_color.as_str()),
        ("--text-color", theme.text_color.as_str()),
        ("--heading-font", theme.heading_font.as_str()),
        ("--body-font", theme.body_font.as_str()),
        ("--button-radius", theme.button_style.border_radius()),
        ("--spacing-gap", theme.spacing.gap()),
    ])
}
