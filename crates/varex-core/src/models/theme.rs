use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Fixed-schema projection of the theme collections.
///
/// Every field defaults to an empty string or list and is always serialized,
/// so downstream consumers never see a missing key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Theme {
    pub theme_name: String,
    pub text_colours: Vec<TextColour>,
    pub theme_colours: Vec<ThemeColour>,
    pub theme_primary_text_colour: String,
    pub theme_secondary_text_colour: String,
    pub theme_tertiary_text_colour: String,
    pub theme_primary_background_colour: String,
    pub theme_secondary_background_colour: String,
    pub theme_tertiary_background_colour: String,
    pub theme_primary_font: FontSlot,
    pub theme_secondary_font: FontSlot,
    pub theme_tertiary_font: FontSlot,
    pub theme_quaternary_font: FontSlot,
    pub links: LinkStyles,
}

impl Theme {
    pub fn named(theme_name: impl Into<String>) -> Self {
        Self {
            theme_name: theme_name.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TextColour {
    pub name: String,
    pub colour: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ThemeColour {
    pub name: String,
    pub theme_colour: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct FontSlot {
    pub font: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct LinkStyles {
    pub link_colour: String,
    pub link_colour_hover: String,
    pub link_decoration_colour: String,
    pub link_decoration_colour_hover: String,
    pub link_decoration_style: String,
    pub link_decoration_style_hover: String,
}
