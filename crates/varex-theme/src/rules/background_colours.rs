//! Background colour list and the background slots.

use varex_core::errors::ProjectionError;
use varex_core::models::{CollectionGroup, ResolvedType, Theme, ThemeColour};

use super::RuleContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundSlot {
    Primary,
    Secondary,
    Tertiary,
}

pub const KEYS: [(&str, BackgroundSlot); 3] = [
    ("backgroundPrimary", BackgroundSlot::Primary),
    ("backgroundSecondary", BackgroundSlot::Secondary),
    ("backgroundTertiary", BackgroundSlot::Tertiary),
];

pub fn apply<'a>(
    theme: &mut Theme,
    group: &'a CollectionGroup,
    ctx: &RuleContext<'a>,
) -> Result<(), ProjectionError> {
    let mode = group.default_mode_id.as_deref();
    for variable in &group.variables {
        if variable.resolved_type != ResolvedType::Color {
            continue;
        }
        let Some(colour) = ctx.colour_of(variable, mode)? else {
            continue;
        };

        match ctx.matcher.best_match(&variable.name, &KEYS) {
            Some(BackgroundSlot::Primary) => {
                theme.theme_primary_background_colour = colour.clone()
            }
            Some(BackgroundSlot::Secondary) => {
                theme.theme_secondary_background_colour = colour.clone()
            }
            Some(BackgroundSlot::Tertiary) => {
                theme.theme_tertiary_background_colour = colour.clone()
            }
            None => {}
        }
        theme.theme_colours.push(ThemeColour {
            name: ctx.display_name(variable).to_string(),
            theme_colour: colour,
        });
    }
    Ok(())
}
