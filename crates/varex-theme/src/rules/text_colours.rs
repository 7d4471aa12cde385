//! Text colour list and the primary/secondary/tertiary text slots.

use varex_core::errors::ProjectionError;
use varex_core::models::{CollectionGroup, ResolvedType, TextColour, Theme};

use super::RuleContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSlot {
    Primary,
    Secondary,
    Tertiary,
}

pub const KEYS: [(&str, TextSlot); 3] = [
    ("textPrimary", TextSlot::Primary),
    ("textSecondary", TextSlot::Secondary),
    ("textTertiary", TextSlot::Tertiary),
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
            Some(TextSlot::Primary) => theme.theme_primary_text_colour = colour.clone(),
            Some(TextSlot::Secondary) => theme.theme_secondary_text_colour = colour.clone(),
            Some(TextSlot::Tertiary) => theme.theme_tertiary_text_colour = colour.clone(),
            None => {}
        }
        theme.text_colours.push(TextColour {
            name: ctx.display_name(variable).to_string(),
            colour,
        });
    }
    Ok(())
}
