//! Font family slots.

use varex_core::errors::ProjectionError;
use varex_core::models::{CollectionGroup, FontSlot, ResolvedType, Theme};

use super::RuleContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontRank {
    Primary,
    Secondary,
    Tertiary,
    Quaternary,
}

pub const KEYS: [(&str, FontRank); 4] = [
    ("fontPrimary", FontRank::Primary),
    ("fontSecondary", FontRank::Secondary),
    ("fontTertiary", FontRank::Tertiary),
    ("fontQuaternary", FontRank::Quaternary),
];

pub fn apply<'a>(
    theme: &mut Theme,
    group: &'a CollectionGroup,
    ctx: &RuleContext<'a>,
) -> Result<(), ProjectionError> {
    let mode = group.default_mode_id.as_deref();
    for variable in &group.variables {
        if variable.resolved_type != ResolvedType::String {
            continue;
        }
        let Some(rank) = ctx.matcher.best_match(&variable.name, &KEYS) else {
            continue;
        };
        let Some(font) = ctx.string_of(variable, mode)? else {
            continue;
        };

        let slot = match rank {
            FontRank::Primary => &mut theme.theme_primary_font,
            FontRank::Secondary => &mut theme.theme_secondary_font,
            FontRank::Tertiary => &mut theme.theme_tertiary_font,
            FontRank::Quaternary => &mut theme.theme_quaternary_font,
        };
        *slot = FontSlot { font };
    }
    Ok(())
}
