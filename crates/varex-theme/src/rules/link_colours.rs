//! Link and link-decoration colours.

use varex_core::errors::ProjectionError;
use varex_core::models::{CollectionGroup, ResolvedType, Theme};

use super::RuleContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkColour {
    Default,
    Hover,
    Decoration,
    DecorationHover,
}

pub const KEYS: [(&str, LinkColour); 4] = [
    ("linkDefault", LinkColour::Default),
    ("linkHover", LinkColour::Hover),
    ("linkDecoration", LinkColour::Decoration),
    ("linkDecorationHover", LinkColour::DecorationHover),
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
        let Some(key) = ctx.matcher.best_match(&variable.name, &KEYS) else {
            continue;
        };
        let Some(colour) = ctx.colour_of(variable, mode)? else {
            continue;
        };

        let links = &mut theme.links;
        match key {
            LinkColour::Default => links.link_colour = colour,
            LinkColour::Hover => links.link_colour_hover = colour,
            LinkColour::Decoration => links.link_decoration_colour = colour,
            LinkColour::DecorationHover => links.link_decoration_colour_hover = colour,
        }
    }
    Ok(())
}
