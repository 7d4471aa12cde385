//! Link decoration styles (`underline`, `none`, ...).

use varex_core::errors::ProjectionError;
use varex_core::models::{CollectionGroup, ResolvedType, Theme};

use super::RuleContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecorationStyle {
    Default,
    Hover,
}

pub const KEYS: [(&str, DecorationStyle); 2] = [
    ("linkDecorationDefault", DecorationStyle::Default),
    ("linkDecorationHover", DecorationStyle::Hover),
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
        let Some(key) = ctx.matcher.best_match(&variable.name, &KEYS) else {
            continue;
        };
        let Some(style) = ctx.string_of(variable, mode)? else {
            continue;
        };

        match key {
            DecorationStyle::Default => theme.links.link_decoration_style = style,
            DecorationStyle::Hover => theme.links.link_decoration_style_hover = style,
        }
    }
    Ok(())
}
