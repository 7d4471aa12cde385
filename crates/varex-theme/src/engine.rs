//! ThemeProjector: the `IProjector` implementation.

use tracing::debug;
use varex_core::config::ThemeConfig;
use varex_core::errors::{ProjectionError, VarexResult};
use varex_core::models::{
    CollectionGroup, ExportCategory, ExportDocument, ProjectionContext, Theme, VariableSnapshot,
};
use varex_core::traits::IProjector;
use varex_observability::projection_span;

use crate::naming::NameMatcher;
use crate::rules::{self, RuleContext};

type Rule =
    for<'a> fn(&mut Theme, &'a CollectionGroup, &RuleContext<'a>) -> Result<(), ProjectionError>;

/// Shapes snapshots for export. Stateless apart from its configuration.
#[derive(Debug, Clone, Default)]
pub struct ThemeProjector {
    config: ThemeConfig,
}

impl ThemeProjector {
    pub fn new(config: ThemeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    /// Build the theme object from the bound collections. Absent collections
    /// leave their fields at the defaults.
    pub fn build_theme(
        &self,
        snapshot: &VariableSnapshot,
        context: &ProjectionContext,
    ) -> Result<Theme, ProjectionError> {
        let names = &self.config.collections;
        let bindings: [(&str, Rule); 5] = [
            (names.text_colours.as_str(), rules::text_colours::apply),
            (names.background_colours.as_str(), rules::background_colours::apply),
            (names.fonts.as_str(), rules::fonts::apply),
            (names.link_colours.as_str(), rules::link_colours::apply),
            (names.link_decoration.as_str(), rules::link_decoration::apply),
        ];

        let ctx = RuleContext::new(
            NameMatcher::new(self.config.name_matching),
            self.config.strip_path_prefix,
            &snapshot.aliases,
        );
        let mut theme = Theme::named(context.theme_name.clone());
        for (collection, apply) in bindings {
            match snapshot.collection(collection) {
                Some(group) => apply(&mut theme, group, &ctx)?,
                None => debug!(collection, "theme collection absent, keeping defaults"),
            }
        }
        Ok(theme)
    }
}

impl IProjector for ThemeProjector {
    fn project(
        &self,
        snapshot: &VariableSnapshot,
        category: ExportCategory,
        context: &ProjectionContext,
    ) -> VarexResult<ExportDocument> {
        let span = projection_span!(category, snapshot.collections.len());
        let _guard = span.enter();

        match category {
            ExportCategory::All => Ok(ExportDocument::Collections(snapshot.to_export_map())),
            ExportCategory::Theme => {
                let theme = self.build_theme(snapshot, context)?;
                Ok(ExportDocument::Themes(vec![theme]))
            }
        }
    }
}
