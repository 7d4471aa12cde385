use varex_core::config::ThemeConfig;
use varex_core::models::ExportCategory;

/// Decides which collections take part in an export.
#[derive(Debug, Clone, Copy)]
pub struct CollectionFilter<'a> {
    category: ExportCategory,
    theme: &'a ThemeConfig,
}

impl<'a> CollectionFilter<'a> {
    pub fn new(category: ExportCategory, theme: &'a ThemeConfig) -> Self {
        Self { category, theme }
    }

    pub fn category(&self) -> ExportCategory {
        self.category
    }

    /// `all` keeps every collection; `theme` keeps exact whitelist members.
    pub fn accepts(&self, collection_name: &str) -> bool {
        match self.category {
            ExportCategory::All => true,
            ExportCategory::Theme => self.theme.is_whitelisted(collection_name),
        }
    }
}
