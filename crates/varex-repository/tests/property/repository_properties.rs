use proptest::prelude::*;
use test_fixtures::{collection, string_var};
use varex_core::config::ThemeConfig;
use varex_core::models::{ExportCategory, Variable, VariableCollection};
use varex_repository::grouping::group_by_collection;
use varex_repository::CollectionFilter;

const NAMES: [&str; 6] = [
    "Text Colours",
    "Background Colours",
    "Fonts",
    "Spacing",
    "Radii",
    "Link Colours",
];

fn arb_document() -> impl Strategy<Value = (Vec<VariableCollection>, Vec<Variable>)> {
    (
        prop::collection::vec(0usize..NAMES.len(), 0..6),
        prop::collection::vec(0usize..8, 0..40),
    )
        .prop_map(|(collection_names, owners)| {
            let collections: Vec<VariableCollection> = collection_names
                .iter()
                .enumerate()
                .map(|(i, n)| collection(&format!("c{i}"), NAMES[*n]))
                .collect();
            let variables = owners
                .iter()
                .enumerate()
                .map(|(i, owner)| string_var(&format!("v{i}"), "fontPrimary", &format!("c{owner}"), "x"))
                .collect();
            (collections, variables)
        })
}

proptest! {
    #[test]
    fn count_matches_sum_of_retained_groups((collections, variables) in arb_document()) {
        let theme = ThemeConfig::default();
        for category in [ExportCategory::All, ExportCategory::Theme] {
            let filter = CollectionFilter::new(category, &theme);
            let result = group_by_collection(variables.clone(), &collections, &filter);
            let summed: usize = result.snapshot.to_export_map().values().map(Vec::len).sum();
            prop_assert_eq!(result.snapshot.variable_count(), summed);
        }
    }

    #[test]
    fn theme_snapshot_is_subset_of_all((collections, variables) in arb_document()) {
        let theme = ThemeConfig::default();
        let all = group_by_collection(
            variables.clone(),
            &collections,
            &CollectionFilter::new(ExportCategory::All, &theme),
        );
        let themed = group_by_collection(
            variables,
            &collections,
            &CollectionFilter::new(ExportCategory::Theme, &theme),
        );

        prop_assert!(themed.snapshot.variable_count() <= all.snapshot.variable_count());
        for (name, group) in &themed.snapshot.collections {
            prop_assert!(theme.is_whitelisted(name));
            prop_assert_eq!(&all.snapshot.collections[name], group);
        }
    }

    #[test]
    fn alias_index_ignores_the_filter((collections, variables) in arb_document()) {
        let theme = ThemeConfig::default();
        let all = group_by_collection(
            variables.clone(),
            &collections,
            &CollectionFilter::new(ExportCategory::All, &theme),
        );
        let themed = group_by_collection(
            variables,
            &collections,
            &CollectionFilter::new(ExportCategory::Theme, &theme),
        );
        prop_assert_eq!(all.snapshot.aliases, themed.snapshot.aliases);
    }
}
