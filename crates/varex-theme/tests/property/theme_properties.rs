//! Property-based tests for color decoding, naming, and projection totality.

use proptest::prelude::*;
use test_fixtures::{collection, color_var, string_var};
use varex_core::config::ThemeConfig;
use varex_core::models::{ExportCategory, ProjectionContext};
use varex_core::traits::IProjector;
use varex_repository::grouping::group_by_collection;
use varex_repository::CollectionFilter;
use varex_theme::{display_name, rgb_to_hex, ThemeProjector};

fn channel() -> impl Strategy<Value = f64> {
    prop_oneof![0.0f64..=1.0, -10.0f64..10.0]
}

proptest! {
    #[test]
    fn hex_is_seven_lowercase_chars(r in channel(), g in channel(), b in channel()) {
        let hex = rgb_to_hex(r, g, b);
        prop_assert_eq!(hex.len(), 7);
        prop_assert!(hex.starts_with('#'));
        prop_assert!(hex[1..].chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn hex_round_trips_within_half_a_step(r in 0.0f64..=1.0, g in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        let hex = rgb_to_hex(r, g, b);
        for (i, value) in [r, g, b].into_iter().enumerate() {
            let byte = u8::from_str_radix(&hex[1 + 2 * i..3 + 2 * i], 16).unwrap();
            prop_assert!((f64::from(byte) / 255.0 - value).abs() <= 0.5 / 255.0 + 1e-9);
        }
    }

    #[test]
    fn display_name_has_no_separator(segments in prop::collection::vec("[a-zA-Z0-9]{1,8}", 1..5)) {
        let name = segments.join("/");
        let shown = display_name(&name, true);
        prop_assert!(!shown.contains('/'));
        prop_assert_eq!(shown, segments.last().unwrap().as_str());
        prop_assert_eq!(display_name(&name, false), name.as_str());
    }

    #[test]
    fn theme_projection_is_total(
        names in prop::collection::vec("[a-zA-Z/]{1,20}", 0..12),
        fonts in prop::collection::vec("[a-zA-Z ]{0,12}", 0..4),
    ) {
        let config = ThemeConfig::default();
        let collections = [
            collection("c1", "Text Colours"),
            collection("c2", "Background Colours"),
            collection("c3", "Fonts"),
        ];
        let mut variables = Vec::new();
        for (i, name) in names.iter().enumerate() {
            let coll = if i % 2 == 0 { "c1" } else { "c2" };
            variables.push(color_var(&format!("v{i}"), name, coll, 0.2, 0.4, 0.6));
        }
        for (i, font) in fonts.iter().enumerate() {
            variables.push(string_var(&format!("f{i}"), "fontPrimary", "c3", font));
        }

        let filter = CollectionFilter::new(ExportCategory::Theme, &config);
        let snapshot = group_by_collection(variables, &collections, &filter).snapshot;
        let document = ThemeProjector::new(config)
            .project(&snapshot, ExportCategory::Theme, &ProjectionContext::new("Doc"));
        prop_assert!(document.is_ok());

        let document = document.unwrap();
        let themes = document.themes().unwrap();
        prop_assert_eq!(themes.len(), 1);
        let listed = themes[0].text_colours.len() + themes[0].theme_colours.len();
        prop_assert_eq!(listed, names.len());
    }
}
