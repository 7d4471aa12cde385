use serde_json::json;
use varex_core::models::*;

#[test]
fn variable_deserializes_from_host_shape() {
    let raw = json!({
        "name": "Primary/textPrimary",
        "id": "VariableID:1:2",
        "resolvedType": "COLOR",
        "valuesByMode": { "1:0": { "r": 1, "g": 0.5, "b": 0, "a": 1 } },
        "variableCollectionId": "VariableCollectionId:1:0",
        "description": "ignored host field",
        "scopes": ["ALL_SCOPES"]
    });
    let variable: Variable = serde_json::from_value(raw).unwrap();
    assert_eq!(variable.name, "Primary/textPrimary");
    assert_eq!(variable.resolved_type, ResolvedType::Color);
    assert_eq!(
        variable.values_by_mode["1:0"],
        VariableValue::Color(Rgba::rgba(1.0, 0.5, 0.0, 1.0))
    );
}

#[test]
fn untagged_values_pick_the_right_shape() {
    let values: Vec<VariableValue> = serde_json::from_value(json!([
        { "r": 0, "g": 0, "b": 0 },
        { "type": "VARIABLE_ALIAS", "id": "VariableID:9:9" },
        true,
        16,
        "Inter"
    ]))
    .unwrap();

    assert_eq!(values[0], VariableValue::Color(Rgba::rgb(0.0, 0.0, 0.0)));
    assert_eq!(values[1], VariableValue::Alias(VariableAlias::to("VariableID:9:9")));
    assert_eq!(values[2], VariableValue::Boolean(true));
    assert_eq!(values[3], VariableValue::Float(16.0));
    assert_eq!(values[4], VariableValue::String("Inter".into()));
}

#[test]
fn exported_variable_drops_collection_id() {
    let variable = Variable::new("v1", "fontPrimary", ResolvedType::String, "c1")
        .with_value("1:0", VariableValue::String("Inter".into()));
    let exported = ExportedVariable::from(variable);
    let value = serde_json::to_value(&exported).unwrap();

    assert_eq!(
        value,
        json!({
            "name": "fontPrimary",
            "id": "v1",
            "resolvedType": "STRING",
            "valuesByMode": { "1:0": "Inter" }
        })
    );
}

#[test]
fn color_without_alpha_omits_the_field() {
    let value = serde_json::to_value(VariableValue::Color(Rgba::rgb(1.0, 1.0, 1.0))).unwrap();
    assert_eq!(value, json!({ "r": 1, "g": 1, "b": 1 }));
}

#[test]
fn whole_numbers_keep_their_integer_form() {
    let raw = r#"[16,1.5,{"r":1,"g":0.5,"b":0,"a":1},-3]"#;
    let values: Vec<VariableValue> = serde_json::from_str(raw).unwrap();
    assert_eq!(values[0], VariableValue::Float(16.0));
    assert_eq!(serde_json::to_string(&values).unwrap(), raw);
}

#[test]
fn default_theme_serializes_every_key() {
    let value = serde_json::to_value(Theme::default()).unwrap();
    let object = value.as_object().unwrap();

    for key in [
        "theme_name",
        "text_colours",
        "theme_colours",
        "theme_primary_text_colour",
        "theme_secondary_text_colour",
        "theme_tertiary_text_colour",
        "theme_primary_background_colour",
        "theme_secondary_background_colour",
        "theme_tertiary_background_colour",
        "theme_primary_font",
        "theme_secondary_font",
        "theme_tertiary_font",
        "theme_quaternary_font",
        "links",
    ] {
        assert!(object.contains_key(key), "missing key {key}");
        assert!(!object[key].is_null(), "null value for {key}");
    }
    assert_eq!(object["theme_primary_font"], json!({ "font": "" }));
    assert_eq!(object["links"]["link_decoration_style_hover"], json!(""));
    assert_eq!(object["text_colours"], json!([]));
}

#[test]
fn collection_default_mode_falls_back_to_first_declared() {
    let mut collection = VariableCollection::new("c1", "Fonts")
        .with_mode("2:0", "Light")
        .with_mode("2:1", "Dark");
    assert_eq!(collection.declared_default_mode(), Some("2:0"));

    collection.default_mode_id = Some("2:1".into());
    assert_eq!(collection.declared_default_mode(), Some("2:1"));

    collection.default_mode_id = None;
    assert_eq!(collection.declared_default_mode(), Some("2:0"));

    let bare = VariableCollection::new("c2", "Empty");
    assert_eq!(bare.declared_default_mode(), None);
}

#[test]
fn category_parses_and_displays() {
    assert_eq!("all".parse::<ExportCategory>().unwrap(), ExportCategory::All);
    assert_eq!("theme".parse::<ExportCategory>().unwrap(), ExportCategory::Theme);
    assert!("Theme".parse::<ExportCategory>().is_err());
    assert_eq!(ExportCategory::Theme.to_string(), "theme");
}

#[test]
fn ui_message_wire_format() {
    let msg: UiMessage =
        serde_json::from_value(json!({ "type": "export-variables", "category": "theme" })).unwrap();
    assert_eq!(msg, UiMessage::export(ExportCategory::Theme));

    let bare: UiMessage = serde_json::from_value(json!({ "type": "export-variables" })).unwrap();
    assert_eq!(bare, UiMessage::ExportVariables { category: None });
}

#[test]
fn plugin_message_wire_format() {
    let ok = PluginMessage::ExportJson {
        data: "{}".into(),
        count: 0,
        category: ExportCategory::All,
    };
    assert_eq!(
        serde_json::to_value(&ok).unwrap(),
        json!({ "type": "export-json", "data": "{}", "count": 0, "category": "all" })
    );

    let err = PluginMessage::Error {
        message: "Error exporting variables: boom".into(),
    };
    assert_eq!(
        serde_json::to_value(&err).unwrap(),
        json!({ "type": "error", "message": "Error exporting variables: boom" })
    );
    assert!(err.is_error());
    assert!(!ok.is_error());
}

#[test]
fn snapshot_counts_flatten_across_collections() {
    let var = |id: &str| {
        ExportedVariable::from(Variable::new(id, id, ResolvedType::Float, "c"))
    };
    let mut snapshot = VariableSnapshot::default();
    snapshot.collections.insert(
        "A".into(),
        CollectionGroup {
            collection_id: "a".into(),
            default_mode_id: None,
            variables: vec![var("1"), var("2")],
        },
    );
    snapshot.collections.insert(
        "B".into(),
        CollectionGroup {
            collection_id: "b".into(),
            default_mode_id: None,
            variables: vec![var("3")],
        },
    );
    assert_eq!(snapshot.variable_count(), 3);
    assert_eq!(snapshot.to_export_map()["A"].len(), 2);
}
