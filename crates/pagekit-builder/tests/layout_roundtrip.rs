//! Wire-format round-trip tests for layout items.

use pagekit_builder::{
    BlockKind, BuilderState, LayoutItem, Position, Size, StyleMap, StylePatch, StyleProperty,
};

fn item(kind: &str, left: &str, top: &str) -> LayoutItem {
    LayoutItem {
        kind: kind.to_string(),
        content: "content".to_string(),
        left: left.to_string(),
        top: top.to_string(),
        width: None,
        height: None,
        styles: StyleMap::default(),
    }
}

#[test]
fn test_serialize_restore_round_trip_law() {
    let mut styles = StyleMap::default();
    styles.background_color = "#102030".to_string();
    styles.custom_css = "transform: rotate(3deg);".to_string();

    let items = vec![
        LayoutItem {
            kind: "hero".to_string(),
            content: "<section class=\"hero\"><h1>Hi</h1></section>".to_string(),
            left: "0px".to_string(),
            top: "-40px".to_string(),
            width: Some("960px".to_string()),
            height: Some("320px".to_string()),
            styles,
        },
        item("text", "15px", "400px"),
    ];

    let mut state = BuilderState::new();
    let report = state.restore_layout(&items);
    assert_eq!(report.restored, 2);
    assert_eq!(report.rejected, 0);
    assert_eq!(state.serialize_layout(), items);
}

#[test]
fn test_restore_preserves_z_order() {
    let items = vec![
        item("text", "0px", "0px"),
        item("button", "0px", "0px"),
        item("image", "0px", "0px"),
    ];
    let mut state = BuilderState::new();
    state.restore_layout(&items);
    let kinds: Vec<BlockKind> = state.canvas.blocks().map(|b| b.kind).collect();
    assert_eq!(
        kinds,
        vec![BlockKind::Text, BlockKind::Button, BlockKind::Image]
    );
}

#[test]
fn test_unknown_kind_rejected_rest_of_batch_restored() {
    let items = vec![
        item("text", "0px", "0px"),
        item("carousel", "10px", "10px"),
        item("button", "20px", "20px"),
    ];
    let mut state = BuilderState::new();
    let report = state.restore_layout(&items);
    assert_eq!(report.restored, 2);
    assert_eq!(report.rejected, 1);
    let kinds: Vec<BlockKind> = state.canvas.blocks().map(|b| b.kind).collect();
    assert_eq!(kinds, vec![BlockKind::Text, BlockKind::Button]);
}

#[test]
fn test_malformed_position_rejected() {
    let items = vec![item("text", "twelve", "0px")];
    let mut state = BuilderState::new();
    let report = state.restore_layout(&items);
    assert_eq!(report.restored, 0);
    assert_eq!(report.rejected, 1);
}

#[test]
fn test_unset_styles_round_trip_as_empty_strings() {
    let mut state = BuilderState::new();
    let a = state.drop_block(BlockKind::Text, 5, 5);
    state.apply_style(a, StylePatch::single(StyleProperty::Color, "red"));

    let items = state.serialize_layout();
    assert_eq!(items[0].styles.color, "red");
    assert_eq!(items[0].styles.font_size, "", "unset serializes as empty string, not absent");

    let mut restored = BuilderState::new();
    restored.restore_layout(&items);
    let block = restored.canvas.blocks().next().unwrap();
    assert_eq!(block.styles.color, "red");
    assert_eq!(block.styles.font_size, "");
}

#[test]
fn test_wire_json_shape() {
    let mut state = BuilderState::new();
    let a = state.drop_block(BlockKind::Hero, 120, 40);
    state.apply_style(a, StylePatch::single(StyleProperty::BackgroundColor, "#fff"));

    let json = serde_json::to_value(state.serialize_layout()).unwrap();
    let first = &json[0];
    assert_eq!(first["type"], "hero");
    assert_eq!(first["left"], "120px");
    assert_eq!(first["top"], "40px");
    assert_eq!(first["width"], "960px");
    assert_eq!(first["styles"]["backgroundColor"], "#fff");
    assert_eq!(first["styles"]["customCSS"], "");
}

#[test]
fn test_intrinsic_size_round_trips_as_absent() {
    let mut state = BuilderState::new();
    let id = state.drop_block(BlockKind::Text, 0, 0);
    assert_eq!(state.canvas.get_block(id).unwrap().size, None);

    let items = state.serialize_layout();
    assert_eq!(items[0].width, None);

    let mut restored = BuilderState::new();
    restored.restore_layout(&items);
    assert_eq!(restored.canvas.blocks().next().unwrap().size, None);
}

#[test]
fn test_explicit_size_round_trips() {
    let mut state = BuilderState::new();
    let id = state.drop_block(BlockKind::Container, 0, 0);
    state.resize_block(id, Size::new(512, 384));

    let items = state.serialize_layout();
    assert_eq!(items[0].width.as_deref(), Some("512px"));
    assert_eq!(items[0].height.as_deref(), Some("384px"));

    let mut restored = BuilderState::new();
    restored.restore_layout(&items);
    assert_eq!(
        restored.canvas.blocks().next().unwrap().size,
        Some(Size::new(512, 384))
    );
}

#[test]
fn test_negative_positions_round_trip() {
    let items = vec![item("image", "-150px", "-8px")];
    let mut state = BuilderState::new();
    state.restore_layout(&items);
    assert_eq!(
        state.canvas.blocks().next().unwrap().position,
        Position::new(-150, -8)
    );
    assert_eq!(state.serialize_layout(), items);
}
