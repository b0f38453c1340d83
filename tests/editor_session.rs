//! Drives a whole editing session through the public API, the way the canvas
//! panel does: mode switches, pointer gestures, restyling, reordering, and a
//! final export.

use eframe_sketch::{
    deserialize_scene, render_scene, serialize_scene, Color, EditorState, Mode, Point,
    PointerEvent, Scene, ShapeKind, Style, DEFAULT_BACKGROUND,
};

fn drag(
    scene: &mut Scene,
    prefs: &mut Style,
    state: EditorState,
    from: Point,
    to: Point,
) -> EditorState {
    let state = state.apply(scene, prefs, PointerEvent::Pressed(from));
    let state = state.apply(scene, prefs, PointerEvent::Dragged(to));
    state.apply(scene, prefs, PointerEvent::Released(to))
}

#[test]
fn full_session() {
    let mut scene = Scene::new();
    let mut prefs = Style::default();
    let mut state = EditorState::new();
    assert_eq!(state.mode, Mode::Select);

    // Draw a rectangle and an ellipse.
    state = state.with_mode(Mode::CreateRectangle);
    state = drag(&mut scene, &mut prefs, state, Point::new(10.0, 10.0), Point::new(60.0, 40.0));
    state = state.with_mode(Mode::CreateEllipse);
    state = drag(&mut scene, &mut prefs, state, Point::new(40.0, 30.0), Point::new(70.0, 50.0));
    assert_eq!(scene.len(), 2);
    let rect_id = scene.shapes()[0].id();
    let ellipse_id = scene.shapes()[1].id();

    // Select the rectangle (the ellipse covers (45, 32) too, but the press at
    // (15, 15) only hits the rectangle) and restyle it.
    state = state.with_mode(Mode::Select);
    state = state.apply(&mut scene, &mut prefs, PointerEvent::Pressed(Point::new(15.0, 15.0)));
    assert_eq!(state.selection, Some(rect_id));
    let purple = Color::from_rgb(0x80, 0x00, 0x80);
    scene.set_fill(rect_id, purple);
    scene.set_outline_thickness(rect_id, 8.0);

    // Raise it above the ellipse.
    scene.bring_to_front(rect_id);
    assert_eq!(scene.z_position(rect_id), Some(1));
    assert_eq!(scene.shape_at(Point::new(45.0, 32.0)), Some(rect_id));

    // Persist and reload: the document carries the new order and style.
    let json = serialize_scene(&scene).unwrap();
    let restored = deserialize_scene(&json).unwrap();
    assert_eq!(restored.shapes()[1].kind(), ShapeKind::Rectangle);
    assert_eq!(restored.shapes()[1].fill, purple);

    // Remove the ellipse: (65, 30) is inside it but right of the rectangle.
    state = state.with_mode(Mode::Remove);
    state = state.apply(&mut scene, &mut prefs, PointerEvent::Pressed(Point::new(68.0, 49.0)));
    assert_eq!(scene.len(), 2, "a miss removes nothing");
    state = state.apply(&mut scene, &mut prefs, PointerEvent::Pressed(Point::new(65.0, 30.0)));
    assert!(scene.get(ellipse_id).is_none());
    assert_eq!(scene.len(), 1);

    // The snapshot shows the restyled rectangle over the background.
    let image = render_scene(&scene, 100, 100);
    let center = image.get_pixel(35, 25).0;
    assert_eq!([center[0], center[1], center[2]], [0x80, 0x00, 0x80]);

    // Reset ends with an empty scene and default styling.
    scene.reset();
    state = state.cleared().with_mode(Mode::Select);
    prefs = Style::default();
    assert!(scene.is_empty());
    assert_eq!(scene.background(), DEFAULT_BACKGROUND);
    assert_eq!(state.selection, None);
    assert_eq!(prefs.outline_thickness, 5.0);
}
