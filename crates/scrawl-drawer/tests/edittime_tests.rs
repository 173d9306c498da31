//! Editor-adapter tests: property grid, thumbnails, placeholder rendering.
//! Only built with the `edittime` feature.

#![cfg(feature = "edittime")]

use scrawl_drawer::prelude::*;
use scrawl_scene::prelude::*;

#[test]
fn property_grid_round_trips_the_serialized_fields() {
    let mut source = DrawerObject::new("a");
    source.style_mut().set_fill_color(12.0, 34.0, 56.0);
    source.style_mut().set_fill_opacity(66.0);
    source.style_mut().set_outline_color(78.0, 90.0, 11.0);
    source.style_mut().set_outline_opacity(25.0);
    source.style_mut().set_outline_size(-4.0);
    source.style_mut().set_coordinates_relative();

    // Copy every grid entry, as text, onto a fresh drawer.
    let mut target = DrawerObject::new("b");
    for index in 0..source.property_count() {
        let (_, value) = source.property(index).unwrap();
        assert!(target.set_property(index, &value), "property {index} should apply");
    }
    assert_eq!(target.style(), source.style());

    // And the grid covers exactly what serialization covers.
    let mut node_a = TreeNode::new("Object");
    let mut node_b = TreeNode::new("Object");
    source.save_to_tree(&mut node_a);
    target.save_to_tree(&mut node_b);
    assert_eq!(node_a, node_b);
}

#[test]
fn out_of_range_or_unparsable_edits_are_rejected() {
    let mut drawer = DrawerObject::new("d");
    assert!(!drawer.set_property(99, "1"));
    assert!(!drawer.set_property(1, "not-a-number"));
    assert!(!drawer.set_property(5, "maybe"));
    // Rejected edits leave state untouched.
    assert_eq!(drawer.style(), &StyleState::default());
}

#[test]
fn thumbnail_matches_the_editor_preview_box() {
    let mut drawer = DrawerObject::new("d");
    drawer.style_mut().set_fill_color(200.0, 0.0, 0.0);
    let preview = drawer.thumbnail();
    assert_eq!(preview.size(), (THUMBNAIL_SIZE, THUMBNAIL_SIZE));
    // Center of the preview carries the fill color.
    let center = THUMBNAIL_SIZE / 2;
    assert_eq!(preview.pixel(center, center), Some([200, 0, 0, 255]));
}

#[test]
fn edittime_draw_renders_a_placeholder_with_an_empty_queue() {
    let mut drawer = DrawerObject::new("d");
    let mut surface = HeadlessSurface::new(64, 64);

    assert!(drawer.queue().is_empty());
    assert!(drawer.draw_edittime(&mut surface));
    assert_eq!(surface.commands().len(), 1, "placeholder swatch expected");

    // With queued shapes the placeholder is drawn first, then the queue.
    drawer.style_mut().set_coordinates_absolute();
    surface.reset();
    drawer.enqueue_shape(ShapeKind::Circle { cx: 5.0, cy: 5.0, radius: 2.0 });
    assert!(drawer.draw_edittime(&mut surface));
    assert_eq!(surface.commands().len(), 2);
    assert!(drawer.queue().is_empty());
}
