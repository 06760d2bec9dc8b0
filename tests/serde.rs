#[test]
#[cfg(feature = "serialize")]
fn serialize() {
    use glam::DVec2;
    use scene_draw::*;

    // The plain-data boundary types round-trip through JSON
    let mut shape = Shape::new();
    shape.add_vertex(DVec2::new(42.0, 66.0));
    shape.add_vertex(DVec2::new(69.0, 70.0));
    shape.add_edge(0, 1);

    let json = serde_json::to_string_pretty(&shape).unwrap();
    let back: Shape = serde_json::from_str(&json).unwrap();
    assert_eq!(shape, back);

    let center = DVec2::new(0.0, 0.0);
    let descriptor = ShipDescriptor {
        center,
        hull: centered_rectangle(10.0, 3.0, 0.5, center),
        sails: vec![strip(7.0, 0.5, 0.2, DVec2::new(4.0, 0.0), 0.5, center)],
        rudder: strip(1.0, 0.5, -0.1, DVec2::new(-5.0, 0.0), 0.5, center),
    };

    let json = serde_json::to_string_pretty(&descriptor).unwrap();
    let back: ShipDescriptor = serde_json::from_str(&json).unwrap();
    assert_eq!(descriptor, back);

    // A converted graph survives as well, keys included
    let graph = Graph::from_shape(&shape).unwrap();
    let json = serde_json::to_string(&graph).unwrap();
    let back: Graph = serde_json::from_str(&json).unwrap();

    let mut before = Recorder::new();
    graph.draw(&mut before);
    let mut after = Recorder::new();
    back.draw(&mut after);
    assert_eq!(before.commands(), after.commands());
}
