use glam::DVec2;
use scene_draw::{DrawCommand, Drawable, Graph, GraphError, Recorder, Shape};

fn record(drawable: &dyn Drawable) -> Vec<DrawCommand> {
    let mut recorder = Recorder::new();
    drawable.draw(&mut recorder);
    recorder.into_commands()
}

fn line_endpoints(commands: &[DrawCommand]) -> Vec<(DVec2, DVec2)> {
    commands
        .windows(2)
        .filter_map(|pair| match pair {
            [DrawCommand::MoveTo(a), DrawCommand::LineTo(b)] => Some((*a, *b)),
            _ => None,
        })
        .collect()
}

#[test]
fn shape_converts_to_points_and_lines() {
    let mut shape = Shape::new();
    shape.add_vertex(DVec2::new(0.0, 0.0));
    shape.add_vertex(DVec2::new(1.0, 1.0));
    shape.add_edge(0, 1);

    let graph = Graph::from_shape(&shape).expect("valid shape");
    assert_eq!(graph.points().count(), 2);
    assert_eq!(graph.lines().len(), 1);

    let commands = record(&graph);

    // Points first: one full-circle arc per vertex before any segment
    let arcs: Vec<_> = commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Arc { center, radius, .. } => Some((*center, *radius)),
            _ => None,
        })
        .collect();
    assert_eq!(
        arcs,
        [(DVec2::new(0.0, 0.0), 1.0), (DVec2::new(1.0, 1.0), 1.0)]
    );

    // Then the connecting line between the vertex locations
    assert_eq!(
        line_endpoints(&commands),
        [(DVec2::new(0.0, 0.0), DVec2::new(1.0, 1.0))]
    );
    assert!(commands.contains(&DrawCommand::Stroke("green".into(), 2.0)));

    let first_segment = commands
        .iter()
        .position(|c| matches!(c, DrawCommand::MoveTo(_)))
        .unwrap();
    let last_arc = commands
        .iter()
        .rposition(|c| matches!(c, DrawCommand::Arc { .. }))
        .unwrap();
    assert!(last_arc < first_segment);
}

#[test]
fn moving_a_point_moves_its_lines() {
    let mut shape = Shape::new();
    shape.add_vertex(DVec2::new(0.0, 0.0));
    shape.add_vertex(DVec2::new(1.0, 1.0));
    shape.add_edge(0, 1);

    let mut graph = Graph::from_shape(&shape).expect("valid shape");
    let (key, _) = graph.points().next().expect("has points");

    graph.point_mut(key).unwrap().loc = DVec2::new(5.0, -5.0);

    // The line endpoint follows the point, it was never copied
    assert_eq!(
        line_endpoints(&record(&graph)),
        [(DVec2::new(5.0, -5.0), DVec2::new(1.0, 1.0))]
    );
}

#[test]
fn out_of_range_edges_are_rejected() {
    let mut shape = Shape::new();
    shape.add_vertex(DVec2::new(0.0, 0.0));
    shape.add_vertex(DVec2::new(1.0, 1.0));
    shape.add_edge(0, 2);

    assert_eq!(
        Graph::from_shape(&shape).unwrap_err(),
        GraphError::EdgeOutOfBounds {
            from: 0,
            to: 2,
            vertices: 2,
        }
    );
}

#[test]
fn edges_may_precede_their_vertices() {
    // Hosts emit edges and vertices in any order; only conversion validates
    let mut shape = Shape::new();
    shape.add_edge(0, 1);
    shape.add_vertex(DVec2::new(2.0, 0.0));
    shape.add_vertex(DVec2::new(0.0, 2.0));

    let graph = Graph::from_shape(&shape).expect("indices resolve by now");
    assert_eq!(graph.lines().len(), 1);
}
