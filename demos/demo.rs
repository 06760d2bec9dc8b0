use glam::DVec2;
use macroquad::prelude::{
    clear_background, draw_line, draw_text, draw_triangle, get_char_pressed, get_frame_time,
    get_time, next_frame, Color, Conf, Vec2, BLACK, BLUE, BROWN, DARKGRAY, GOLD, GRAY, GREEN,
    ORANGE, RED, SKYBLUE, WHITE,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use scene_draw::{
    centered_rectangle, strip, util::VecExt, Arrow, Axis, Graph, PointKey, RollingAverage, Scene,
    Shape, ShipDescriptor, ShipShape, Surface,
};

const WIDTH: i32 = 800;
const HEIGHT: i32 = 600;

struct Colorscheme {
    background: Color,
    axes: &'static str,
    steps: &'static str,
    body: &'static str,
    sail: &'static str,
    wind: &'static str,
    text: Color,
}

const COLORSCHEME: Colorscheme = Colorscheme {
    background: BLACK,
    axes: "gray",
    steps: "darkgray",
    body: "brown",
    sail: "white",
    wind: "skyblue",
    text: WHITE,
};

fn window_conf() -> Conf {
    Conf {
        window_title: "2D scene composition demo".to_owned(),
        fullscreen: false,
        window_width: WIDTH,
        window_height: HEIGHT,
        ..Default::default()
    }
}

fn v32(p: DVec2) -> Vec2 {
    Vec2::new(p.x as f32, p.y as f32)
}

fn parse_color(name: &str) -> Color {
    match name {
        "white" => WHITE,
        "black" => BLACK,
        "gray" => GRAY,
        "darkgray" => DARKGRAY,
        "green" => GREEN,
        "red" => RED,
        "blue" => BLUE,
        "orange" => ORANGE,
        "gold" => GOLD,
        "skyblue" => SKYBLUE,
        "brown" => BROWN,
        _ => GRAY,
    }
}

/// A [`Surface`] over macroquad's immediate-mode calls.
///
/// Paths are buffered as flattened subpaths; fills fan-triangulate (convex
/// shapes only, which is all this demo draws), arcs become line segments. The
/// configured origin acts as the camera: every incoming point is translated by
/// it.
struct QuadSurface {
    origin: DVec2,
    subpaths: Vec<Vec<DVec2>>,
}

impl QuadSurface {
    fn new(origin: DVec2) -> Self {
        Self {
            origin,
            subpaths: Vec::new(),
        }
    }
}

impl Surface for QuadSurface {
    fn begin_path(&mut self) {
        self.subpaths.clear()
    }

    fn move_to(&mut self, p: DVec2) {
        self.subpaths.push(vec![p + self.origin])
    }

    fn line_to(&mut self, p: DVec2) {
        let p = p + self.origin;
        match self.subpaths.last_mut() {
            Some(subpath) => subpath.push(p),
            None => self.subpaths.push(vec![p]),
        }
    }

    fn arc(&mut self, center: DVec2, radius: f64, start_angle: f64, end_angle: f64) {
        let center = center + self.origin;
        let sweep = end_angle - start_angle;
        let points = (0..=ARC_SEGMENTS)
            .map(|step| {
                let angle = start_angle + sweep * step as f64 / ARC_SEGMENTS as f64;
                center + VecExt::rotate(DVec2::new(radius, 0.0), angle)
            })
            .collect();
        self.subpaths.push(points)
    }

    fn rect(&mut self, loc: DVec2, dim: DVec2) {
        let loc = loc + self.origin;
        self.subpaths.push(vec![
            loc,
            loc + DVec2::new(dim.x, 0.0),
            loc + dim,
            loc + DVec2::new(0.0, dim.y),
            loc,
        ])
    }

    fn close_path(&mut self) {
        if let Some(subpath) = self.subpaths.last_mut() {
            if let Some(&first) = subpath.first() {
                subpath.push(first)
            }
        }
    }

    fn fill(&mut self, color: &str) {
        let color = parse_color(color);
        for subpath in &self.subpaths {
            for pair in subpath.windows(2).skip(1) {
                draw_triangle(v32(subpath[0]), v32(pair[0]), v32(pair[1]), color);
            }
        }
    }

    fn stroke(&mut self, color: &str, width: f64) {
        let color = parse_color(color);
        for subpath in &self.subpaths {
            for pair in subpath.windows(2) {
                let (a, b) = (v32(pair[0]), v32(pair[1]));
                draw_line(a.x, a.y, b.x, b.y, width as f32, color);
            }
        }
    }
}

/// Scatter a handful of waypoints and chain them into a route.
fn spawn_route(rng: &mut StdRng) -> (Graph, Vec<PointKey>) {
    let mut shape = Shape::new();
    for _ in 0..ROUTE_POINTS {
        shape.add_vertex(DVec2::new(
            rng.gen_range(-350.0..350.0),
            rng.gen_range(-250.0..250.0),
        ));
    }
    for index in 1..ROUTE_POINTS {
        shape.add_edge(index - 1, index);
    }

    let graph = Graph::from_shape(&shape).expect("edges chain existing vertices");
    let keys = graph.points().map(|(key, _)| key).collect();
    (graph, keys)
}

fn ship_at(center: DVec2, heading: f64, sail_angle: f64, rudder_angle: f64) -> ShipDescriptor {
    ShipDescriptor {
        center,
        hull: centered_rectangle(HULL_LENGTH, HULL_WIDTH, heading, center),
        sails: vec![strip(
            SAIL_LENGTH,
            PART_THICKNESS,
            sail_angle,
            DVec2::new(HULL_LENGTH * 0.3, 0.0),
            heading,
            center,
        )],
        rudder: strip(
            RUDDER_LENGTH,
            PART_THICKNESS,
            rudder_angle,
            DVec2::new(-HULL_LENGTH * 0.5, 0.0),
            heading,
            center,
        ),
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(7);
    let (graph, keys) = spawn_route(&mut rng);

    let mut axis = Axis::new(
        DVec2::new(350.0, 250.0),
        DVec2::new(50.0, 50.0),
        false,
        COLORSCHEME.axes,
        COLORSCHEME.steps,
    );

    let mut frame_time = RollingAverage::new();

    loop {
        clear_background(COLORSCHEME.background);
        frame_time.add(get_frame_time() as f64 * 1000.0);

        if let Some('g') = get_char_pressed() {
            axis.grid = !axis.grid;
        }

        let t = get_time();

        let mut scene = Scene::new();
        scene.add(axis.clone());

        // Drift the first waypoint to show lines following their point
        let mut graph = graph.clone();
        if let Some(point) = graph.point_mut(keys[0]) {
            point.loc += DVec2::new(f64::cos(t * 0.7), f64::sin(t * 0.7)) * 40.0;
        }
        scene.add(graph);

        // Wind blows in world coordinates, y up; the surface wants y down
        let wind = VecExt::rotate(DVec2::new(WIND_SPEED, 0.0), t * 0.1);
        for x in (-3..=3).map(|val| val as f64 * 100.0) {
            for y in (-2..=2).map(|val| val as f64 * 100.0) {
                let foot = DVec2::new(x, y);
                scene.add(Arrow::new(
                    foot,
                    foot + wind.flip_y(),
                    ARROW_WIDTH,
                    COLORSCHEME.wind,
                    ARROW_HEAD,
                ));
            }
        }

        let heading = t * 0.25;
        let center = DVec2::new(0.0, 0.0);
        let ship = ship_at(center, heading, f64::sin(t * 0.5) * 0.6, f64::sin(t) * 0.3);
        scene.add(ShipShape::new(&ship, COLORSCHEME.body, COLORSCHEME.sail).expect("valid ship"));

        let mut surface = QuadSurface::new(DVec2::new(WIDTH as f64 / 2.0, HEIGHT as f64 / 2.0));
        scene.draw(&mut surface);

        if let Some(mean) = frame_time.get() {
            draw_text(
                &format!("frame: {:.2} ms", mean),
                12.0,
                24.0,
                24.0,
                COLORSCHEME.text,
            );
        }

        next_frame().await
    }
}

const ARC_SEGMENTS: usize = 24;
const ROUTE_POINTS: usize = 6;
const HULL_LENGTH: f64 = 90.0;
const HULL_WIDTH: f64 = 27.0;
const SAIL_LENGTH: f64 = 60.0;
const RUDDER_LENGTH: f64 = 16.0;
const PART_THICKNESS: f64 = 4.5;
const WIND_SPEED: f64 = 45.0;
const ARROW_WIDTH: f64 = 2.0;
const ARROW_HEAD: f64 = 8.0;
