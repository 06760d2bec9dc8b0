use glam::DVec2;
use smallvec::SmallVec;

use crate::{util::VecExt, Drawable, Polygon, ShipError, Style, Surface};

/// Raw point-list outline for one part of a vehicle model.
pub type PrePolygon = Vec<DVec2>;

type Sails = SmallVec<[Polygon; 2]>;

/// Plain-data description of a ship: part outlines in surface coordinates.
///
/// Consumed from the host; the outlines are usually produced by
/// [`centered_rectangle`] and [`strip`] from the vehicle's dimensions and
/// pose.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipDescriptor {
    pub center: DVec2,
    pub hull: PrePolygon,
    pub sails: Vec<PrePolygon>,
    pub rudder: PrePolygon,
}

/// A drawable multi-part ship model.
///
/// Owns one polygon per part. Draw order is fixed bottom to top: rudder,
/// hull, then every sail, so the upper parts occlude the lower ones.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipShape {
    center: DVec2,
    hull: Polygon,
    sails: Sails,
    rudder: Polygon,
}

impl ShipShape {
    /// Builds the model from part outlines and two colors: hull and rudder in
    /// `body_color`, sails in `sail_color`.
    ///
    /// Every outline must have at least three points.
    pub fn new(
        descriptor: &ShipDescriptor,
        body_color: &str,
        sail_color: &str,
    ) -> Result<Self, ShipError> {
        let hull = part("hull", &descriptor.hull, body_color)?;
        let rudder = part("rudder", &descriptor.rudder, body_color)?;
        let sails = descriptor
            .sails
            .iter()
            .map(|outline| part("sail", outline, sail_color))
            .collect::<Result<_, _>>()?;

        Ok(Self {
            center: descriptor.center,
            hull,
            sails,
            rudder,
        })
    }

    /// Get the ship's center.
    pub fn center(&self) -> DVec2 {
        self.center
    }

    pub fn hull(&self) -> &Polygon {
        &self.hull
    }

    pub fn sails(&self) -> &[Polygon] {
        &self.sails
    }

    pub fn rudder(&self) -> &Polygon {
        &self.rudder
    }
}

fn part(name: &'static str, outline: &[DVec2], color: &str) -> Result<Polygon, ShipError> {
    if outline.len() < 3 {
        return Err(ShipError::DegeneratePart {
            part: name,
            points: outline.len(),
        });
    }

    Ok(Polygon::new(
        outline.to_vec(),
        Style::fill_and_stroke(color, color),
    ))
}

impl Drawable for ShipShape {
    fn draw(&self, surface: &mut dyn Surface) {
        self.rudder.draw(surface);
        self.hull.draw(surface);
        for sail in &self.sails {
            sail.draw(surface);
        }
    }
}

fn transform(p: DVec2, angle: f64, location: DVec2) -> DVec2 {
    VecExt::rotate(p, angle) + location
}

/// A rectangle outline centered on (0, 0), posed by `heading` and `location`.
pub fn centered_rectangle(length: f64, width: f64, heading: f64, location: DVec2) -> PrePolygon {
    let half_length = length * 0.5;
    let half_width = width * 0.5;

    [
        DVec2::new(-half_length, half_width),
        DVec2::new(half_length, half_width),
        DVec2::new(half_length, -half_width),
        DVec2::new(-half_length, -half_width),
    ]
    .iter()
    .map(|&p| transform(p, heading, location))
    .collect()
}

/// A thin strip from (0, 0) to (-length, 0), rotated by `angle` around its
/// mount `offset`, then posed by `heading` and `location`.
///
/// Models the parts that pivot on the hull: sails around their mast, the
/// rudder around the stern.
pub fn strip(
    length: f64,
    thickness: f64,
    angle: f64,
    offset: DVec2,
    heading: f64,
    location: DVec2,
) -> PrePolygon {
    let half_thickness = thickness * 0.5;

    [
        DVec2::new(0.0, half_thickness),
        DVec2::new(-length, half_thickness),
        DVec2::new(-length, -half_thickness),
        DVec2::new(0.0, -half_thickness),
    ]
    .iter()
    .map(|&p| transform(transform(p, angle, offset), heading, location))
    .collect()
}
