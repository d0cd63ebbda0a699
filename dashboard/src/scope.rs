use crate::app::Message;
use iced::{
    mouse,
    widget::canvas::{self, Frame, Geometry, Path, Stroke},
    Color, Point, Rectangle, Renderer, Theme,
};
use scopecore::projection::ScopePoint;

/// Scope disk: range rings, crosshair axes, simulated targets, and
/// injected custom targets. Input coordinates are normalized scope
/// space; screen mapping inverts y so north renders up. Points beyond
/// the disk land outside it and are clipped by the surface, never
/// rejected.
#[derive(Clone)]
pub struct RadarScope {
    targets: Vec<ScopePoint>,
    custom: Vec<ScopePoint>,
}

impl RadarScope {
    pub fn new(targets: Vec<ScopePoint>, custom: Vec<ScopePoint>) -> Self {
        Self { targets, custom }
    }

    fn place(center: Point, radius: f32, point: &ScopePoint) -> Point {
        Point::new(
            center.x + point.x as f32 * radius,
            center.y - point.y as f32 * radius,
        )
    }
}

impl canvas::Program<Message> for RadarScope {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(
            Point::ORIGIN,
            bounds.size(),
            Color::from_rgb(0.02, 0.04, 0.04),
        );

        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);
        let radius = bounds.width.min(bounds.height) / 2.0 - 12.0;

        for ring in 1..=4 {
            let ring_radius = radius * (ring as f32 / 4.0);
            let ring_path = Path::new(|builder| builder.circle(center, ring_radius));
            frame.stroke(
                &ring_path,
                Stroke::default().with_color(Color::from_rgb(0.2, 0.45, 0.4)),
            );
        }

        let axes = Path::new(|builder| {
            builder.move_to(Point::new(center.x - radius, center.y));
            builder.line_to(Point::new(center.x + radius, center.y));
            builder.move_to(Point::new(center.x, center.y - radius));
            builder.line_to(Point::new(center.x, center.y + radius));
        });
        frame.stroke(
            &axes,
            Stroke::default()
                .with_color(Color::from_rgb(0.15, 0.35, 0.32))
                .with_width(1.0),
        );

        for point in &self.targets {
            let marker =
                Path::new(|builder| builder.circle(Self::place(center, radius, point), 2.5));
            frame.fill(&marker, Color::from_rgb(0.33, 0.95, 0.85));
        }

        for point in &self.custom {
            let marker =
                Path::new(|builder| builder.circle(Self::place(center, radius, point), 4.0));
            frame.fill(&marker, Color::from_rgb(1.0, 0.48, 0.35));
        }

        vec![frame.into_geometry()]
    }
}
