//! Perspective projection from view space onto the cell grid.

use crate::types::{Point3, ScreenPoint};

/// Maps view-space points to cell coordinates by dividing by depth.
///
/// `col = x / d * W * zoom + W`, `row = z / d * H * zoom + H`, where `d` is
/// the point's depth-axis (`y`) value and `W`/`H` are the half extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    half_width: f64,
    half_height: f64,
    zoom: f64,
}

impl Projector {
    pub fn new(half_width: f64, half_height: f64) -> Self {
        Self {
            half_width,
            half_height,
            zoom: 1.0,
        }
    }

    /// Projector centred on the interior of a `width` x `height` buffer
    /// (one border cell on each side excluded).
    pub fn for_buffer(width: u16, height: u16) -> Self {
        let half_width = (width.saturating_sub(2) / 2) as f64;
        let half_height = (height.saturating_sub(2) / 2) as f64;
        Self::new(half_width, half_height)
    }

    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    pub fn half_height(&self) -> f64 {
        self.half_height
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom;
    }

    /// Project a view-space point.
    ///
    /// Returns `None` for points at or behind the viewer (`y <= 0`) and for
    /// non-finite input; such geometry is never drawn.
    pub fn project(&self, p: Point3) -> Option<ScreenPoint> {
        let d = p.y;
        if !(d > 0.0) || !d.is_finite() {
            return None;
        }

        let col = p.x / d * self.half_width * self.zoom + self.half_width;
        let row = p.z / d * self.half_height * self.zoom + self.half_height;
        if !col.is_finite() || !row.is_finite() {
            return None;
        }

        // `as` saturates, so far off-screen points stay off-screen.
        Some(ScreenPoint::new(col.floor() as i32, row.floor() as i32, d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_axis_projects_to_centre() {
        let proj = Projector::new(39.0, 10.0);
        let p = proj.project(Point3::new(0.0, 5.0, 0.0)).unwrap();
        assert_eq!((p.col, p.row), (39, 10));
        assert_eq!(p.depth, 5.0);
    }

    #[test]
    fn divides_by_depth() {
        let proj = Projector::new(40.0, 10.0);
        let near = proj.project(Point3::new(1.0, 1.0, 1.0)).unwrap();
        let far = proj.project(Point3::new(1.0, 2.0, 1.0)).unwrap();
        assert_eq!((near.col, near.row), (80, 20));
        assert_eq!((far.col, far.row), (60, 15));
    }

    #[test]
    fn rejects_points_at_or_behind_viewer() {
        let proj = Projector::new(40.0, 10.0);
        assert!(proj.project(Point3::new(1.0, 0.0, 1.0)).is_none());
        assert!(proj.project(Point3::new(1.0, -3.0, 1.0)).is_none());
        assert!(proj.project(Point3::new(1.0, f64::NAN, 1.0)).is_none());
        assert!(proj.project(Point3::new(f64::INFINITY, 1.0, 0.0)).is_none());
    }

    #[test]
    fn for_buffer_uses_interior_halves() {
        let proj = Projector::for_buffer(80, 22);
        assert_eq!(proj.half_width(), 39.0);
        assert_eq!(proj.half_height(), 10.0);

        let tiny = Projector::for_buffer(1, 1);
        assert_eq!(tiny.half_width(), 0.0);
    }

    #[test]
    fn zoom_scales_offsets_not_centre() {
        let mut proj = Projector::new(40.0, 10.0);
        proj.set_zoom(0.5);
        let p = proj.project(Point3::new(1.0, 1.0, -1.0)).unwrap();
        assert_eq!((p.col, p.row), (60, 5));
        let c = proj.project(Point3::new(0.0, 3.0, 0.0)).unwrap();
        assert_eq!((c.col, c.row), (40, 10));
    }
}
