//! Scene sources: the per-frame segment generators fed to the frame driver.

use crate::rng::SimpleRng;
use crate::types::{Point3, Segment};

/// Produces the world-space segments for one frame.
pub trait Scene {
    /// Emit every segment of the current frame, then advance any animation.
    fn segments(&mut self, emit: &mut dyn FnMut(Segment));
}

/// A fixed list of segments, emitted unchanged every frame.
impl Scene for Vec<Segment> {
    fn segments(&mut self, emit: &mut dyn FnMut(Segment)) {
        for seg in self.iter() {
            emit(*seg);
        }
    }
}

/// Animation frames per unit of forward motion.
pub const TUNNEL_PHASES: u32 = 10;

/// A corridor of unit squares receding into the distance.
///
/// Square `k` sits at depth `k + phase` for `k = 1..max_render`, where the
/// phase runs from 1.0 down to 0.1 and wraps, so the corridor appears to
/// scroll toward the viewer. Each square gets a fresh random color every
/// frame.
#[derive(Debug, Clone)]
pub struct TunnelScene {
    max_render: f64,
    tick: u32,
    rng: SimpleRng,
}

impl TunnelScene {
    pub fn new(max_render: f64, seed: u32) -> Self {
        Self {
            max_render,
            tick: 0,
            rng: SimpleRng::new(seed),
        }
    }

    /// Depth offset applied to every square this frame, in `(0, 1]`.
    pub fn phase(&self) -> f64 {
        (TUNNEL_PHASES - self.tick) as f64 / TUNNEL_PHASES as f64
    }

    /// Number of squares emitted per frame.
    pub fn square_count(&self) -> usize {
        let phase = self.phase();
        let mut n = 0;
        let mut depth = 1.0 + phase;
        while depth < self.max_render + phase {
            n += 1;
            depth += 1.0;
        }
        n
    }
}

impl Scene for TunnelScene {
    fn segments(&mut self, emit: &mut dyn FnMut(Segment)) {
        let phase = self.phase();
        let mut depth = 1.0 + phase;

        while depth < self.max_render + phase {
            let a = Point3::new(-1.0, depth, -1.0);
            let b = Point3::new(-1.0, depth, 1.0);
            let c = Point3::new(1.0, depth, -1.0);
            let d = Point3::new(1.0, depth, 1.0);
            let color = self.rng.next_color();

            emit(Segment::new(a, b, color));
            emit(Segment::new(b, d, color));
            emit(Segment::new(d, c, color));
            emit(Segment::new(c, a, color));

            depth += 1.0;
        }

        self.tick = (self.tick + 1) % TUNNEL_PHASES;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(scene: &mut impl Scene) -> Vec<Segment> {
        let mut out = Vec::new();
        scene.segments(&mut |s| out.push(s));
        out
    }

    #[test]
    fn tunnel_emits_four_segments_per_square() {
        let mut scene = TunnelScene::new(16.0, 1);
        let n = scene.square_count();
        assert_eq!(n, 15);
        let segs = collect(&mut scene);
        assert_eq!(segs.len(), 4 * n);

        // Each square is closed and shares one color.
        for quad in segs.chunks(4) {
            assert!(quad.iter().all(|s| s.color == quad[0].color));
            assert_eq!(quad[3].end, quad[0].start);
            assert!(quad.iter().all(|s| s.start.y == quad[0].start.y));
        }
    }

    #[test]
    fn tunnel_phase_cycles_toward_viewer() {
        let mut scene = TunnelScene::new(4.0, 1);
        let mut nearest = Vec::new();
        for _ in 0..TUNNEL_PHASES + 1 {
            nearest.push(collect(&mut scene)[0].start.y);
        }
        assert_eq!(nearest[0], 2.0);
        for w in nearest[..TUNNEL_PHASES as usize].windows(2) {
            assert!(w[1] < w[0]);
        }
        assert_eq!(nearest[TUNNEL_PHASES as usize], 2.0);
    }

    #[test]
    fn tunnel_is_deterministic_per_seed() {
        let mut a = TunnelScene::new(8.0, 42);
        let mut b = TunnelScene::new(8.0, 42);
        assert_eq!(collect(&mut a), collect(&mut b));
    }

    #[test]
    fn static_scene_repeats() {
        let seg = Segment::new(
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            crate::types::Color3::new(1.0, 1.0, 1.0),
        );
        let mut scene = vec![seg, seg];
        assert_eq!(collect(&mut scene), vec![seg, seg]);
        assert_eq!(collect(&mut scene), vec![seg, seg]);
    }
}
