use tui_craft::core::{CellBuffer, LineRasterizer, SimpleRng};
use tui_craft::term::{encode_cell, quantize};
use tui_craft::types::{Color3, Glyph, ScreenPoint};

const RED: Color3 = Color3::new(1.0, 0.0, 0.0);
const BLUE: Color3 = Color3::new(0.0, 0.0, 1.0);
const WHITE: Color3 = Color3::new(1.0, 1.0, 1.0);

fn sp(col: i32, row: i32, depth: f64) -> ScreenPoint {
    ScreenPoint::new(col, row, depth)
}

fn touched(buf: &CellBuffer) -> Vec<(i32, i32, Glyph)> {
    let mut out = Vec::new();
    for row in 0..buf.height() as i32 {
        for col in 0..buf.width() as i32 {
            let cell = buf.get(col, row).unwrap();
            if cell.glyph != Glyph::Blank {
                out.push((col, row, cell.glyph));
            }
        }
    }
    out
}

#[test]
fn depth_test_keeps_minimum_and_earliest_on_ties() {
    let mut rng = SimpleRng::new(2024);
    for _ in 0..50 {
        let mut buf = CellBuffer::new(3, 3, 16.0).unwrap();
        let mut best: Option<(f64, Glyph)> = None;
        for i in 0..20 {
            // Coarse depths so ties actually happen.
            let depth = 1.0 + (rng.next_u32() % 8) as f64;
            let glyph = if i % 2 == 0 { Glyph::Rising } else { Glyph::Falling };
            buf.test_and_write(1, 1, depth, WHITE, glyph);
            if best.map_or(true, |(d, _)| depth < d) {
                best = Some((depth, glyph));
            }
        }
        let (depth, glyph) = best.unwrap();
        let cell = buf.get(1, 1).unwrap();
        assert_eq!(cell.depth, depth);
        assert_eq!(cell.glyph, glyph);
        assert_eq!(cell.color, WHITE.scale(1.0 / depth));
    }
}

#[test]
fn wild_coordinates_never_touch_the_buffer() {
    let mut buf = CellBuffer::new(8, 6, 16.0).unwrap();
    let raster = LineRasterizer::with_margin(0);
    let wild = [i32::MIN, -1_000_000, -1, 8, 6, 1_000_000, i32::MAX];
    for &c in &wild {
        for &r in &wild {
            assert!(!buf.test_and_write(c, r, 1.0, RED, Glyph::Point));
            assert_eq!(raster.draw_line(&mut buf, sp(c, r, 1.0), sp(3, 3, 1.0), RED), 0);
            assert_eq!(raster.draw_line(&mut buf, sp(2, 2, 1.0), sp(c, r, 1.0), RED), 0);
        }
    }
    assert!(touched(&buf).is_empty());
}

#[test]
fn horizontal_line_touches_one_row() {
    let mut buf = CellBuffer::new(16, 12, 16.0).unwrap();
    LineRasterizer::with_margin(0).draw_line(&mut buf, sp(0, 5, 1.0), sp(10, 5, 1.0), RED);
    let expected: Vec<_> = (0..=10).map(|c| (c, 5, Glyph::Horizontal)).collect();
    assert_eq!(touched(&buf), expected);
}

#[test]
fn vertical_line_touches_one_column() {
    let mut buf = CellBuffer::new(12, 16, 16.0).unwrap();
    LineRasterizer::with_margin(0).draw_line(&mut buf, sp(5, 0, 1.0), sp(5, 10, 1.0), RED);
    let expected: Vec<_> = (0..=10).map(|r| (5, r, Glyph::Vertical)).collect();
    assert_eq!(touched(&buf), expected);
}

#[test]
fn reversed_endpoints_touch_the_same_cells() {
    let raster = LineRasterizer::with_margin(0);
    let mut a = CellBuffer::new(16, 12, 16.0).unwrap();
    let mut b = CellBuffer::new(16, 12, 16.0).unwrap();
    raster.draw_line(&mut a, sp(0, 5, 1.0), sp(10, 5, 1.0), RED);
    raster.draw_line(&mut b, sp(10, 5, 1.0), sp(0, 5, 1.0), RED);
    assert_eq!(touched(&a), touched(&b));
}

#[test]
fn single_point_writes_one_plus() {
    let mut buf = CellBuffer::new(8, 8, 16.0).unwrap();
    let visited =
        LineRasterizer::with_margin(0).draw_line(&mut buf, sp(3, 3, 2.0), sp(3, 3, 2.0), RED);
    assert_eq!(visited, 1);
    assert_eq!(touched(&buf), vec![(3, 3, Glyph::Point)]);
}

#[test]
fn quantized_indices_stay_in_cube_and_complement() {
    let mut rng = SimpleRng::new(5);
    for _ in 0..2000 {
        let c = rng.next_color();
        let q = quantize(c);
        assert!((16..=231).contains(&q.background));
        assert_eq!(q.foreground, 231 - (q.background - 16));
    }
}

#[test]
fn near_line_occludes_far_line_in_either_order() {
    let raster = LineRasterizer::new();
    let near = (sp(2, 5, 1.0), sp(12, 5, 1.0));
    let far = (sp(7, 1, 5.0), sp(7, 9, 5.0));

    let mut first = CellBuffer::new(16, 12, 16.0).unwrap();
    raster.draw_line(&mut first, near.0, near.1, RED);
    raster.draw_line(&mut first, far.0, far.1, BLUE);

    let mut second = CellBuffer::new(16, 12, 16.0).unwrap();
    raster.draw_line(&mut second, far.0, far.1, BLUE);
    raster.draw_line(&mut second, near.0, near.1, RED);

    for buf in [&first, &second] {
        let cross = buf.get(7, 5).unwrap();
        assert_eq!(cross.color, RED);
        assert_eq!(cross.glyph, Glyph::Horizontal);
        assert_eq!(buf.get(7, 4).unwrap().color, BLUE.scale(1.0 / 5.0));
    }
    assert_eq!(first, second);
}

#[test]
fn reset_then_shade_is_background_everywhere() {
    let mut buf = CellBuffer::new(12, 8, 16.0).unwrap();
    let raster = LineRasterizer::new();
    raster.draw_line(&mut buf, sp(1, 1, 1.0), sp(10, 6, 0.5), WHITE);
    raster.draw_line(&mut buf, sp(10, 1, 3.0), sp(1, 6, 3.0), RED);
    assert!(!touched(&buf).is_empty());

    buf.reset();
    for cell in buf.cells() {
        assert_eq!(&encode_cell(cell)[..], b"\x1b[48;5;016m\x1b[38;5;231m ");
    }
}

#[test]
fn very_near_geometry_saturates_instead_of_overflowing() {
    let mut buf = CellBuffer::new(8, 8, 16.0).unwrap();
    buf.test_and_write(2, 2, 0.01, WHITE, Glyph::Point);
    let rec = encode_cell(&buf.get(2, 2).unwrap());
    assert_eq!(&rec[..], b"\x1b[48;5;231m\x1b[38;5;016m+");
}
