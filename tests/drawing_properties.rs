//! Framebuffer and orientation properties

use proptest::prelude::*;

use weact_epaper::epaper::framebuffer::{Framebuffer, Geometry};
use weact_epaper::{Color, Orientation};

const WIDTH: i32 = 122;
const HEIGHT: i32 = 250;

fn weact() -> Framebuffer {
    Framebuffer::try_new(Geometry::new(WIDTH as u16, HEIGHT as u16)).unwrap()
}

fn color() -> impl Strategy<Value = Color> {
    prop_oneof![Just(Color::Black), Just(Color::White)]
}

proptest! {
    #[test]
    fn pixel_reads_back_what_was_written(x in 0..WIDTH, y in 0..HEIGHT, c in color()) {
        let mut fb = weact();
        fb.set_pixel(x, y, c);
        prop_assert_eq!(fb.pixel(x, y), Some(c));
        fb.set_pixel(x, y, c.inverse());
        prop_assert_eq!(fb.pixel(x, y), Some(c.inverse()));
    }

    #[test]
    fn only_the_addressed_bit_changes(x in 0..WIDTH, y in 0..HEIGHT) {
        let mut fb = weact();
        fb.set_pixel(x, y, Color::Black);
        let changed: Vec<usize> = fb
            .as_bytes()
            .iter()
            .enumerate()
            .filter(|(_, b)| **b != 0xFF)
            .map(|(i, _)| i)
            .collect();
        prop_assert_eq!(changed, vec![changed_index(x, y)]);
        prop_assert_eq!(fb.as_bytes()[changed_index(x, y)].count_zeros(), 1);
    }

    #[test]
    fn out_of_range_pixels_are_ignored(
        x in prop_oneof![-1000..0i32, WIDTH..1000],
        y in -1000..1000i32,
        c in color(),
    ) {
        let mut fb = weact();
        fb.draw_rectangle(5, 5, 40, 40, true);
        let before = fb.as_bytes().to_vec();
        fb.set_pixel(x, y, c);
        fb.set_pixel(y.rem_euclid(WIDTH), HEIGHT + x.abs(), c);
        prop_assert_eq!(fb.as_bytes(), &before[..]);
    }

    #[test]
    fn clear_always_yields_white(
        pixels in prop::collection::vec((0..WIDTH, 0..HEIGHT), 0..64),
    ) {
        let mut fb = weact();
        for (x, y) in pixels {
            fb.set_pixel(x, y, Color::Black);
        }
        fb.clear();
        prop_assert!(fb.as_bytes().iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn filled_rectangle_covers_exactly_its_extent(
        x0 in -10..WIDTH + 10, y0 in -10..HEIGHT + 10,
        x1 in -10..WIDTH + 10, y1 in -10..HEIGHT + 10,
    ) {
        let mut fb = weact();
        fb.draw_rectangle(x0, y0, x1, y1, true);
        let (left, right) = (x0.min(x1), x0.max(x1));
        let (top, bottom) = (y0.min(y1), y0.max(y1));
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                let inside = (left..=right).contains(&x) && (top..=bottom).contains(&y);
                let expected = if inside { Color::Black } else { Color::White };
                prop_assert_eq!(fb.pixel(x, y), Some(expected));
            }
        }
    }

    #[test]
    fn outline_touches_only_the_border(
        x0 in 0..WIDTH, y0 in 0..HEIGHT, x1 in 0..WIDTH, y1 in 0..HEIGHT,
    ) {
        let mut fb = weact();
        fb.draw_rectangle(x0, y0, x1, y1, false);
        let (left, right) = (x0.min(x1), x0.max(x1));
        let (top, bottom) = (y0.min(y1), y0.max(y1));
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                let inside = (left..=right).contains(&x) && (top..=bottom).contains(&y);
                let border = x == left || x == right || y == top || y == bottom;
                let expected = if inside && border { Color::Black } else { Color::White };
                prop_assert_eq!(fb.pixel(x, y), Some(expected));
            }
        }
    }

    #[test]
    fn landscape_round_trip(x in 0..HEIGHT, y in 0..WIDTH) {
        let landscape = Orientation::Landscape;
        let (px, py) = landscape.to_physical(x, y, HEIGHT as u16);
        prop_assert!((0..WIDTH).contains(&px));
        prop_assert!((0..HEIGHT).contains(&py));
        prop_assert_eq!(landscape.to_logical(px, py, HEIGHT as u16), (x, y));
    }
}

fn changed_index(x: i32, y: i32) -> usize {
    y as usize * 16 + x as usize / 8
}
