//! Logical to physical coordinate mapping
//!
//! The panel RAM is always addressed in its native (physical) orientation.
//! Drawing code works in logical coordinates and every pixel goes through
//! [`Orientation::to_physical`] on its way into the framebuffer.

use super::framebuffer::Geometry;

/// How the logical view sits on the physical panel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Logical and physical coordinates are the same
    #[default]
    Portrait,
    /// Logical view rotated 90° against the panel, width and height swap
    Landscape,
}

impl Orientation {
    /// Map a logical pixel to the physical RAM pixel
    ///
    /// Coordinates far off the panel saturate and stay off the panel.
    pub fn to_physical(self, x: i32, y: i32, physical_height: u16) -> (i32, i32) {
        match self {
            Orientation::Portrait => (x, y),
            Orientation::Landscape => (y, (i32::from(physical_height) - 1).saturating_sub(x)),
        }
    }

    /// Inverse of [`Orientation::to_physical`]
    pub fn to_logical(self, x: i32, y: i32, physical_height: u16) -> (i32, i32) {
        match self {
            Orientation::Portrait => (x, y),
            Orientation::Landscape => ((i32::from(physical_height) - 1).saturating_sub(y), x),
        }
    }

    /// Logical (width, height) of a panel
    pub fn logical_size(self, physical: &Geometry) -> (u16, u16) {
        match self {
            Orientation::Portrait => (physical.width(), physical.height()),
            Orientation::Landscape => (physical.height(), physical.width()),
        }
    }

    /// Map the corners of a logical rectangle. The result is still axis aligned
    /// but the corners may come back in a different order.
    pub fn rect_to_physical(
        self,
        (x0, y0): (i32, i32),
        (x1, y1): (i32, i32),
        physical_height: u16,
    ) -> ((i32, i32), (i32, i32)) {
        (
            self.to_physical(x0, y0, physical_height),
            self.to_physical(x1, y1, physical_height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portrait_is_identity() {
        assert_eq!(Orientation::Portrait.to_physical(5, 7, 250), (5, 7));
        assert_eq!(Orientation::Portrait.to_logical(5, 7, 250), (5, 7));
    }

    #[test]
    fn landscape_rotates_into_the_panel() {
        let landscape = Orientation::Landscape;
        // Logical origin lands at the bottom left of the 122x250 panel
        assert_eq!(landscape.to_physical(0, 0, 250), (0, 249));
        assert_eq!(landscape.to_physical(249, 0, 250), (0, 0));
        assert_eq!(landscape.to_physical(249, 121, 250), (121, 0));
        assert_eq!(landscape.to_physical(10, 3, 250), (3, 239));
    }

    #[test]
    fn landscape_round_trip() {
        let landscape = Orientation::Landscape;
        for x in [0, 1, 100, 249] {
            for y in [0, 60, 121] {
                let (px, py) = landscape.to_physical(x, y, 250);
                assert_eq!(landscape.to_logical(px, py, 250), (x, y));
            }
        }
    }

    #[test]
    fn extreme_coordinates_stay_off_the_panel() {
        let geometry = Geometry::new(122, 250);
        let landscape = Orientation::Landscape;
        for (x, y) in [(i32::MIN, 0), (i32::MAX, 0), (0, i32::MIN), (i32::MIN, i32::MAX)] {
            let (px, py) = landscape.to_physical(x, y, 250);
            assert!(!geometry.contains(px, py), "({x}, {y}) -> ({px}, {py})");
        }
        assert_eq!(landscape.to_physical(i32::MIN, 0, 250), (0, i32::MAX));
        assert_eq!(landscape.to_logical(0, i32::MIN, 250), (i32::MAX, 0));
    }

    #[test]
    fn logical_size_swaps_in_landscape() {
        let geometry = Geometry::new(122, 250);
        assert_eq!(Orientation::Portrait.logical_size(&geometry), (122, 250));
        assert_eq!(Orientation::Landscape.logical_size(&geometry), (250, 122));
    }

    #[test]
    fn rectangles_keep_their_extent() {
        let ((ax, ay), (bx, by)) = Orientation::Landscape.rect_to_physical((10, 2), (20, 5), 250);
        assert_eq!((ax.min(bx), ax.max(bx)), (2, 5));
        assert_eq!((ay.min(by), ay.max(by)), (229, 239));
    }
}
