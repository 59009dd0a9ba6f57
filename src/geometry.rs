//! Target geometry structures

/// Defines types with set dimensions
pub trait HasDimensions {
    /// Returns the dimensions of the object
    fn dimensions(&self) -> Dimensions;

    /// Checks if the given coordinate is within the dimension bounds of the current object
    #[inline]
    fn in_bounds(&self, coord: Coordinate) -> bool {
        self.dimensions().in_bounds(coord)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    #[inline(always)]
    pub fn new(width: u32, height: u32) -> Dimensions {
        Dimensions { width, height }
    }

    /// Returns the number of pixels as `usize` by multiplying the current width and height
    #[inline]
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Checks if the given coordinate is within the dimension bounds
    #[inline]
    pub fn in_bounds(&self, coord: Coordinate) -> bool {
        coord.x < self.width && coord.y < self.height
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub x: u32,
    pub y: u32,
}

impl Coordinate {
    #[inline]
    pub fn new(x: u32, y: u32) -> Coordinate {
        Coordinate { x, y }
    }

    /// Row-major index of the coordinate within a buffer of the given dimensions
    #[inline]
    pub fn into_index(self, dim: Dimensions) -> usize {
        self.y as usize * dim.width as usize + self.x as usize
    }
}

#[cfg(test)]
mod test {
    use super::{Coordinate, Dimensions};

    #[test]
    fn test_index_is_row_major() {
        let dim = Dimensions::new(4, 3);

        assert_eq!(Coordinate::new(0, 0).into_index(dim), 0);
        assert_eq!(Coordinate::new(3, 0).into_index(dim), 3);
        assert_eq!(Coordinate::new(0, 1).into_index(dim), 4);
        assert_eq!(Coordinate::new(3, 2).into_index(dim), 11);
    }

    #[test]
    fn test_bounds() {
        let dim = Dimensions::new(4, 3);

        assert!(dim.in_bounds(Coordinate::new(3, 2)));
        assert!(!dim.in_bounds(Coordinate::new(4, 0)));
        assert!(!dim.in_bounds(Coordinate::new(0, 3)));
    }
}
