use gridpath_core::Point;

/// Manhattan (L1) distance between two points.
///
/// Admissible and consistent as an A* heuristic on a uniform-cost
/// 4-directional grid.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_basics() {
        assert_eq!(manhattan(Point::new(0, 0), Point::new(4, 4)), 8);
        assert_eq!(manhattan(Point::new(2, 5), Point::new(2, 5)), 0);
        assert_eq!(manhattan(Point::new(-1, 0), Point::new(1, -3)), 5);
        // Symmetric.
        let a = Point::new(3, 1);
        let b = Point::new(0, 7);
        assert_eq!(manhattan(a, b), manhattan(b, a));
    }
}
