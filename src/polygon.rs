//! Even-odd point-in-polygon test.

use cgmath::Point2;


/// Returns `true` if `point` lies inside the polygon described by
/// `polygon` (in vertex order, implicitly closed), according to the
/// even-odd rule.
///
/// The test casts a ray and counts crossings against each polygon edge in
/// turn: an edge is considered only if `point.x` lies in the half open
/// x-interval of the edge (exclusive at the lower end, inclusive at the
/// upper), horizontal edges never count as crossings, and for all other
/// edges the exact x-intersection of the scanline decides. The point is
/// inside iff the crossing count is odd.
///
/// Points exactly on the boundary are *not* handled specially; they come
/// out as inside or outside depending on which edge the ray hits. Callers
/// that need a stricter definition must test boundary membership
/// themselves.
pub fn point_inside_polygon(polygon: &[Point2<f64>], point: Point2<f64>) -> bool {
    if polygon.is_empty() {
        return false;
    }

    let mut crossings = 0;
    let n = polygon.len();
    let mut p1 = polygon[0];

    for i in 1..=n {
        let p2 = polygon[i % n];
        if point.x > p1.x.min(p2.x)
            && point.x <= p1.x.max(p2.x)
            && point.y <= p1.y.max(p2.y)
            && p1.x != p2.x
        {
            let xinters = (point.x - p1.x) * (p2.y - p1.y) / (p2.x - p1.x) + p1.y;
            if p1.y == p2.y || point.y <= xinters {
                crossings += 1;
            }
        }
        p1 = p2;
    }

    crossings % 2 == 1
}

/// Returns `true` if *all* given points pass [`point_inside_polygon`].
pub fn points_inside_polygon<I>(polygon: &[Point2<f64>], points: I) -> bool
where
    I: IntoIterator<Item = Point2<f64>>,
{
    points.into_iter().all(|p| point_inside_polygon(polygon, p))
}
