//! Faces and their lazily computed properties.
//!
//! A face stores nothing but one anchor half edge; everything else (area,
//! boundary list, bounding box, hole set) is derived from the half edge
//! graph on first access and cached. Each cache is an explicit
//! clean-or-dirty cell: `OnceCell` full means clean, empty means dirty.
//! Only the mesh's edit operations invalidate, since only they know which
//! faces an edit touched.

use std::cell::OnceCell;
use std::fmt;

use cgmath::Point2;

use crate::{
    aabb::Aabb,
    handle::{FaceHandle, HalfEdgeHandle, VertexHandle},
    polygon::points_inside_polygon,
};
use super::Dcel;


/// Data stored per face.
pub(crate) struct Face {
    /// One half edge on the boundary cycle. Following `next` from here
    /// until it comes back around visits the whole boundary.
    pub(crate) start: HalfEdgeHandle,

    area: OnceCell<f64>,
    boundary: OnceCell<Vec<VertexHandle>>,
    aabb: OnceCell<Aabb>,
    holes: OnceCell<Vec<FaceHandle>>,
}

impl Face {
    pub(crate) fn new(start: HalfEdgeHandle) -> Self {
        Self {
            start,
            area: OnceCell::new(),
            boundary: OnceCell::new(),
            aabb: OnceCell::new(),
            holes: OnceCell::new(),
        }
    }

    /// Signed area of the boundary cycle (shoelace formula): positive for
    /// counter clockwise boundaries.
    pub(crate) fn area(&self, mesh: &Dcel) -> f64 {
        *self.area.get_or_init(|| {
            let mut sum = 0.0;
            for h in mesh.cycle(self.start) {
                let next = mesh.half_edges[h].next;
                let p1 = mesh.vertices[mesh.half_edges[h].origin].position;
                let p2 = mesh.vertices[mesh.half_edges[next].origin].position;
                sum += p1.x * p2.y - p2.x * p1.y;
            }
            sum / 2.0
        })
    }

    /// An internal face encloses a bounded region (positive area).
    pub(crate) fn is_internal(&self, mesh: &Dcel) -> bool {
        self.area(mesh) > 0.0
    }

    /// External faces have non-positive area: the unbounded outside, and
    /// degenerate figures like a bare polyline which enclose nothing.
    pub(crate) fn is_external(&self, mesh: &Dcel) -> bool {
        self.area(mesh) <= 0.0
    }

    /// The vertices along the boundary cycle, in traversal order, starting
    /// at the anchor's origin.
    pub(crate) fn boundary<'m>(&'m self, mesh: &'m Dcel) -> &'m [VertexHandle] {
        self.boundary.get_or_init(|| {
            mesh.cycle(self.start)
                .map(|h| mesh.half_edges[h].origin)
                .collect()
        })
    }

    /// The positions of the boundary vertices, in traversal order.
    pub(crate) fn boundary_positions<'m>(
        &'m self,
        mesh: &'m Dcel,
    ) -> impl Iterator<Item = Point2<f64>> + 'm {
        self.boundary(mesh).iter().map(move |&vh| mesh.vertices[vh].position)
    }

    /// Bounding box of the boundary vertices.
    pub(crate) fn aabb<'m>(&'m self, mesh: &'m Dcel) -> &'m Aabb {
        self.aabb
            .get_or_init(|| Aabb::around(self.boundary_positions(mesh)))
    }

    /// The holes of this face. Only internal faces have holes; a hole is
    /// every external face that is strictly smaller in absolute area and
    /// whose boundary vertices all lie within this face's bounding box and,
    /// by the even-odd rule, within its boundary polygon.
    ///
    /// Recomputing this iterates every other face and runs the polygon test
    /// per candidate boundary vertex, which is fine because it only happens
    /// after an edit changed some external face.
    pub(crate) fn holes<'m>(&'m self, mesh: &'m Dcel) -> &'m [FaceHandle] {
        self.holes.get_or_init(|| {
            let mut out = Vec::new();
            if !self.is_internal(mesh) {
                return out;
            }

            let area = self.area(mesh);
            let polygon: Vec<Point2<f64>> = self.boundary_positions(mesh).collect();

            for fh in mesh.faces.handles() {
                let candidate = &mesh.faces[fh];
                // internal candidates never qualify, which also rules out
                // this face itself
                if !candidate.is_external(mesh) {
                    continue;
                }
                if candidate.area(mesh).abs() >= area {
                    continue;
                }
                // cheap box test first, exact even-odd test second
                if !self.aabb(mesh).contains_all(candidate.boundary_positions(mesh)) {
                    continue;
                }
                if points_inside_polygon(&polygon, candidate.boundary_positions(mesh)) {
                    out.push(fh);
                }
            }
            out
        })
    }

    /// Area minus the enclosed area of all holes. Hole areas are
    /// non-positive, so this is a plain sum.
    pub(crate) fn area_except_holes(&self, mesh: &Dcel) -> f64 {
        let mut area = self.area(mesh);
        for &fh in self.holes(mesh) {
            area += mesh.faces[fh].area(mesh);
        }
        area
    }

    /// Drops the cached boundary vertex list. Used after an edge split: the
    /// boundary gains a collinear vertex, but area, bounding box and hole
    /// set are unaffected.
    pub(crate) fn invalidate_boundary(&mut self) {
        self.boundary.take();
    }

    /// Drops the cached hole set.
    pub(crate) fn invalidate_holes(&mut self) {
        self.holes.take();
    }
}

impl fmt::Debug for Face {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Face {{ start: {:?} }}", self.start)
    }
}


/// Cyclic rotation equality: `true` iff both sequences have the same length
/// and `b` is `a` rotated by some offset (same order, any starting point).
pub(crate) fn same_cycle(a: &[VertexHandle], b: &[VertexHandle]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    if a.is_empty() {
        return true;
    }

    // a vertex can appear more than once on a boundary (pinch points), so
    // every occurrence of the start vertex is a rotation candidate
    (0..b.len())
        .filter(|&off| b[off] == a[0])
        .any(|off| (0..a.len()).all(|i| a[i] == b[(off + i) % b.len()]))
}
