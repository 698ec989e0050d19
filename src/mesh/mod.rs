//! The mesh itself: connectivity storage and the edit operations.
//!
//! A [`Dcel`] owns three arenas (vertices, half edges, faces) and is the
//! only place where connectivity is mutated. Everything else — the face
//! properties in the `face` submodule, the read-only references in
//! [`refs`][crate::refs] — only ever reads.

// # Some notes for developers about this implementation
//
// - The twin half edges are stored implicitly: twins are always pushed next
//   to one another into the arena and thus always have handle indices only
//   one apart. Since indices start at 0 and half edges are only created and
//   removed in pairs, the indices of two twins are always 2k and 2k + 1.
//   `HalfEdgeHandle::twin` relies on this.
// - A vertex's incidence list holds its *outgoing* half edges, sorted by
//   descending angle. The `angle` of a half edge is the direction from its
//   head towards its origin, so sorting descending gives clockwise order
//   around the vertex and counter clockwise boundaries for internal faces.
// - Faces are never patched in place: an edit disposes the faces whose
//   `next` cycles it breaks and discovers fresh ones. The one exception is
//   `split_edge`, which keeps both faces alive (a collinear split changes
//   no geometry) and only drops their cached boundary lists.

use std::{fmt, mem};

use cgmath::{prelude::*, Point2, Vector2};
use smallvec::SmallVec;

use crate::{
    error::Error,
    handle::{hsize, FaceHandle, Handle, HalfEdgeHandle, VertexHandle},
    map::VecMap,
    refs::{FaceRef, HalfEdgeRef, VertexRef},
};
use self::face::Face;

pub(crate) mod face;

#[cfg(test)]
mod tests;


// ===========================================================================
// ===== Definition of types stored inside the data structure
// ===========================================================================

/// A planar doubly-connected edge list.
///
/// The mesh is built from a list of points and undirected edges between
/// them. Every undirected edge is represented by a pair of directed *half
/// edges*, one per traversal direction; every closed `next` cycle of half
/// edges is a *face*. Faces with positive signed area are internal
/// (bounded), faces with non-positive area are external (the unbounded
/// outside, or degenerate figures like a bare line segment).
///
/// The mesh can be edited incrementally with [`add_edge`][Dcel::add_edge],
/// [`remove_edge`][Dcel::remove_edge] and [`split_edge`][Dcel::split_edge].
/// Each edit rewires only the neighborhood it touches and rediscovers only
/// the faces next to the edit. Face properties (area, boundary, bounding
/// box, holes) are computed lazily on first access and cached until an edit
/// invalidates them.
pub struct Dcel {
    pub(crate) vertices: VecMap<VertexHandle, Vertex>,
    pub(crate) half_edges: VecMap<HalfEdgeHandle, HalfEdge>,
    pub(crate) faces: VecMap<FaceHandle, Face>,
}

/// Data stored per vertex.
pub(crate) struct Vertex {
    pub(crate) position: Point2<f64>,

    /// The outgoing half edges, sorted by descending angle (clockwise
    /// around the vertex). Kept sorted across all edits; the `next`/`prev`
    /// linkage is derived from neighborship in this list.
    pub(crate) incidence: SmallVec<[HalfEdgeHandle; 4]>,
}

/// Data stored per half edge. The twin is implicit (see module notes).
pub(crate) struct HalfEdge {
    /// The vertex this half edge emanates from.
    pub(crate) origin: VertexHandle,

    /// Next half edge along the boundary of `face`.
    pub(crate) next: HalfEdgeHandle,

    /// Previous half edge along the boundary of `face`.
    pub(crate) prev: HalfEdgeHandle,

    /// The face this half edge bounds. Only `None` between creation of the
    /// half edge and the face discovery step of the same operation.
    pub(crate) face: Option<FaceHandle>,

    /// Polar angle (`0..2π`) of the direction from this half edge's head
    /// towards `origin`.
    pub(crate) angle: f64,

    /// Euclidean distance between the two endpoints.
    pub(crate) length: f64,
}

impl fmt::Debug for Dcel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Dcel")
            .field("vertices", &self.vertices)
            .field("half_edges", &self.half_edges)
            .field("faces", &self.faces)
            .finish()
    }
}

impl fmt::Debug for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Vertex {{ position: [{}, {}], incidence: {:?} }}",
            self.position.x, self.position.y, self.incidence,
        )
    }
}

impl fmt::Debug for HalfEdge {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "HalfEdge {{ origin: {:4} next: {:5} prev: {:5} face: {:?} }}",
            format!("{:?},", self.origin),
            format!("{:?},", self.next),
            format!("{:?},", self.prev),
            self.face,
        )
    }
}


/// Polar angle of `d` in the range `0..2π`, measured counter clockwise from
/// the positive x axis.
fn polar_angle(d: Vector2<f64>) -> f64 {
    let len = d.magnitude();
    if d.y > 0.0 {
        (d.x / len).acos()
    } else {
        2.0 * std::f64::consts::PI - (d.x / len).acos()
    }
}


// ===========================================================================
// ===== Construction and internal helper methods
// ===========================================================================

impl Dcel {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self {
            vertices: VecMap::new(),
            half_edges: VecMap::new(),
            faces: VecMap::new(),
        }
    }

    /// Creates a mesh from a list of points and a list of undirected edges,
    /// each edge given as a pair of indices into `points`.
    ///
    /// Points referenced by no edge become isolated vertices and stay in
    /// the mesh; the edit operations remove a vertex as soon as its last
    /// edge disappears.
    pub fn from_data(points: &[[f64; 2]], edges: &[[usize; 2]]) -> Self {
        let mut mesh = Self::new();
        mesh.build(points, edges);
        mesh
    }

    fn build(&mut self, points: &[[f64; 2]], edges: &[[usize; 2]]) {
        // Step 1: create all vertices.
        let vertices: Vec<VertexHandle> = points
            .iter()
            .map(|p| {
                self.vertices.push(Vertex {
                    position: Point2::new(p[0], p[1]),
                    incidence: SmallVec::new(),
                })
            })
            .collect();

        // Step 2: create the twin pair of every undirected edge and
        // register each half at its origin vertex.
        for e in edges {
            let (a, b) = (vertices[e[0]], vertices[e[1]]);
            let (ha, hb) = self.push_edge_pair(a, b);
            self.vertices[a].incidence.push(ha);
            self.vertices[b].incidence.push(hb);
        }

        // Step 3: sort every fan by angle and derive next/prev linkage
        // from fan neighborship.
        for &vh in &vertices {
            self.sort_incidence(vh);
            self.link_around_vertex(vh);
        }

        // Step 4: face discovery. Walk the cycle of every half edge that
        // does not belong to a face yet.
        let all: Vec<_> = self.half_edges.handles().collect();
        for h in all {
            if self.half_edges[h].face.is_none() {
                self.make_face(h);
            }
        }
    }

    /// Disposes all vertices, half edges and faces, resetting the mesh for
    /// reuse. Handles are assigned starting from index 0 again.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.half_edges.clear();
        self.faces.clear();
    }

    /// Pushes the two half edges of the undirected edge `(a, b)` and
    /// returns their handles, origin-at-`a` first. The twins end up next to
    /// each other in the arena, which is what makes
    /// [`HalfEdgeHandle::twin`] work.
    ///
    /// `next` and `prev` start out as dummy values; every caller overwrites
    /// them before they are read.
    fn push_edge_pair(
        &mut self,
        a: VertexHandle,
        b: VertexHandle,
    ) -> (HalfEdgeHandle, HalfEdgeHandle) {
        let pa = self.vertices[a].position;
        let pb = self.vertices[b].position;
        let length = (pa - pb).magnitude();
        let dummy = HalfEdgeHandle::new(0);

        let ha = self.half_edges.push(HalfEdge {
            origin: a,
            next: dummy,
            prev: dummy,
            face: None,
            angle: polar_angle(pa - pb),
            length,
        });
        let hb = self.half_edges.push(HalfEdge {
            origin: b,
            next: dummy,
            prev: dummy,
            face: None,
            angle: polar_angle(pb - pa),
            length,
        });
        debug_assert_eq!(ha.twin(), hb);

        (ha, hb)
    }

    /// Re-sorts the incidence list of `vh` by descending half edge angle.
    /// Must run after adding a half edge to the list and before the list is
    /// used for linkage.
    fn sort_incidence(&mut self, vh: VertexHandle) {
        let mut list = mem::take(&mut self.vertices[vh].incidence);
        let half_edges = &self.half_edges;
        list.sort_by(|&a, &b| {
            half_edges[b]
                .angle
                .partial_cmp(&half_edges[a].angle)
                .expect("half edge angle is NaN")
        });
        self.vertices[vh].incidence = list;
    }

    /// Derives the next/prev linkage at `vh` from its sorted fan: the twin
    /// of each outgoing half edge continues with the angularly next
    /// outgoing one (wrapping around).
    fn link_around_vertex(&mut self, vh: VertexHandle) {
        let list = self.vertices[vh].incidence.clone();
        for (i, &out) in list.iter().enumerate() {
            let succ = list[(i + 1) % list.len()];
            self.half_edges[out.twin()].next = succ;
            self.half_edges[succ].prev = out.twin();
        }
    }

    /// Splices the freshly added outgoing half edge `he` into the linkage
    /// at `vh`, rewiring exactly the two fan neighbors around it. The
    /// incidence list must already be sorted and contain `he`.
    fn splice_into_fan(&mut self, vh: VertexHandle, he: HalfEdgeHandle) {
        let list = &self.vertices[vh].incidence;
        let len = list.len();
        let index = list
            .iter()
            .position(|&h| h == he)
            .expect("new half edge missing from incidence list");
        let before = list[(index + len - 1) % len];
        let after = list[(index + 1) % len];

        self.half_edges[he].prev = before.twin();
        self.half_edges[before.twin()].next = he;
        self.half_edges[he.twin()].next = after;
        self.half_edges[after].prev = he.twin();
    }

    /// Removes the outgoing half edge `he` from the incidence list of `vh`
    /// and reconnects the two fan neighbors around the gap. If the list
    /// becomes empty, the vertex itself is removed; returns whether the
    /// vertex survived.
    fn detach_from_vertex(&mut self, vh: VertexHandle, he: HalfEdgeHandle) -> bool {
        let list = &mut self.vertices[vh].incidence;
        let index = list
            .iter()
            .position(|&h| h == he)
            .expect("half edge missing from its origin's incidence list");
        list.remove(index);

        if list.is_empty() {
            self.vertices.remove(vh);
            return false;
        }

        let len = list.len();
        let before = list[(index + len - 1) % len];
        let after = list[index % len];
        self.half_edges[after].prev = before.twin();
        self.half_edges[before.twin()].next = after;
        true
    }

    /// Creates a new face anchored at `start` and assigns it to every half
    /// edge of the cycle.
    fn make_face(&mut self, start: HalfEdgeHandle) -> FaceHandle {
        let fh = self.faces.push(Face::new(start));
        let limit = self.half_edges.num_elements();
        let mut steps: hsize = 0;
        let mut h = start;
        loop {
            self.half_edges[h].face = Some(fh);
            h = self.half_edges[h].next;
            if h == start {
                break;
            }
            steps += 1;
            assert!(
                steps <= limit,
                "half edge cycle starting at {:?} does not close",
                start,
            );
        }
        fh
    }

    /// Removes `fh` from the mesh and reports whether its area was
    /// non-positive (the trigger for mesh wide hole invalidation). The two
    /// sides of an edit can be bounded by one and the same face, in which
    /// case the second removal is a no-op.
    fn remove_face(&mut self, fh: FaceHandle) -> bool {
        if !self.faces.contains_handle(fh) {
            return false;
        }
        let area = self.faces[fh].area(self);
        self.faces.remove(fh);
        area <= 0.0
    }

    /// Forces the cached area of every face around `vh`. The faces an edit
    /// is about to remove lose their walkable cycle once the fans are
    /// rewired, so their areas have to be settled beforehand.
    fn warm_face_areas_around(&self, vh: VertexHandle) {
        for &h in &self.vertices[vh].incidence {
            if let Some(fh) = self.half_edges[h].face {
                self.faces[fh].area(self);
            }
        }
    }

    /// Discovers the faces reachable from the given anchor half edges. Two
    /// walks over one and the same cycle describe one face, not two; the
    /// duplicate is discarded. Returns whether any created face has
    /// non-positive area.
    fn rebuild_faces(
        &mut self,
        head1: Option<HalfEdgeHandle>,
        head2: Option<HalfEdgeHandle>,
    ) -> bool {
        let b1 = head1.map(|h| self.cycle_vertices(h));
        let b2 = head2.map(|h| self.cycle_vertices(h));
        let duplicate = match (&b1, &b2) {
            (Some(a), Some(b)) => face::same_cycle(a, b),
            _ => false,
        };

        let mut holes_dirty = false;
        if let Some(h) = head1 {
            let fh = self.make_face(h);
            holes_dirty |= self.faces[fh].area(self) <= 0.0;
        }
        if let Some(h) = head2 {
            if !duplicate {
                let fh = self.make_face(h);
                holes_dirty |= self.faces[fh].area(self) <= 0.0;
            }
        }
        holes_dirty
    }

    /// Invalidates the hole cache of every face. Hole containment depends
    /// on the relative area and shape of all external faces, so whenever an
    /// external face appears or disappears, no cached hole set can be
    /// trusted anymore.
    fn mark_holes_dirty(&mut self) {
        for face in self.faces.values_mut() {
            face.invalidate_holes();
        }
    }

    /// Iterator over the half edges of the boundary cycle starting at
    /// `start`, following `next` links.
    pub(crate) fn cycle(&self, start: HalfEdgeHandle) -> Cycle<'_> {
        Cycle {
            mesh: self,
            start,
            current: Some(start),
            steps: 0,
        }
    }

    /// The origin vertices along the cycle starting at `start`.
    fn cycle_vertices(&self, start: HalfEdgeHandle) -> Vec<VertexHandle> {
        self.cycle(start).map(|h| self.half_edges[h].origin).collect()
    }

    fn find_or_add_vertex(&mut self, x: f64, y: f64) -> (VertexHandle, bool) {
        match self.find_vertex(x, y) {
            Some(vh) => (vh, false),
            None => {
                let vh = self.vertices.push(Vertex {
                    position: Point2::new(x, y),
                    incidence: SmallVec::new(),
                });
                (vh, true)
            }
        }
    }
}


// ===========================================================================
// ===== Lookup and edit operations
// ===========================================================================

impl Dcel {
    /// Finds the vertex at exactly `(x, y)`. Coordinates are compared with
    /// exact float equality; there is no tolerance.
    pub fn find_vertex(&self, x: f64, y: f64) -> Option<VertexHandle> {
        self.vertices.handles().find(|&vh| {
            let p = self.vertices[vh].position;
            p.x == x && p.y == y
        })
    }

    /// Finds the half edge from exactly `(x1, y1)` to exactly `(x2, y2)`.
    /// The returned half edge has its origin at the first coordinate pair;
    /// its twin is the opposite traversal of the same undirected edge.
    pub fn find_half_edge(
        &self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    ) -> Option<HalfEdgeHandle> {
        self.half_edges.handles().find(|&he| {
            let tail = self.vertices[self.half_edges[he].origin].position;
            let head = self.vertices[self.half_edges[he.twin()].origin].position;
            tail.x == x1 && tail.y == y1 && head.x == x2 && head.y == y2
        })
    }

    /// Inserts the undirected edge from `(x1, y1)` to `(x2, y2)`, creating
    /// either endpoint vertex if no vertex sits at those exact coordinates
    /// yet.
    ///
    /// The insertion disposes whatever faces previously spanned the two
    /// insertion points and discovers one or two replacement faces. When
    /// the new edge merely subdivides a boundary without closing a new
    /// cycle (e.g. a dangling segment), both walks find the same cycle and
    /// only one face is kept.
    pub fn add_edge(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        let (v1, v1_created) = self.find_or_add_vertex(x1, y1);
        let (v2, v2_created) = self.find_or_add_vertex(x2, y2);

        let (h1, h2) = self.push_edge_pair(v1, v2);
        self.vertices[v1].incidence.push(h1);
        self.sort_incidence(v1);
        self.vertices[v2].incidence.push(h2);
        self.sort_incidence(v2);

        if !v1_created {
            self.warm_face_areas_around(v1);
        }
        if !v2_created {
            self.warm_face_areas_around(v2);
        }

        // Link next/prev locally. A fresh vertex has exactly this one pair,
        // which links to itself; at an existing vertex the new half edge is
        // spliced between its fan neighbors.
        if v1_created {
            self.half_edges[h1].prev = h2;
            self.half_edges[h2].next = h1;
        } else {
            self.splice_into_fan(v1, h1);
        }
        if v2_created {
            self.half_edges[h2].prev = h1;
            self.half_edges[h1].next = h2;
        } else {
            self.splice_into_fan(v2, h2);
        }

        let head1 = self.half_edges[h1].next;
        let head2 = self.half_edges[h2].next;

        let mut holes_dirty = false;
        if let Some(f) = self.half_edges[head1].face {
            holes_dirty |= self.remove_face(f);
        }
        if let Some(f) = self.half_edges[head2].face {
            holes_dirty |= self.remove_face(f);
        }

        holes_dirty |= self.rebuild_faces(Some(head1), Some(head2));

        if holes_dirty {
            self.mark_holes_dirty();
        }
    }

    /// Removes the undirected edge from `(x1, y1)` to `(x2, y2)`.
    ///
    /// Endpoint vertices that lose their last edge are removed along with
    /// it, and the face that would have restarted on that side is not
    /// created. Returns [`Error::HalfEdgeNotFound`] without touching the
    /// mesh if no half edge matches the given coordinates.
    pub fn remove_edge(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> Result<(), Error> {
        let he = self
            .find_half_edge(x1, y1, x2, y2)
            .ok_or(Error::HalfEdgeNotFound { x1, y1, x2, y2 })?;
        let twin = he.twin();

        let v1 = self.half_edges[he].origin;
        let v2 = self.half_edges[twin].origin;
        let head1 = self.half_edges[he].next;
        let head2 = self.half_edges[twin].next;

        let mut holes_dirty = false;
        if let Some(f) = self.half_edges[he].face {
            holes_dirty |= self.remove_face(f);
        }
        if let Some(f) = self.half_edges[twin].face {
            holes_dirty |= self.remove_face(f);
        }

        // `head2` restarts at v1 and `head1` at v2: dropping the last half
        // edge of a vertex kills the boundary on the opposite side.
        let use_head2 = self.detach_from_vertex(v1, he);
        let use_head1 = self.detach_from_vertex(v2, twin);

        self.half_edges.remove(he);
        self.half_edges.remove(twin);

        holes_dirty |= self.rebuild_faces(
            if use_head1 { Some(head1) } else { None },
            if use_head2 { Some(head2) } else { None },
        );

        if holes_dirty {
            self.mark_holes_dirty();
        }
        Ok(())
    }

    /// Splits the edge from `(x1, y1)` to `(x2, y2)` at the point
    /// `(sx, sy)`, which must lie strictly between the endpoints on the
    /// segment. The one undirected edge is replaced by two collinear ones
    /// sharing a new vertex.
    ///
    /// The faces on both sides keep their identity: no face is created or
    /// removed, no area changes, and only the cached boundary vertex lists
    /// of the two touched faces are invalidated. Returns
    /// [`Error::HalfEdgeNotFound`] without touching the mesh if no half
    /// edge matches the given coordinates.
    pub fn split_edge(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        sx: f64,
        sy: f64,
    ) -> Result<(), Error> {
        let he = self
            .find_half_edge(x1, y1, x2, y2)
            .ok_or(Error::HalfEdgeNotFound { x1, y1, x2, y2 })?;
        let twin = he.twin();

        let u = self.half_edges[he].origin;
        let v = self.half_edges[twin].origin;
        let he_prev = self.half_edges[he].prev;
        let he_next = self.half_edges[he].next;
        let tw_prev = self.half_edges[twin].prev;
        let tw_next = self.half_edges[twin].next;
        let f1 = self.half_edges[he].face;
        let f2 = self.half_edges[twin].face;

        let s = self.vertices.push(Vertex {
            position: Point2::new(sx, sy),
            incidence: SmallVec::new(),
        });

        // Two collinear replacement pairs: u—s and s—v.
        let (h1, h4) = self.push_edge_pair(u, s);
        let (h2, h3) = self.push_edge_pair(s, v);

        // The faces keep their identity; move an anchor off the half edge
        // it is about to lose. Both sides may be one and the same face.
        if let Some(f1) = f1 {
            if self.faces[f1].start == he {
                self.faces[f1].start = h1;
            }
            self.faces[f1].invalidate_boundary();
            self.half_edges[h1].face = Some(f1);
            self.half_edges[h2].face = Some(f1);
        }
        if let Some(f2) = f2 {
            if self.faces[f2].start == twin {
                self.faces[f2].start = h3;
            }
            self.faces[f2].invalidate_boundary();
            self.half_edges[h3].face = Some(f2);
            self.half_edges[h4].face = Some(f2);
        }

        // Chain the halves through the split vertex.
        self.half_edges[h1].next = h2;
        self.half_edges[h2].prev = h1;
        self.half_edges[h3].next = h4;
        self.half_edges[h4].prev = h3;

        // Hook the chains into the surrounding cycles. When the split edge
        // was dangling, its prev/next pointed back at its own twin, and the
        // replacement has to wrap onto the other new pair instead.
        let p1 = if he_prev != twin { he_prev } else { h4 };
        self.half_edges[h1].prev = p1;
        self.half_edges[p1].next = h1;

        let n2 = if he_next != twin { he_next } else { h3 };
        self.half_edges[h2].next = n2;
        self.half_edges[n2].prev = h2;

        let p3 = if tw_prev != he { tw_prev } else { h2 };
        self.half_edges[h3].prev = p3;
        self.half_edges[p3].next = h3;

        let n4 = if tw_next != he { tw_next } else { h1 };
        self.half_edges[h4].next = n4;
        self.half_edges[n4].prev = h4;

        // Incidence lists: the replacements take the exact list position of
        // the half edges they replace (same angle, since the split point is
        // on the segment), so no re-sort happens at the old endpoints.
        self.vertices[s].incidence.push(h2);
        self.vertices[s].incidence.push(h4);
        self.sort_incidence(s);

        let index = self.vertices[u]
            .incidence
            .iter()
            .position(|&h| h == he)
            .expect("half edge missing from its origin's incidence list");
        self.vertices[u].incidence[index] = h1;

        let index = self.vertices[v]
            .incidence
            .iter()
            .position(|&h| h == twin)
            .expect("half edge missing from its origin's incidence list");
        self.vertices[v].incidence[index] = h3;

        self.half_edges.remove(he);
        self.half_edges.remove(twin);

        Ok(())
    }
}


// ===========================================================================
// ===== Read-only queries
// ===========================================================================

impl Dcel {
    pub fn num_vertices(&self) -> hsize {
        self.vertices.num_elements()
    }

    pub fn num_half_edges(&self) -> hsize {
        self.half_edges.num_elements()
    }

    pub fn num_faces(&self) -> hsize {
        self.faces.num_elements()
    }

    /// Returns a reference to the vertex `vh` refers to. Panics if the
    /// vertex does not exist in this mesh.
    pub fn get_vertex(&self, vh: VertexHandle) -> VertexRef<'_> {
        assert!(
            self.vertices.contains_handle(vh),
            "{:?} does not exist in this mesh",
            vh,
        );
        VertexRef::new(self, vh)
    }

    /// Returns a reference to the half edge `he` refers to. Panics if the
    /// half edge does not exist in this mesh.
    pub fn get_half_edge(&self, he: HalfEdgeHandle) -> HalfEdgeRef<'_> {
        assert!(
            self.half_edges.contains_handle(he),
            "{:?} does not exist in this mesh",
            he,
        );
        HalfEdgeRef::new(self, he)
    }

    /// Returns a reference to the face `fh` refers to. Panics if the face
    /// does not exist in this mesh.
    pub fn get_face(&self, fh: FaceHandle) -> FaceRef<'_> {
        assert!(
            self.faces.contains_handle(fh),
            "{:?} does not exist in this mesh",
            fh,
        );
        FaceRef::new(self, fh)
    }

    /// Iterator over all vertices.
    pub fn vertices(&self) -> impl Iterator<Item = VertexRef<'_>> {
        self.vertices.handles().map(move |vh| VertexRef::new(self, vh))
    }

    /// Iterator over all half edges.
    pub fn half_edges(&self) -> impl Iterator<Item = HalfEdgeRef<'_>> {
        self.half_edges.handles().map(move |he| HalfEdgeRef::new(self, he))
    }

    /// Iterator over all faces.
    pub fn faces(&self) -> impl Iterator<Item = FaceRef<'_>> {
        self.faces.handles().map(move |fh| FaceRef::new(self, fh))
    }

    /// Iterator over all internal faces (positive area).
    pub fn internal_faces(&self) -> impl Iterator<Item = FaceRef<'_>> {
        self.faces().filter(|f| f.is_internal())
    }

    /// Iterator over all external faces (non-positive area).
    pub fn external_faces(&self) -> impl Iterator<Item = FaceRef<'_>> {
        self.faces().filter(|f| f.is_external())
    }
}

impl Default for Dcel {
    fn default() -> Self {
        Self::new()
    }
}


/// Iterator over the half edges of one boundary cycle. Panics if the cycle
/// does not close within the mesh's half edge count, since that means the
/// connectivity is corrupted.
pub(crate) struct Cycle<'a> {
    mesh: &'a Dcel,
    start: HalfEdgeHandle,
    current: Option<HalfEdgeHandle>,
    steps: hsize,
}

impl Iterator for Cycle<'_> {
    type Item = HalfEdgeHandle;

    fn next(&mut self) -> Option<Self::Item> {
        let out = self.current?;
        self.steps += 1;
        assert!(
            self.steps <= self.mesh.half_edges.num_elements(),
            "half edge cycle starting at {:?} does not close",
            self.start,
        );

        let next = self.mesh.half_edges[out].next;
        self.current = if next == self.start { None } else { Some(next) };
        Some(out)
    }
}
