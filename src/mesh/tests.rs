use super::*;


/// Checks the structural invariants that have to hold after construction
/// and after every edit:
/// - twins exist and pair up,
/// - `next`/`prev` are inverses,
/// - every half edge belongs to exactly one live face and every boundary
///   walk closes,
/// - every incidence list is sorted by descending angle and only contains
///   half edges emanating from its vertex.
fn check_invariants(mesh: &Dcel) {
    for he in mesh.half_edges.handles() {
        assert!(
            mesh.half_edges.contains_handle(he.twin()),
            "{:?} has no twin", he,
        );
        assert_eq!(he.twin().twin(), he);

        let next = mesh.half_edges[he].next;
        let prev = mesh.half_edges[he].prev;
        assert_eq!(mesh.half_edges[next].prev, he, "next/prev broken at {:?}", he);
        assert_eq!(mesh.half_edges[prev].next, he, "prev/next broken at {:?}", he);

        let fh = mesh.half_edges[he].face.expect("half edge without face");
        assert!(mesh.faces.contains_handle(fh), "{:?} points at dead {:?}", he, fh);

        // the cycle iterator itself asserts that the walk closes in time
        let len = mesh.cycle(he).count();
        assert!(len <= mesh.half_edges.num_elements() as usize);

        let origin = mesh.half_edges[he].origin;
        assert!(
            mesh.vertices[origin].incidence.contains(&he),
            "{:?} missing from the incidence list of its origin", he,
        );
    }

    for vh in mesh.vertices.handles() {
        let list = &mesh.vertices[vh].incidence;
        for w in list.windows(2) {
            assert!(
                mesh.half_edges[w[0]].angle >= mesh.half_edges[w[1]].angle,
                "incidence list of {:?} is not sorted", vh,
            );
        }
        for &he in list {
            assert_eq!(mesh.half_edges[he].origin, vh);
        }
    }

    for fh in mesh.faces.handles() {
        for he in mesh.cycle(mesh.faces[fh].start) {
            assert_eq!(mesh.half_edges[he].face, Some(fh));
        }
    }
}

fn total_signed_area(mesh: &Dcel) -> f64 {
    mesh.faces().map(|f| f.area()).sum()
}

fn total_internal_area(mesh: &Dcel) -> f64 {
    mesh.internal_faces().map(|f| f.area()).sum()
}

fn total_holes(mesh: &Dcel) -> usize {
    mesh.internal_faces().map(|f| f.num_holes()).sum()
}

/// The six points and seven edges of a 2×2 square with a vertical bisector.
fn square_with_bisector() -> Dcel {
    Dcel::from_data(
        &[
            [-1.0, 1.0], [0.0, 1.0], [1.0, 1.0],
            [-1.0, -1.0], [0.0, -1.0], [1.0, -1.0],
        ],
        &[[0, 1], [1, 2], [2, 5], [5, 4], [4, 3], [3, 0], [1, 4]],
    )
}

/// A 4×4 square with a concentric 2×2 square and no connection between
/// them. The extra edge `[0, 4]` of [`nested_squares_connected`] is what
/// joins them.
fn nested_squares() -> Dcel {
    Dcel::from_data(&nested_points(), &nested_edges())
}

fn nested_squares_connected() -> Dcel {
    let mut edges = nested_edges().to_vec();
    edges.push([0, 4]);
    Dcel::from_data(&nested_points(), &edges)
}

fn nested_points() -> [[f64; 2]; 8] {
    [
        [-2.0, 2.0], [2.0, 2.0], [-2.0, -2.0], [2.0, -2.0],
        [-1.0, 1.0], [1.0, 1.0], [-1.0, -1.0], [1.0, -1.0],
    ]
}

fn nested_edges() -> [[usize; 2]; 8] {
    [
        [0, 1], [1, 3], [3, 2], [2, 0],
        [4, 5], [5, 7], [7, 6], [6, 4],
    ]
}


// ===========================================================================
// ===== Incremental construction
// ===========================================================================

#[test]
fn single_edge_gives_one_degenerate_face() {
    let mut mesh = Dcel::new();
    mesh.add_edge(-1.0, 0.0, 1.0, 0.0);

    assert_eq!(mesh.num_vertices(), 2);
    assert_eq!(mesh.num_half_edges(), 2);
    assert_eq!(mesh.num_faces(), 1);

    let face = mesh.faces().next().unwrap();
    assert_eq!(face.area(), 0.0);
    assert!(face.is_external());
    assert_eq!(face.boundary_vertices().len(), 2);
    check_invariants(&mesh);
}

#[test]
fn dangling_edge_keeps_one_face() {
    let mut mesh = Dcel::new();
    mesh.add_edge(-1.0, 0.0, 1.0, 0.0);
    mesh.add_edge(1.0, 1.0, 1.0, 0.0);

    assert_eq!(mesh.num_vertices(), 3);
    assert_eq!(mesh.num_half_edges(), 4);
    assert_eq!(mesh.num_faces(), 1);

    // the single face walks both sides of the polyline
    let face = mesh.faces().next().unwrap();
    assert_eq!(face.area(), 0.0);
    assert_eq!(face.boundary_vertices().len(), 4);
    check_invariants(&mesh);
}

#[test]
fn closing_triangle_gives_two_faces() {
    let mut mesh = Dcel::new();
    mesh.add_edge(-1.0, 0.0, 1.0, 0.0);
    mesh.add_edge(1.0, 1.0, 1.0, 0.0);
    mesh.add_edge(1.0, 1.0, -1.0, 0.0);

    assert_eq!(mesh.num_faces(), 2);
    assert_eq!(mesh.internal_faces().count(), 1);
    assert_eq!(mesh.external_faces().count(), 1);
    assert_eq!(mesh.internal_faces().next().unwrap().area(), 1.0);
    assert_eq!(mesh.external_faces().next().unwrap().area(), -1.0);
    check_invariants(&mesh);
}

#[test]
fn adding_an_edge_between_existing_vertices_bisects_the_face() {
    let mut mesh = Dcel::from_data(
        &[[-1.0, 1.0], [1.0, 1.0], [1.0, -1.0], [-1.0, -1.0]],
        &[[0, 1], [1, 2], [2, 3], [3, 0]],
    );
    assert_eq!(mesh.internal_faces().count(), 1);
    assert_eq!(mesh.internal_faces().next().unwrap().area(), 4.0);

    // a diagonal: the square face splits into two triangles
    mesh.add_edge(-1.0, 1.0, 1.0, -1.0);
    assert_eq!(mesh.internal_faces().count(), 2);
    for face in mesh.internal_faces() {
        assert_eq!(face.area(), 2.0);
    }
    assert_eq!(mesh.external_faces().count(), 1);
    check_invariants(&mesh);
}


// ===========================================================================
// ===== Bulk construction
// ===========================================================================

#[test]
fn bulk_construction_matches_incremental() {
    let mesh = square_with_bisector();
    assert_eq!(mesh.num_vertices(), 6);
    assert_eq!(mesh.num_half_edges(), 14);
    assert_eq!(mesh.num_faces(), 3);
    assert_eq!(mesh.internal_faces().count(), 2);
    for face in mesh.internal_faces() {
        assert_eq!(face.area(), 2.0);
    }
    assert_eq!(mesh.external_faces().next().unwrap().area(), -4.0);
    check_invariants(&mesh);
}

#[test]
fn rebuilding_from_the_same_data_is_identical() {
    let a = square_with_bisector();
    let b = square_with_bisector();

    assert_eq!(a.num_faces(), b.num_faces());
    assert_eq!(
        a.internal_faces().count(),
        b.internal_faces().count(),
    );
    assert_eq!(total_signed_area(&a), total_signed_area(&b));

    // handles are deterministic per mesh
    let handles_a: Vec<_> = a.faces().map(|f| f.handle()).collect();
    let handles_b: Vec<_> = b.faces().map(|f| f.handle()).collect();
    assert_eq!(handles_a, handles_b);
}

#[test]
fn isolated_input_points_are_kept() {
    let mesh = Dcel::from_data(
        &[[0.0, 0.0], [1.0, 0.0], [5.0, 5.0]],
        &[[0, 1]],
    );
    assert_eq!(mesh.num_vertices(), 3);
    let lonely = mesh.find_vertex(5.0, 5.0).unwrap();
    assert_eq!(mesh.get_vertex(lonely).degree(), 0);
    check_invariants(&mesh);
}

#[test]
fn clear_resets_the_mesh() {
    let mut mesh = square_with_bisector();
    mesh.clear();
    assert_eq!(mesh.num_vertices(), 0);
    assert_eq!(mesh.num_half_edges(), 0);
    assert_eq!(mesh.num_faces(), 0);

    // ids restart at zero
    mesh.add_edge(0.0, 0.0, 1.0, 0.0);
    assert_eq!(mesh.find_vertex(0.0, 0.0), Some(VertexHandle::new(0)));
    check_invariants(&mesh);
}


// ===========================================================================
// ===== Lookup
// ===========================================================================

#[test]
fn lookup_uses_exact_equality() {
    let mesh = square_with_bisector();
    assert!(mesh.find_vertex(0.0, 1.0).is_some());
    assert!(mesh.find_vertex(0.0, 1.0000001).is_none());

    let he = mesh.find_half_edge(0.0, 1.0, 0.0, -1.0).unwrap();
    assert_eq!(mesh.get_half_edge(he).origin().position(), Point2::new(0.0, 1.0));
    assert_eq!(mesh.get_half_edge(he).target().position(), Point2::new(0.0, -1.0));
    assert_eq!(mesh.find_half_edge(0.0, -1.0, 0.0, 1.0), Some(he.twin()));
    assert_eq!(mesh.find_half_edge(0.0, 1.0, 2.0, 2.0), None);
}

#[test]
fn half_edge_angles_and_lengths() {
    let mut mesh = Dcel::new();
    mesh.add_edge(0.0, 0.0, 1.0, 0.0);

    // angle is the direction from the head towards the origin, in 0..2π
    let he = mesh.find_half_edge(0.0, 0.0, 1.0, 0.0).unwrap();
    let he = mesh.get_half_edge(he);
    assert_eq!(he.angle(), std::f64::consts::PI);
    assert_eq!(he.twin().angle(), 2.0 * std::f64::consts::PI);
    assert_eq!(he.length(), 1.0);
    assert_eq!(he.twin().length(), 1.0);
}


// ===========================================================================
// ===== Removing edges
// ===========================================================================

#[test]
fn removing_the_bisector_merges_the_faces() {
    let mut mesh = square_with_bisector();
    assert_eq!(mesh.internal_faces().count(), 2);

    mesh.remove_edge(0.0, 1.0, 0.0, -1.0).unwrap();
    assert_eq!(mesh.internal_faces().count(), 1);
    assert_eq!(mesh.internal_faces().next().unwrap().area(), 4.0);
    check_invariants(&mesh);

    // the outline minus one segment encloses nothing anymore
    mesh.remove_edge(0.0, 1.0, 1.0, 1.0).unwrap();
    assert_eq!(mesh.internal_faces().count(), 0);
    assert_eq!(mesh.external_faces().count(), 1);
    assert_eq!(mesh.external_faces().next().unwrap().area(), 0.0);
    check_invariants(&mesh);
}

#[test]
fn removing_the_last_edge_of_a_vertex_removes_the_vertex() {
    let mut mesh = Dcel::new();
    mesh.add_edge(-1.0, 0.0, 1.0, 0.0);
    mesh.add_edge(1.0, 0.0, 1.0, 1.0);

    mesh.remove_edge(1.0, 0.0, 1.0, 1.0).unwrap();
    assert_eq!(mesh.find_vertex(1.0, 1.0), None);
    assert_eq!(mesh.num_vertices(), 2);
    assert_eq!(mesh.num_faces(), 1);
    check_invariants(&mesh);

    // removing the only remaining edge empties the mesh entirely
    mesh.remove_edge(-1.0, 0.0, 1.0, 0.0).unwrap();
    assert_eq!(mesh.num_vertices(), 0);
    assert_eq!(mesh.num_half_edges(), 0);
    assert_eq!(mesh.num_faces(), 0);
}

#[test]
fn remove_edge_without_match_is_rejected_untouched() {
    let mut mesh = square_with_bisector();
    let faces_before = mesh.num_faces();
    let area_before = total_signed_area(&mesh);

    let err = mesh.remove_edge(7.0, 7.0, 8.0, 8.0).unwrap_err();
    assert_eq!(
        err,
        Error::HalfEdgeNotFound { x1: 7.0, y1: 7.0, x2: 8.0, y2: 8.0 },
    );
    assert_eq!(mesh.num_faces(), faces_before);
    assert_eq!(mesh.num_vertices(), 6);
    assert_eq!(total_signed_area(&mesh), area_before);
    check_invariants(&mesh);
}


// ===========================================================================
// ===== Holes
// ===========================================================================

#[test]
fn nested_squares_have_one_hole() {
    let mesh = nested_squares();
    assert_eq!(mesh.internal_faces().count(), 2);
    assert_eq!(total_internal_area(&mesh), 20.0);
    assert_eq!(total_holes(&mesh), 1);

    let outer = mesh.internal_faces().find(|f| f.area() == 16.0).unwrap();
    let inner = mesh.internal_faces().find(|f| f.area() == 4.0).unwrap();

    let hole = outer.holes().next().unwrap();
    assert_eq!(hole.area(), -4.0);
    assert_eq!(outer.area_except_holes(), 12.0);
    assert_eq!(inner.num_holes(), 0);
    assert_eq!(inner.area_except_holes(), 4.0);
    check_invariants(&mesh);
}

#[test]
fn connecting_the_squares_dissolves_the_hole() {
    let mut mesh = nested_squares();
    assert_eq!(total_holes(&mesh), 1);

    mesh.add_edge(-2.0, 2.0, -1.0, 1.0);
    assert_eq!(mesh.internal_faces().count(), 2);
    assert_eq!(total_holes(&mesh), 0);
    assert_eq!(total_internal_area(&mesh), 16.0);
    check_invariants(&mesh);
}

#[test]
fn removing_the_connector_recreates_the_hole() {
    let mut mesh = nested_squares_connected();
    assert_eq!(mesh.internal_faces().count(), 2);
    assert_eq!(total_internal_area(&mesh), 16.0);
    assert_eq!(total_holes(&mesh), 0);

    mesh.remove_edge(-2.0, 2.0, -1.0, 1.0).unwrap();
    assert_eq!(mesh.internal_faces().count(), 2);
    assert_eq!(total_internal_area(&mesh), 20.0);
    assert_eq!(total_holes(&mesh), 1);
    assert_eq!(
        mesh.internal_faces().map(|f| f.area_except_holes()).sum::<f64>(),
        16.0,
    );
    check_invariants(&mesh);
}

#[test]
fn hole_bounding_boxes_prefilter() {
    let mesh = nested_squares();
    let outer = mesh.internal_faces().find(|f| f.area() == 16.0).unwrap();
    let inner = mesh.internal_faces().find(|f| f.area() == 4.0).unwrap();

    assert!(outer.bounding_box().contains_all(inner.boundary_positions()));
    assert!(!inner.bounding_box().contains_all(outer.boundary_positions()));
    assert!(outer.bounding_box().intersects(inner.bounding_box()));
}


// ===========================================================================
// ===== Splitting edges
// ===========================================================================

#[test]
fn split_is_area_neutral_and_keeps_face_identity() {
    let mut mesh = square_with_bisector();
    let mut faces_before: Vec<_> = mesh.faces()
        .map(|f| (f.handle(), f.area()))
        .collect();
    let cycle_lens_before: Vec<_> = mesh.faces()
        .map(|f| f.half_edges().count())
        .collect();

    mesh.split_edge(0.0, 1.0, 0.0, -1.0, 0.0, 0.0).unwrap();
    check_invariants(&mesh);

    let mut faces_after: Vec<_> = mesh.faces()
        .map(|f| (f.handle(), f.area()))
        .collect();
    faces_before.sort_by_key(|(h, _)| *h);
    faces_after.sort_by_key(|(h, _)| *h);
    assert_eq!(faces_before, faces_after);

    // both faces next to the split gained exactly one boundary vertex
    let split = mesh.find_vertex(0.0, 0.0).unwrap();
    let touched = mesh.faces()
        .filter(|f| f.boundary_vertices().contains(&split))
        .count();
    assert_eq!(touched, 2);
    let cycle_lens_after: Vec<_> = mesh.faces()
        .map(|f| f.half_edges().count())
        .collect();
    assert_eq!(
        cycle_lens_after.iter().sum::<usize>(),
        cycle_lens_before.iter().sum::<usize>() + 2,
    );

    // the old edge is gone, its two halves exist
    assert!(mesh.find_half_edge(0.0, 1.0, 0.0, -1.0).is_none());
    assert!(mesh.find_half_edge(0.0, 1.0, 0.0, 0.0).is_some());
    assert!(mesh.find_half_edge(0.0, 0.0, 0.0, -1.0).is_some());
    assert_eq!(mesh.get_vertex(split).degree(), 2);
}

#[test]
fn split_dangling_edge() {
    let mut mesh = Dcel::new();
    mesh.add_edge(-1.0, 0.0, 1.0, 0.0);

    mesh.split_edge(-1.0, 0.0, 1.0, 0.0, 0.0, 0.0).unwrap();
    assert_eq!(mesh.num_vertices(), 3);
    assert_eq!(mesh.num_half_edges(), 4);
    assert_eq!(mesh.num_faces(), 1);

    let face = mesh.faces().next().unwrap();
    assert_eq!(face.area(), 0.0);
    assert_eq!(face.half_edges().count(), 4);
    check_invariants(&mesh);
}

#[test]
fn edits_compose_at_a_split_vertex() {
    let mut mesh = square_with_bisector();
    mesh.split_edge(0.0, 1.0, 0.0, -1.0, 0.0, 0.0).unwrap();

    // removing the upper half of the bisector merges the two faces and
    // leaves the lower half dangling
    mesh.remove_edge(0.0, 1.0, 0.0, 0.0).unwrap();
    assert_eq!(mesh.internal_faces().count(), 1);
    assert_eq!(mesh.internal_faces().next().unwrap().area(), 4.0);
    assert!(mesh.find_vertex(0.0, 0.0).is_some());
    check_invariants(&mesh);

    // removing the dangling rest drops the split vertex with it
    mesh.remove_edge(0.0, 0.0, 0.0, -1.0).unwrap();
    assert_eq!(mesh.find_vertex(0.0, 0.0), None);
    assert_eq!(mesh.internal_faces().count(), 1);
    check_invariants(&mesh);

    // closing the fan again via add_edge at the old split position
    mesh.add_edge(0.0, 1.0, 0.0, -1.0);
    assert_eq!(mesh.internal_faces().count(), 2);
    check_invariants(&mesh);
}

#[test]
fn split_edge_without_match_is_rejected_untouched() {
    let mut mesh = square_with_bisector();
    let faces_before = mesh.num_faces();
    let hedges_before = mesh.num_half_edges();

    let err = mesh.split_edge(7.0, 7.0, 8.0, 8.0, 7.5, 7.5).unwrap_err();
    assert_eq!(
        err,
        Error::HalfEdgeNotFound { x1: 7.0, y1: 7.0, x2: 8.0, y2: 8.0 },
    );
    assert_eq!(mesh.num_faces(), faces_before);
    assert_eq!(mesh.num_half_edges(), hedges_before);
    assert_eq!(mesh.find_vertex(7.5, 7.5), None);
    check_invariants(&mesh);
}
