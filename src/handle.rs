//! Typed handles used to refer to elements of a mesh.
//!
//! All elements (vertices, half edges, faces) live in arenas owned by the
//! mesh and are referred to by small typed indices instead of references.
//! This avoids the cyclic borrows a doubly-connected edge list would
//! otherwise require, and it makes use-after-remove a loud panic (the arena
//! lookup fails) instead of a silent dangling pointer.

use std::fmt;


/// The integer type used as index for handles.
#[allow(non_camel_case_types)]
pub type hsize = u32;

/// Types that can be used to refer to some element in a mesh.
///
/// A handle is just a wrapper around a plain integer index. It does not know
/// which mesh it belongs to; pairing a handle with the wrong mesh results in
/// a panic or in nonsensical (but memory safe) results.
pub trait Handle: Copy + fmt::Debug + Eq {
    /// Creates a handle from the given index.
    fn new(idx: hsize) -> Self;

    /// Returns the index of the current handle.
    fn idx(&self) -> hsize;

    /// Helper to create a handle from a `usize`. Panics if the given value
    /// does not fit into `hsize`.
    fn from_usize(raw: usize) -> Self {
        assert!(raw <= hsize::MAX as usize);
        Self::new(raw as hsize)
    }

    /// Helper to get the index of this handle as `usize`.
    fn to_usize(&self) -> usize {
        self.idx() as usize
    }
}

macro_rules! make_handle_type {
    ($(#[$attr:meta])* $name:ident = $short:expr;) => {
        $(#[$attr])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(hsize);

        impl Handle for $name {
            #[inline(always)]
            fn new(idx: hsize) -> Self {
                $name(idx)
            }

            #[inline(always)]
            fn idx(&self) -> hsize {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{}{}", $short, self.0)
            }
        }
    }
}

make_handle_type!(
    /// A handle referring to a vertex.
    VertexHandle = "V";
);
make_handle_type!(
    /// A handle referring to a face.
    FaceHandle = "F";
);
make_handle_type!(
    /// A handle referring to a half edge.
    HalfEdgeHandle = "HE";
);

impl HalfEdgeHandle {
    /// Returns the handle of this half edge's twin (the half edge of the
    /// same undirected edge, pointing in the opposite direction).
    ///
    /// Twins are always created together and stored right next to one
    /// another in the underlying arena. Since arena indices start at 0 and
    /// half edges are only ever pushed and removed in pairs, the two twins
    /// of one edge always have the indices `2k` and `2k + 1`. Thus we can
    /// simply flip the last bit of the index to get the twin handle.
    #[inline(always)]
    pub fn twin(self) -> HalfEdgeHandle {
        Self::new(self.idx() ^ 1)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twin_flips_last_bit() {
        let a = HalfEdgeHandle::new(6);
        let b = HalfEdgeHandle::new(7);
        assert_eq!(a.twin(), b);
        assert_eq!(b.twin(), a);
        assert_eq!(a.twin().twin(), a);
    }

    #[test]
    fn debug_repr() {
        assert_eq!(format!("{:?}", VertexHandle::new(3)), "V3");
        assert_eq!(format!("{:?}", FaceHandle::new(0)), "F0");
        assert_eq!(format!("{:?}", HalfEdgeHandle::new(12)), "HE12");
    }
}
