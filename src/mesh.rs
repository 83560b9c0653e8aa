// Copyright 2025 Lars Brubaker
// License: MIT
//
// Guibas/Stolfi quad-edge mesh.
//
// All pointers of the classic structure are replaced with u32 indices into
// a bucket arena.
//
// Design:
//   - INVALID: u32::MAX  (null pointer equivalent)
//   - Each undirected edge owns four consecutive records e0..e3 starting at
//     a bucket base (a multiple of four). rot(e) moves to the next record of
//     the bucket: e0 -> e1 -> e2 -> e3 -> e0.
//     sym(e) = e ^ 2 is the reversed edge, e1 and e3 are the duals.
//   - Only onext is stored. Every other traversal is composed from rot and
//     onext.
//   - Primal records carry the index of their origin vertex in `verts`;
//     dual records keep INVALID.

use crate::bucketalloc::BucketAlloc;
use crate::geom::{Coord, Point};

pub mod delaunay;

pub const INVALID: u32 = u32::MAX;

/// Index into Mesh::verts
pub type VertIdx = u32;
/// Index of a directed-edge record in Mesh::edges
pub type EdgeIdx = u32;

/// Rotate e by a quarter turn counter-clockwise (its left-to-right dual).
#[inline(always)]
pub fn rot(e: EdgeIdx) -> EdgeIdx {
    (e & !3) | (e.wrapping_add(1) & 3)
}

/// Rotate e by a quarter turn clockwise.
#[inline(always)]
pub fn inv_rot(e: EdgeIdx) -> EdgeIdx {
    (e & !3) | (e.wrapping_add(3) & 3)
}

/// Same edge, opposite direction.
#[inline(always)]
pub fn sym(e: EdgeIdx) -> EdgeIdx {
    e ^ 2
}

#[derive(Clone, Debug)]
pub struct QuadEdge {
    /// Next edge CCW around the origin of this record.
    pub onext: EdgeIdx,
    /// Origin vertex index (INVALID on dual records).
    pub org: VertIdx,
    /// Visited flag for face extraction.
    pub mark: bool,
}

impl Default for QuadEdge {
    fn default() -> Self {
        Self {
            onext: INVALID,
            org: INVALID,
            mark: false,
        }
    }
}

/// A quad-edge mesh over a fixed vertex table.
pub struct Mesh<T> {
    pub verts: Vec<Point<T>>,
    pub edges: BucketAlloc<QuadEdge>,
}

impl<T: Coord> Mesh<T> {
    /// Create an edgeless mesh over `verts`.
    pub fn new(verts: Vec<Point<T>>) -> Self {
        // A planar triangulation never holds more than 3n edges.
        let edges = BucketAlloc::with_capacity(3 * verts.len());
        Mesh { verts, edges }
    }

    // ──────────────────────────── Navigation ────────────────────────────────

    /// Next edge CCW around the origin.
    #[inline]
    pub fn onext(&self, e: EdgeIdx) -> EdgeIdx {
        self.edges[e].onext
    }

    /// Next edge CW around the origin: Rot->Onext->Rot
    #[inline]
    pub fn oprev(&self, e: EdgeIdx) -> EdgeIdx {
        rot(self.onext(rot(e)))
    }

    /// Next edge CCW around the left face: InvRot->Onext->Rot
    #[inline]
    pub fn lnext(&self, e: EdgeIdx) -> EdgeIdx {
        rot(self.onext(inv_rot(e)))
    }

    /// Lprev: Onext->Sym
    #[inline]
    pub fn lprev(&self, e: EdgeIdx) -> EdgeIdx {
        sym(self.onext(e))
    }

    /// Next edge CCW around the destination: Sym->Onext->Sym
    #[inline]
    pub fn dnext(&self, e: EdgeIdx) -> EdgeIdx {
        sym(self.onext(sym(e)))
    }

    /// Dprev: InvRot->Onext->InvRot
    #[inline]
    pub fn dprev(&self, e: EdgeIdx) -> EdgeIdx {
        inv_rot(self.onext(inv_rot(e)))
    }

    /// Rnext: Rot->Onext->InvRot
    #[inline]
    pub fn rnext(&self, e: EdgeIdx) -> EdgeIdx {
        inv_rot(self.onext(rot(e)))
    }

    /// Rprev: Sym->Onext
    #[inline]
    pub fn rprev(&self, e: EdgeIdx) -> EdgeIdx {
        self.onext(sym(e))
    }

    /// Origin vertex of e.
    #[inline]
    pub fn org(&self, e: EdgeIdx) -> VertIdx {
        self.edges[e].org
    }

    /// Destination vertex of e (= org of Sym).
    #[inline]
    pub fn dst(&self, e: EdgeIdx) -> VertIdx {
        self.edges[sym(e)].org
    }

    #[inline]
    pub fn org_point(&self, e: EdgeIdx) -> Point<T> {
        self.verts[self.org(e) as usize]
    }

    #[inline]
    pub fn dst_point(&self, e: EdgeIdx) -> Point<T> {
        self.verts[self.dst(e) as usize]
    }

    // ──────────────────────── Topological operators ─────────────────────────

    /// Create an isolated edge from `org` to `dst`.
    ///
    /// The primal records are self-loops around their origins and the dual
    /// records form the single face ring of the new edge.
    pub fn make_edge(&mut self, org: VertIdx, dst: VertIdx) -> EdgeIdx {
        debug_assert!((org as usize) < self.verts.len() && (dst as usize) < self.verts.len());
        let e = self.edges.alloc();

        self.edges[e].onext = e;
        self.edges[e + 1].onext = e + 3;
        self.edges[e + 2].onext = e + 2;
        self.edges[e + 3].onext = e + 1;

        self.edges[e].org = org;
        self.edges[e + 2].org = dst;

        e
    }

    /// Exchange a->Onext and b->Onext together with the matching dual links.
    ///
    /// Joins two origin rings into one, or splits one ring into two when a
    /// and b share an origin. Applying it twice restores the mesh.
    pub fn splice(&mut self, a: EdgeIdx, b: EdgeIdx) {
        let alpha = rot(self.onext(a));
        let beta = rot(self.onext(b));

        let a_onext = self.edges[a].onext;
        let b_onext = self.edges[b].onext;
        self.edges[a].onext = b_onext;
        self.edges[b].onext = a_onext;

        let alpha_onext = self.edges[alpha].onext;
        let beta_onext = self.edges[beta].onext;
        self.edges[alpha].onext = beta_onext;
        self.edges[beta].onext = alpha_onext;
    }

    /// Create a new edge from a->Dst to b->Org.
    ///
    /// The new edge shares a's left face and leaves b's origin immediately
    /// clockwise of b. Returns the new edge.
    pub fn connect(&mut self, a: EdgeIdx, b: EdgeIdx) -> EdgeIdx {
        let e = self.make_edge(self.dst(a), self.org(b));
        let a_lnext = self.lnext(a);
        self.splice(e, a_lnext);
        self.splice(sym(e), b);
        e
    }

    /// Detach e from both of its origin rings and recycle its records.
    pub fn delete_edge(&mut self, e: EdgeIdx) {
        let e_oprev = self.oprev(e);
        self.splice(e, e_oprev);
        let e_sym = sym(e);
        let e_sym_oprev = self.oprev(e_sym);
        self.splice(e_sym, e_sym_oprev);
        self.edges.free(e);
    }

    /// Number of edges in the left face ring of e.
    pub fn count_face_edges(&self, e: EdgeIdx) -> usize {
        let mut n = 0;
        let mut c = e;
        loop {
            n += 1;
            c = self.lnext(c);
            if c == e {
                break;
            }
        }
        n
    }
}
