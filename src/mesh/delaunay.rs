// Copyright 2025 Lars Brubaker
// License: MIT
//
// Divide-and-conquer Delaunay construction for Mesh.
//
// The vertex table must be sorted lexicographically and free of duplicates.
// Each call triangulates a contiguous index range and returns two hull
// edges: the ccw hull edge leaving the leftmost vertex and the cw hull edge
// leaving the rightmost vertex, so two adjacent ranges can be stitched
// together.

use num_traits::Zero;

use super::{sym, EdgeIdx, Mesh, VertIdx};
use crate::geom::{cross, in_circle, orientation, Coord, Orientation};

impl<T: Coord> Mesh<T> {
    /// Positive when vertex p lies to the right of the directed edge e,
    /// negative when it lies to the left.
    #[inline]
    fn side(&self, p: VertIdx, e: EdgeIdx) -> T::Wide {
        cross(self.verts[p as usize], self.dst_point(e), self.org_point(e))
    }

    #[inline]
    fn right_of(&self, p: VertIdx, e: EdgeIdx) -> bool {
        self.side(p, e) > T::Wide::zero()
    }

    /// Candidate edge c still lies above the base edge.
    #[inline]
    fn valid(&self, c: EdgeIdx, base: EdgeIdx) -> bool {
        self.right_of(self.dst(c), base)
    }

    #[inline]
    fn in_circle_vi(&self, p: VertIdx, a: VertIdx, b: VertIdx, c: VertIdx) -> bool {
        let v = &self.verts;
        in_circle(v[p as usize], v[a as usize], v[b as usize], v[c as usize])
    }

    /// Triangulate the whole vertex table. Requires at least two vertices.
    pub fn build_delaunay(&mut self) -> (EdgeIdx, EdgeIdx) {
        let n = self.verts.len() as VertIdx;
        assert!(n >= 2, "triangulation needs at least two vertices");
        self.build_range(0, n)
    }

    fn build_range(&mut self, lo: VertIdx, hi: VertIdx) -> (EdgeIdx, EdgeIdx) {
        let n = hi - lo;
        debug_assert!(n >= 2);

        if n <= 3 {
            let a = self.make_edge(lo, lo + 1);
            if n == 2 {
                return (a, sym(a));
            }
            let b = self.make_edge(lo + 1, lo + 2);
            self.splice(sym(a), b);

            let v = &self.verts;
            let side = orientation(v[lo as usize], v[lo as usize + 1], v[lo as usize + 2]);
            return match side {
                Orientation::Collinear => (a, sym(b)),
                Orientation::CounterClockwise => {
                    self.connect(b, a);
                    (a, sym(b))
                }
                Orientation::Clockwise => {
                    let c = self.connect(b, a);
                    (sym(c), c)
                }
            };
        }

        let half = n / 2;
        let (mut ldo, mut ldi) = self.build_range(lo, hi - half);
        let (mut rdi, mut rdo) = self.build_range(hi - half, hi);
        self.merge(&mut ldo, &mut ldi, &mut rdi, &mut rdo);
        (ldo, rdo)
    }

    /// Merge two adjacent triangulations.
    ///
    /// `ldo`/`ldi` are the outer and inner hull edges of the left half,
    /// `rdi`/`rdo` those of the right half. The outer edges are updated when
    /// the base edge replaces them.
    fn merge(
        &mut self,
        ldo: &mut EdgeIdx,
        ldi: &mut EdgeIdx,
        rdi: &mut EdgeIdx,
        rdo: &mut EdgeIdx,
    ) {
        // Lower common tangent.
        let zero = T::Wide::zero();
        loop {
            if self.side(self.org(*rdi), *ldi) < zero {
                *ldi = self.lnext(*ldi);
            } else if self.side(self.org(*ldi), *rdi) > zero {
                *rdi = self.rprev(*rdi);
            } else {
                break;
            }
        }

        let mut base = self.connect(sym(*rdi), *ldi);
        let mut deleted = 0usize;
        tracing::trace!(
            org = self.org(base),
            dst = self.dst(base),
            "lower common tangent"
        );
        if self.org(*ldi) == self.org(*ldo) {
            *ldo = sym(base);
        }
        if self.org(*rdi) == self.org(*rdo) {
            *rdo = base;
        }

        loop {
            let mut lcand = self.onext(sym(base));
            if self.valid(lcand, base) {
                while self.in_circle_vi(
                    self.dst(self.onext(lcand)),
                    self.dst(base),
                    self.org(base),
                    self.dst(lcand),
                ) {
                    let t = self.onext(lcand);
                    self.delete_edge(lcand);
                    deleted += 1;
                    lcand = t;
                }
            }

            let mut rcand = self.oprev(base);
            if self.valid(rcand, base) {
                while self.in_circle_vi(
                    self.dst(self.oprev(rcand)),
                    self.dst(base),
                    self.org(base),
                    self.dst(rcand),
                ) {
                    let t = self.oprev(rcand);
                    self.delete_edge(rcand);
                    deleted += 1;
                    rcand = t;
                }
            }

            let l_valid = self.valid(lcand, base);
            let r_valid = self.valid(rcand, base);
            if !l_valid && !r_valid {
                // Upper common tangent reached.
                tracing::trace!(deleted, "upper common tangent");
                break;
            }

            if !l_valid
                || (r_valid
                    && self.in_circle_vi(
                        self.dst(rcand),
                        self.org(rcand),
                        self.dst(lcand),
                        self.org(lcand),
                    ))
            {
                base = self.connect(rcand, sym(base));
            } else {
                base = self.connect(sym(base), sym(lcand));
            }
        }
    }
}
