// Copyright 2025 Lars Brubaker
// License: MIT
//
// Triangle extraction for the Triangulator.

use std::collections::VecDeque;

use num_traits::Zero;

use super::Triangulator;
use crate::geom::{cross, Coord};
use crate::mesh::{sym, EdgeIdx, Mesh, VertIdx};

impl<T: Coord> Triangulator<T> {
    /// Flood-fill the faces of a finished mesh, starting from the leftmost
    /// hull edge, and append every triangular face to `out_elements`.
    ///
    /// `order` maps mesh vertex indices back to input indices.
    pub(crate) fn output_triangles(&mut self, mesh: &mut Mesh<T>, leftmost: EdgeIdx, order: &[u32]) {
        // Rotate around the leftmost vertex until the left face of e is the
        // unbounded one.
        let mut e = leftmost;
        while cross(mesh.dst_point(mesh.onext(e)), mesh.dst_point(e), mesh.org_point(e))
            < T::Wide::zero()
        {
            e = mesh.onext(e);
        }

        let mut queue = VecDeque::new();
        let mut ring: Vec<VertIdx> = Vec::with_capacity(3);

        // The exterior face is visited first and never emitted.
        walk_face(mesh, e, &mut ring, &mut queue);

        while let Some(e) = queue.pop_front() {
            if mesh.edges[e].mark {
                continue;
            }
            walk_face(mesh, e, &mut ring, &mut queue);
            if ring.len() == 3 {
                self.out_elements
                    .extend(ring.iter().map(|&v| order[v as usize]));
            }
        }
    }
}

/// Mark the left face ring of `start`, collect its origins into `ring` and
/// queue the reverse of every edge on it.
fn walk_face<T: Coord>(
    mesh: &mut Mesh<T>,
    start: EdgeIdx,
    ring: &mut Vec<VertIdx>,
    queue: &mut VecDeque<EdgeIdx>,
) {
    ring.clear();
    let mut c = start;
    loop {
        mesh.edges[c].mark = true;
        ring.push(mesh.org(c));
        queue.push_back(sym(c));
        c = mesh.lnext(c);
        if c == start {
            break;
        }
    }
}
