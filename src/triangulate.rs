// Copyright 2025 Lars Brubaker
// License: MIT
//
// Public triangulation API.
//
// Input points are validated, sorted lexicographically and handed to a
// fresh quad-edge mesh. The mesh and its record arena live only for the
// duration of one call; the caller sees flat triangle buffers.

use thiserror::Error;

use crate::geom::{Coord, Point};
use crate::mesh::Mesh;

mod output;


/// Largest input size whose edge records still fit the u32 index space.
pub const MAX_POINTS: usize = (u32::MAX / 16) as usize;

/// Precondition violations detected before triangulating.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TriangulationError {
    #[error("points {first} and {second} coincide")]
    DuplicatePoint { first: usize, second: usize },

    #[error("point {index} has a coordinate outside the supported range")]
    CoordinateOutOfRange { index: usize },

    #[error("too many points: {count} (max {max})")]
    TooManyPoints { count: usize, max: usize },
}

/// Reusable Delaunay triangulator.
///
/// Output buffers are kept between runs; every run starts from an empty
/// mesh.
pub struct Triangulator<T> {
    out_points: Vec<Point<T>>,
    out_elements: Vec<u32>,
}

impl<T: Coord> Triangulator<T> {
    pub fn new() -> Self {
        Triangulator {
            out_points: Vec::new(),
            out_elements: Vec::new(),
        }
    }

    /// Triangulate `points`, replacing any previous output.
    ///
    /// On error the output is left empty.
    pub fn triangulate(&mut self, points: &[Point<T>]) -> Result<(), TriangulationError> {
        self.out_points.clear();
        self.out_elements.clear();

        let _span = tracing::debug_span!("triangulate", points = points.len()).entered();

        let order = sorted_order(points)?;
        if points.len() < 2 {
            return Ok(());
        }

        let verts = order.iter().map(|&i| points[i as usize]).collect();
        let mut mesh = Mesh::new(verts);
        let (leftmost, _) = mesh.build_delaunay();
        self.output_triangles(&mut mesh, leftmost, &order);
        self.out_points
            .extend(self.out_elements.iter().map(|&i| points[i as usize]));

        tracing::debug!(
            triangles = self.triangle_count(),
            quads = mesh.edges.len(),
            live = mesh.edges.live(),
            recycled = mesh.edges.recycled(),
            "triangulation complete"
        );
        Ok(())
    }

    /// Flat ccw triangle corners, three points per triangle.
    pub fn points(&self) -> &[Point<T>] {
        &self.out_points
    }

    /// Flat ccw triangle corners as indices into the last input slice.
    pub fn elements(&self) -> &[u32] {
        &self.out_elements
    }

    pub fn triangle_count(&self) -> usize {
        self.out_elements.len() / 3
    }

    pub fn triangles(&self) -> impl Iterator<Item = [Point<T>; 3]> + '_ {
        self.out_points.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }
}

impl<T: Coord> Default for Triangulator<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate the input and return its indices in lexicographic point order.
fn sorted_order<T: Coord>(points: &[Point<T>]) -> Result<Vec<u32>, TriangulationError> {
    if points.len() > MAX_POINTS {
        return Err(TriangulationError::TooManyPoints {
            count: points.len(),
            max: MAX_POINTS,
        });
    }
    if let Some(index) = points.iter().position(|p| !p.is_representable()) {
        return Err(TriangulationError::CoordinateOutOfRange { index });
    }

    let mut order: Vec<u32> = (0..points.len() as u32).collect();
    order.sort_by(|&a, &b| points[a as usize].lex_cmp(&points[b as usize]));

    if let Some(w) = order
        .windows(2)
        .find(|w| points[w[0] as usize] == points[w[1] as usize])
    {
        let (a, b) = (w[0] as usize, w[1] as usize);
        return Err(TriangulationError::DuplicatePoint {
            first: a.min(b),
            second: a.max(b),
        });
    }
    Ok(order)
}

/// Delaunay triangulation of `points` as flat ccw triples.
///
/// Returns an empty list for fewer than three points or collinear input.
pub fn try_triangulate<T: Coord>(points: &[Point<T>]) -> Result<Vec<Point<T>>, TriangulationError> {
    let mut tri = Triangulator::new();
    tri.triangulate(points)?;
    Ok(tri.out_points)
}

/// Delaunay triangulation of `points` as flat ccw triples.
///
/// # Panics
///
/// Panics on duplicate points or coordinates outside the supported range.
pub fn triangulate<T: Coord>(points: &[Point<T>]) -> Vec<Point<T>> {
    match try_triangulate(points) {
        Ok(out) => out,
        Err(err) => panic!("triangulate: {}", err),
    }
}
