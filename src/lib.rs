// quad-delaunay: divide-and-conquer Delaunay triangulation on a quad-edge mesh
// Copyright 2025 Lars Brubaker
// License: MIT

pub mod bucketalloc;
pub mod geom;
pub mod mesh;
pub mod triangulate;

pub use geom::{
    in_circle, orientation, Coord, Orientation, Point, MAX_EXACT_COORD,
    MAX_FLOAT_COORD,
};
pub use triangulate::{triangulate, try_triangulate, TriangulationError, Triangulator, MAX_POINTS};
