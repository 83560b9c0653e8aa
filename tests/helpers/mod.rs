// Copyright 2025 Lars Brubaker
// Shared test utilities for quad-delaunay tests.

#![allow(dead_code)]

use std::collections::{BTreeSet, HashSet};

use quad_delaunay::{in_circle, orientation, Orientation, Point};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub type P = Point<i64>;

pub fn pts(coords: &[(i64, i64)]) -> Vec<P> {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

/// `n` distinct random points with coordinates in `-range..=range`.
pub fn random_points(seed: u64, n: usize, range: i64) -> Vec<P> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(n);
    while out.len() < n {
        let p = Point::new(rng.gen_range(-range..=range), rng.gen_range(-range..=range));
        if seen.insert(p) {
            out.push(p);
        }
    }
    out
}

/// Twice the signed area of a triangle.
pub fn doubled_area(a: P, b: P, c: P) -> i128 {
    let (abx, aby) = ((b.x - a.x) as i128, (b.y - a.y) as i128);
    let (acx, acy) = ((c.x - a.x) as i128, (c.y - a.y) as i128);
    abx * acy - aby * acx
}

/// Exact in-circle determinant: positive inside, zero on the circle.
pub fn circle_det(p: P, a: P, b: P, c: P) -> i128 {
    let d = |q: P| ((q.x - p.x) as i128, (q.y - p.y) as i128);
    let (adx, ady) = d(a);
    let (bdx, bdy) = d(b);
    let (cdx, cdy) = d(c);
    (adx * adx + ady * ady) * (bdx * cdy - cdx * bdy)
        + (bdx * bdx + bdy * bdy) * (cdx * ady - adx * cdy)
        + (cdx * cdx + cdy * cdy) * (adx * bdy - bdx * ady)
}

pub fn all_collinear(points: &[P]) -> bool {
    if points.len() < 3 {
        return true;
    }
    let (a, b) = (points[0], points[1]);
    points[2..].iter().all(|&c| doubled_area(a, b, c) == 0)
}

/// Strict convex hull (no collinear vertices), ccw, via monotone chain.
pub fn convex_hull(points: &[P]) -> Vec<P> {
    let mut v = points.to_vec();
    v.sort_by(|a, b| a.lex_cmp(b));
    if v.len() < 3 {
        return v;
    }
    let mut hull: Vec<P> = Vec::with_capacity(2 * v.len());
    for pass in 0..2 {
        let start = hull.len();
        for &p in &v {
            while hull.len() >= start + 2
                && doubled_area(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0
            {
                hull.pop();
            }
            hull.push(p);
        }
        hull.pop();
        if pass == 0 {
            v.reverse();
        }
    }
    hull
}

/// Number of input points on the hull boundary, collinear ones included.
pub fn hull_boundary_count(points: &[P]) -> usize {
    let hull = convex_hull(points);
    let h = hull.len();
    points
        .iter()
        .filter(|&&p| {
            (0..h).any(|i| {
                let (a, b) = (hull[i], hull[(i + 1) % h]);
                doubled_area(a, b, p) == 0
                    && p.x >= a.x.min(b.x)
                    && p.x <= a.x.max(b.x)
                    && p.y >= a.y.min(b.y)
                    && p.y <= a.y.max(b.y)
            })
        })
        .count()
}

/// Triangles as sorted vertex triples, independent of output order.
pub fn canonical_triangles(out: &[P]) -> BTreeSet<[(i64, i64); 3]> {
    out.chunks(3)
        .map(|t| {
            let mut tri = [(t[0].x, t[0].y), (t[1].x, t[1].y), (t[2].x, t[2].y)];
            tri.sort_unstable();
            tri
        })
        .collect()
}

/// True if some output triangle has a fourth input point exactly on its
/// circumcircle, i.e. the Delaunay triangulation is not unique.
pub fn has_cocircular_triangle(points: &[P], out: &[P]) -> bool {
    out.chunks(3).any(|t| {
        points
            .iter()
            .any(|p| !t.contains(p) && circle_det(*p, t[0], t[1], t[2]) == 0)
    })
}

/// Check every property a Delaunay triangulation of `points` must have.
pub fn verify_delaunay(points: &[P], out: &[P]) {
    assert_eq!(out.len() % 3, 0, "output length must be a multiple of 3");

    if all_collinear(points) {
        assert!(out.is_empty(), "collinear input must produce no triangles");
        return;
    }

    let inputs: HashSet<P> = points.iter().copied().collect();
    for t in out.chunks(3) {
        assert_eq!(
            orientation(t[0], t[1], t[2]),
            Orientation::CounterClockwise,
            "triangle {:?} is not ccw",
            t
        );
        for v in t {
            assert!(inputs.contains(v), "vertex {:?} is not an input point", v);
        }
        for p in points {
            if !t.contains(p) {
                assert!(
                    !in_circle(*p, t[0], t[1], t[2]),
                    "{:?} lies inside the circumcircle of {:?}",
                    p,
                    t
                );
            }
        }
    }

    let n = points.len();
    let h = hull_boundary_count(points);
    assert_eq!(out.len() / 3, 2 * n - h - 2, "triangle count (n={}, h={})", n, h);

    let hull = convex_hull(points);
    let hull_area: i128 = (1..hull.len() - 1)
        .map(|i| doubled_area(hull[0], hull[i], hull[i + 1]))
        .sum();
    let tri_area: i128 = out.chunks(3).map(|t| doubled_area(t[0], t[1], t[2])).sum();
    assert_eq!(tri_area, hull_area, "triangles must tile the convex hull");

    assert_eq!(
        canonical_triangles(out).len(),
        out.len() / 3,
        "no triangle may be emitted twice"
    );
}
