//! Polygon extraction from instance masks.

use crate::common::*;
use imageproc::{contours::find_contours, geometry::approximate_polygon_dp};

/// Traces every boundary of a membership grid into closed rings.
///
/// Each ring is simplified so that no dropped pixel lies farther than
/// `tolerance` pixels from it. Rings left with fewer than 3 vertices are
/// discarded. Vertices are normalized by the grid's width and height.
pub fn trace_polygons(mask: ArrayView2<'_, bool>, tolerance: f64) -> Vec<Vec<[f64; 2]>> {
    let (rows, cols) = mask.dim();
    if rows == 0 || cols == 0 {
        return vec![];
    }

    // one pixel of background on every side, otherwise regions touching
    // opposite borders have no boundary to follow
    let image = GrayImage::from_fn(cols as u32 + 2, rows as u32 + 2, |x, y| {
        let (x, y) = (x as usize, y as usize);
        let inside = (1..=cols).contains(&x) && (1..=rows).contains(&y);
        let value = if inside && mask[[y - 1, x - 1]] { 255 } else { 0 };
        Luma([value])
    });
    let normalize = Transform::normalize(cols as f64, rows as f64);

    find_contours::<i32>(&image)
        .into_iter()
        .filter_map(|contour| {
            let approx = approximate_polygon_dp(&contour.points, tolerance, true);
            if approx.len() < 3 {
                trace!(
                    "drop a ring of {} vertices simplified from {} points",
                    approx.len(),
                    contour.points.len()
                );
                return None;
            }

            let ring = approx
                .iter()
                .map(|point| {
                    let x = (point.x - 1).max(0) as f64;
                    let y = (point.y - 1).max(0) as f64;
                    normalize.apply([x, y])
                })
                .collect();
            Some(ring)
        })
        .collect()
}

/// Casts a `[m, 2]` array of normalized vertices to a single ring.
pub fn vertices_to_ring(vertices: ArrayView2<'_, f32>) -> Vec<[f64; 2]> {
    if vertices.nrows() < 3 {
        warn!("a polygon of {} vertices is degenerate", vertices.nrows());
    }

    vertices
        .outer_iter()
        .map(|vertex| [vertex[0] as f64, vertex[1] as f64])
        .collect()
}
