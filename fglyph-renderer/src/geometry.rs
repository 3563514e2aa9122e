//! Vertex data for the "F" glyph.

/// Position components per vertex.
pub(crate) const COMPONENTS_PER_VERTEX: i32 = 3;

/// Vertices in the glyph mesh (6 triangles, no indexing).
pub(crate) const VERTEX_COUNT: i32 = 18;

/// The "F" glyph in model space: three rectangular strokes, each split into
/// two triangles. Y grows downward to match the pixel-space projection.
#[rustfmt::skip]
pub(crate) const GLYPH_VERTICES: [f32; (VERTEX_COUNT * COMPONENTS_PER_VERTEX) as usize] = [
    // left column
      0.0,   0.0, 0.0,
     30.0,   0.0, 0.0,
      0.0, 150.0, 0.0,
      0.0, 150.0, 0.0,
     30.0,   0.0, 0.0,
     30.0, 150.0, 0.0,

    // top rung
     30.0,   0.0, 0.0,
    100.0,   0.0, 0.0,
     30.0,  30.0, 0.0,
     30.0,  30.0, 0.0,
    100.0,   0.0, 0.0,
    100.0,  30.0, 0.0,

    // middle rung
     30.0,  60.0, 0.0,
     67.0,  60.0, 0.0,
     30.0,  90.0, 0.0,
     30.0,  90.0, 0.0,
     67.0,  60.0, 0.0,
     67.0,  90.0, 0.0,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_vertex_count() {
        assert_eq!(
            GLYPH_VERTICES.len(),
            (VERTEX_COUNT * COMPONENTS_PER_VERTEX) as usize
        );
        // whole triangles only
        assert_eq!(VERTEX_COUNT % 3, 0);
    }

    #[test]
    fn test_glyph_is_flat_and_inside_its_box() {
        let vertices = GLYPH_VERTICES.chunks_exact(3);

        for v in vertices {
            assert!((0.0..=100.0).contains(&v[0]), "x out of range: {}", v[0]);
            assert!((0.0..=150.0).contains(&v[1]), "y out of range: {}", v[1]);
            assert_eq!(v[2], 0.0, "glyph is a flat mesh");
        }
    }
}
