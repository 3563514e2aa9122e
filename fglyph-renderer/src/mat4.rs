/// 4x4 transform matrix, stored as a row-major flat array.
///
/// Values are immutable: every operation returns a new matrix. The flat
/// array is handed to WebGL as-is (`uniformMatrix4fv` with
/// `transpose = false`), which pairs with the row-vector convention used by
/// [`Mat4::transform_point`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    pub data: [f32; 16],
}

impl Mat4 {
    #[rustfmt::skip]
    pub fn identity() -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, 0.0,
                0.0, 1.0, 0.0, 0.0,
                0.0, 0.0, 1.0, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    /// Pixel-space projection: maps `[0, width] x [0, height] x [0, depth]`
    /// into clip space, origin at the top-left of the canvas.
    ///
    /// The Y scale term is negated so screen-space Y-down lands in
    /// clip-space Y-up.
    #[rustfmt::skip]
    pub fn projection(width: f32, height: f32, depth: f32) -> Self {
        Self {
            data: [
                2.0 / width, 0.0,           0.0,         0.0,
                0.0,         -2.0 / height, 0.0,         0.0,
                0.0,         0.0,           2.0 / depth, 0.0,
                -1.0,        1.0,           0.0,         1.0,
            ],
        }
    }

    #[rustfmt::skip]
    pub fn translation(tx: f32, ty: f32, tz: f32) -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, 0.0,
                0.0, 1.0, 0.0, 0.0,
                0.0, 0.0, 1.0, 0.0,
                tx,  ty,  tz,  1.0,
            ],
        }
    }

    /// Rotation about the X axis, angle in radians.
    #[rustfmt::skip]
    pub fn x_rotation(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();

        Self {
            data: [
                1.0, 0.0, 0.0, 0.0,
                0.0, c,   s,   0.0,
                0.0, -s,  c,   0.0,
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    /// Rotation about the Y axis, angle in radians.
    #[rustfmt::skip]
    pub fn y_rotation(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();

        Self {
            data: [
                c,   0.0, -s,  0.0,
                0.0, 1.0, 0.0, 0.0,
                s,   0.0, c,   0.0,
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    /// Rotation about the Z axis, angle in radians.
    #[rustfmt::skip]
    pub fn z_rotation(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();

        Self {
            data: [
                c,   s,   0.0, 0.0,
                -s,  c,   0.0, 0.0,
                0.0, 0.0, 1.0, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    #[rustfmt::skip]
    pub fn scaling(sx: f32, sy: f32, sz: f32) -> Self {
        Self {
            data: [
                sx,  0.0, 0.0, 0.0,
                0.0, sy,  0.0, 0.0,
                0.0, 0.0, sz,  0.0,
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    /// Matrix product computing `other * self` in row-major storage.
    ///
    /// The argument is left-multiplied onto the accumulated matrix: in a
    /// chain like `projection.translate(..).x_rotate(..)` the projection
    /// stays outermost, so the rotation reaches the vertex first and the
    /// projection last.
    pub fn multiply(&self, other: &Mat4) -> Mat4 {
        let a = &self.data;
        let b = &other.data;

        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                out[row * 4 + col] =
                    (0..4).map(|k| b[row * 4 + k] * a[k * 4 + col]).sum();
            }
        }

        Mat4 { data: out }
    }

    pub fn translate(&self, tx: f32, ty: f32, tz: f32) -> Mat4 {
        self.multiply(&Mat4::translation(tx, ty, tz))
    }

    pub fn x_rotate(&self, angle: f32) -> Mat4 {
        self.multiply(&Mat4::x_rotation(angle))
    }

    pub fn y_rotate(&self, angle: f32) -> Mat4 {
        self.multiply(&Mat4::y_rotation(angle))
    }

    pub fn z_rotate(&self, angle: f32) -> Mat4 {
        self.multiply(&Mat4::z_rotation(angle))
    }

    pub fn scale(&self, sx: f32, sy: f32, sz: f32) -> Mat4 {
        self.multiply(&Mat4::scaling(sx, sy, sz))
    }

    /// Applies the matrix to a point with the row-vector convention
    /// `v' = v * M`; `w` is assumed 1.
    pub fn transform_point(&self, point: [f32; 3]) -> [f32; 4] {
        let m = &self.data;
        let [x, y, z] = point;

        let mut out = [0.0; 4];
        for (col, value) in out.iter_mut().enumerate() {
            *value = x * m[col] + y * m[4 + col] + z * m[8 + col] + m[12 + col];
        }

        out
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    fn assert_mat_eq(actual: &Mat4, expected: &Mat4) {
        for (i, (a, e)) in actual.data.iter().zip(expected.data.iter()).enumerate() {
            assert!((a - e).abs() < EPS, "element {i}: {a} != {e}");
        }
    }

    fn transpose(m: &Mat4) -> Mat4 {
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                out[col * 4 + row] = m.data[row * 4 + col];
            }
        }
        Mat4 { data: out }
    }

    #[test]
    fn test_projection_maps_origin_to_top_left() {
        let p = Mat4::projection(300.0, 150.0, 400.0);
        let v = p.transform_point([0.0, 0.0, 0.0]);

        for (a, e) in v.iter().zip([-1.0, 1.0, 0.0, 1.0]) {
            assert!((a - e).abs() < EPS);
        }
    }

    #[test]
    fn test_projection_maps_far_corner_with_y_flip() {
        let p = Mat4::projection(300.0, 150.0, 400.0);
        let v = p.transform_point([300.0, 150.0, 400.0]);

        for (a, e) in v.iter().zip([1.0, -1.0, 2.0, 1.0]) {
            assert!((a - e).abs() < EPS);
        }
    }

    #[test]
    fn test_multiply_identity_both_sides() {
        let m = Mat4::projection(640.0, 480.0, 400.0)
            .translate(12.0, -3.0, 8.0)
            .z_rotate(0.7);

        assert_mat_eq(&Mat4::identity().multiply(&m), &m);
        assert_mat_eq(&m.multiply(&Mat4::identity()), &m);
    }

    #[test]
    fn test_rotations_are_orthogonal() {
        let angles = [0.0, 0.3, 1.0, std::f32::consts::PI, 5.1];

        for angle in angles {
            let rotations = [
                Mat4::x_rotation(angle),
                Mat4::y_rotation(angle),
                Mat4::z_rotation(angle),
            ];
            for rot in &rotations {
                assert_mat_eq(&rot.multiply(&transpose(rot)), &Mat4::identity());
            }
        }
    }

    #[test]
    fn test_translate_left_multiplies_onto_base() {
        // translate on a scaled base must scale the offset as well
        let base = Mat4::identity().scale(2.0, 2.0, 2.0);
        let m = base.translate(1.0, 2.0, 3.0);

        #[rustfmt::skip]
        let expected = Mat4 {
            data: [
                2.0, 0.0, 0.0, 0.0,
                0.0, 2.0, 0.0, 0.0,
                0.0, 0.0, 2.0, 0.0,
                2.0, 4.0, 6.0, 1.0,
            ],
        };
        assert_mat_eq(&m, &expected);
    }

    #[test]
    fn test_z_rotation_quarter_turn() {
        let m = Mat4::z_rotation(std::f32::consts::FRAC_PI_2);
        let v = m.transform_point([1.0, 0.0, 0.0]);

        // +X rotates onto +Y
        assert!(v[0].abs() < EPS);
        assert!((v[1] - 1.0).abs() < EPS);
    }

    #[test]
    fn test_translation_offsets_points() {
        let m = Mat4::translation(10.0, 20.0, 30.0);
        let v = m.transform_point([1.0, 2.0, 3.0]);

        for (a, e) in v.iter().zip([11.0, 22.0, 33.0, 1.0]) {
            assert!((a - e).abs() < EPS);
        }
    }
}
