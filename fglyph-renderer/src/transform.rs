use crate::mat4::Mat4;

/// Model transform parameters for the glyph mesh.
#[derive(Debug, Clone, Copy)]
pub struct Transform {
    /// Translation in canvas pixels.
    pub translation: [f32; 3],
    /// Euler angles in radians, applied X then Y then Z.
    pub rotation: [f32; 3],
    /// Per-axis scale factors.
    pub scale: [f32; 3],
}

impl Transform {
    /// Left-multiplies the model transform onto `base` in the fixed
    /// translate, rotate-X, rotate-Y, rotate-Z, scale order.
    ///
    /// With `base` holding the projection, the vertex is scaled first and
    /// projected last.
    pub fn apply_to(&self, base: Mat4) -> Mat4 {
        let [tx, ty, tz] = self.translation;
        let [rx, ry, rz] = self.rotation;
        let [sx, sy, sz] = self.scale;

        base.translate(tx, ty, tz)
            .x_rotate(rx)
            .y_rotate(ry)
            .z_rotate(rz)
            .scale(sx, sy, sz)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: [0.0; 3],
            rotation: [0.0; 3],
            scale: [1.0; 3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_transform_preserves_base() {
        let base = Mat4::projection(640.0, 480.0, 400.0);
        let m = Transform::default().apply_to(base);

        for (a, e) in m.data.iter().zip(base.data.iter()) {
            assert!((a - e).abs() < 1e-6);
        }
    }

    #[test]
    fn test_demo_matrix_golden_values() {
        // canvas 300x150, the demo bin's parameters; expected values
        // computed independently in f64
        let transform = Transform {
            translation: [45.0, 150.0, 0.0],
            rotation: [
                40.0_f32.to_radians(),
                25.0_f32.to_radians(),
                325.0_f32.to_radians(),
            ],
            scale: [1.0, 1.0, 1.0],
        };
        let m = transform.apply_to(Mat4::projection(300.0, 150.0, 400.0));

        #[rustfmt::skip]
        let expected: [f32; 16] = [
            0.004949359,  0.002891457, -0.003169418, 0.0,
            0.003465579, -0.010444281,  0.001704243, 0.0,
            0.002817455,  0.007767512,  0.003471360, 0.0,
            -0.7,        -1.0,          0.0,         1.0,
        ];
        for (i, (a, e)) in m.data.iter().zip(expected.iter()).enumerate() {
            assert!((a - e).abs() < 1e-5, "element {i}: {a} != {e}");
        }
    }

    #[test]
    fn test_rotation_only_keeps_translation_row_clean() {
        let transform = Transform {
            rotation: [0.4, 1.1, 2.0],
            ..Transform::default()
        };
        let m = transform.apply_to(Mat4::identity());

        // rotations never touch the translation row
        for (i, value) in m.data[12..15].iter().enumerate() {
            assert!(value.abs() < 1e-6, "translation component {i}: {value}");
        }
        assert!((m.data[15] - 1.0).abs() < 1e-6);
    }
}
