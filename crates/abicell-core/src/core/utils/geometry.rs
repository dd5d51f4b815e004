use nalgebra::{Matrix3, Rotation3, Unit, Vector3};

/// Rotation by `angle_radians` about `axis`, following the right-hand rule.
///
/// Built as `u·uᵀ + cos θ·(I − u·uᵀ) + sin θ·[u]ₓ`; components along an axis-aligned `u` are
/// reproduced exactly (a rotation about `z` leaves `z` bit-for-bit unchanged).
pub fn rotation_from_axis_angle(axis: &Unit<Vector3<f64>>, angle_radians: f64) -> Rotation3<f64> {
    let u = axis.into_inner();
    let projector = u * u.transpose();
    let cross = u.cross_matrix();
    let (sin, cos) = angle_radians.sin_cos();
    Rotation3::from_matrix_unchecked(
        projector + (Matrix3::identity() - projector) * cos + cross * sin,
    )
}

/// The angle that rotates `from` onto the direction of `to` about `axis`, in `(-π, π]`.
///
/// Positive angles are counter-clockwise when looking down `axis`.
pub fn signed_angle_between(
    from: &Vector3<f64>,
    to: &Vector3<f64>,
    axis: &Unit<Vector3<f64>>,
) -> f64 {
    from.cross(to).dot(&axis.into_inner()).atan2(from.dot(to))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    #[test]
    fn rotation_about_z_turns_x_into_y() {
        let rotation = rotation_from_axis_angle(&Vector3::z_axis(), FRAC_PI_2);
        let rotated = rotation * Vector3::x();
        assert_relative_eq!(rotated, Vector3::y(), epsilon = 1e-12);
    }

    #[test]
    fn rotation_about_z_preserves_z_exactly() {
        let rotation = rotation_from_axis_angle(&Vector3::z_axis(), 0.7);
        let rotated = rotation * Vector3::new(0.3, 0.4, 0.123456789);
        assert_eq!(rotated.z, 0.123456789);
    }

    #[test]
    fn zero_angle_is_identity() {
        let rotation = rotation_from_axis_angle(&Vector3::z_axis(), 0.0);
        assert_eq!(*rotation.matrix(), Matrix3::identity());
    }

    #[test]
    fn rotation_matches_nalgebra_for_arbitrary_axis() {
        let axis = Unit::new_normalize(Vector3::new(1.0, 2.0, 3.0));
        let ours = rotation_from_axis_angle(&axis, 1.1);
        let reference = Rotation3::from_axis_angle(&axis, 1.1);
        assert_relative_eq!(*ours.matrix(), *reference.matrix(), epsilon = 1e-12);
    }

    #[test]
    fn signed_angle_respects_orientation() {
        let z = Vector3::z_axis();
        assert_relative_eq!(
            signed_angle_between(&Vector3::x(), &Vector3::new(1.0, 1.0, 0.0), &z),
            FRAC_PI_4
        );
        assert_relative_eq!(
            signed_angle_between(&Vector3::x(), &Vector3::new(1.0, -1.0, 0.0), &z),
            -FRAC_PI_4
        );
        let along = Vector3::new(2.0, 0.0, 0.0);
        assert_eq!(signed_angle_between(&Vector3::x(), &along, &z), 0.0);
    }
}
