use bevy::math::{Quat, Vec3};

/// Interior angle opposite to `opposite`, in a triangle with the other two sides
/// `side_b` and `side_c`.
///
/// The cosine is clamped to `[-1, 1]` so near-degenerate triangles don't produce NaN.
/// A triangle with a zero-length adjacent side has no defined angle and yields `0`.
pub fn law_of_cosines(opposite: f32, side_b: f32, side_c: f32) -> f32 {
    let denom = 2. * side_b * side_c;
    if denom <= 0. {
        return 0.;
    }

    let cos_angle = (side_b * side_b + side_c * side_c - opposite * opposite) / denom;
    cos_angle.clamp(-1., 1.).acos()
}

/// Shortest rotation taking direction `from` onto direction `to`.
///
/// Returns `None` if either vector has no usable direction.
pub fn rotation_arc(from: Vec3, to: Vec3) -> Option<Quat> {
    let from = from.try_normalize()?;
    let to = to.try_normalize()?;
    Some(Quat::from_rotation_arc(from, to))
}

/// Unsigned angle between `from` and `to`, signed by which side of `axis` the
/// rotation goes around.
///
/// Exactly opposite vectors count as a positive half turn. Zero vectors give `0`.
pub fn signed_angle(from: Vec3, to: Vec3, axis: Vec3) -> f32 {
    if from.length_squared() < f32::MIN_POSITIVE || to.length_squared() < f32::MIN_POSITIVE {
        return 0.;
    }

    let angle = from.angle_between(to);
    if axis.dot(from.cross(to)) < 0. {
        -angle
    } else {
        angle
    }
}

/// Projects `vector` onto the plane through the origin with the given unit `normal`.
pub fn project_on_plane(vector: Vec3, normal: Vec3) -> Vec3 {
    vector.reject_from_normalized(normal)
}
