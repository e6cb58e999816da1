use glam::Vec2;

/// Helmet shell silhouette as `(radius, height)` pairs from the neck opening to
/// the crown, in unit helmet space. Revolved around the Y axis to form the shell.
pub const HELMET_PROFILE: [Vec2; 13] = [
    Vec2::new(0.62, -0.95), // neck opening
    Vec2::new(0.74, -0.86),
    Vec2::new(0.86, -0.64),
    Vec2::new(0.95, -0.36),
    Vec2::new(0.99, -0.06),
    Vec2::new(0.98, 0.22),
    Vec2::new(0.93, 0.46),
    Vec2::new(0.84, 0.65),
    Vec2::new(0.70, 0.81),
    Vec2::new(0.52, 0.92),
    Vec2::new(0.31, 0.98),
    Vec2::new(0.12, 1.0),
    Vec2::new(0.0, 1.0), // crown
];

/// Point on the profile at `height`, with the outward unit normal of the
/// silhouette in `(radius, height)` space.
///
/// Heights outside the profile clamp to the nearest end segment.
pub fn surface_at(height: f32) -> (Vec2, Vec2) {
    let pts = &HELMET_PROFILE;
    let mut seg = pts.len() - 2;
    for i in 0..pts.len() - 1 {
        if height <= pts[i + 1].y {
            seg = i;
            break;
        }
    }
    let a = pts[seg];
    let b = pts[seg + 1];
    let span = b.y - a.y;
    let t = if span.abs() > 1e-6 {
        ((height - a.y) / span).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let point = a.lerp(b, t);
    (point, outward_normal(b - a))
}

/// Outward normal of a profile tangent running neck-to-crown.
#[inline]
pub fn outward_normal(tangent: Vec2) -> Vec2 {
    let n = Vec2::new(tangent.y, -tangent.x).normalize_or_zero();
    if n == Vec2::ZERO {
        Vec2::X
    } else {
        n
    }
}
