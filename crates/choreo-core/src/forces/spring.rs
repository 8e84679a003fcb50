use glam::Vec3;

/// One spring-damper step toward `target`:
/// `v = v·damping + (target − p)·spring; p += v`.
///
/// With the default constants (0.045, 0.88) the response is slightly
/// underdamped: particles overshoot a little before settling.
#[inline]
pub fn spring_step(position: &mut Vec3, velocity: &mut Vec3, target: Vec3, spring: f32, damping: f32) {
    *velocity = *velocity * damping + (target - *position) * spring;
    *position += *velocity;
}

/// Apply [`spring_step`] to whole columns.
pub fn integrate(positions: &mut [Vec3], velocities: &mut [Vec3], targets: &[Vec3], spring: f32, damping: f32) {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        positions
            .par_iter_mut()
            .zip(velocities.par_iter_mut())
            .zip(targets.par_iter())
            .for_each(|((p, v), t)| spring_step(p, v, *t, spring, damping));
    }

    #[cfg(not(feature = "parallel"))]
    for ((p, v), t) in positions.iter_mut().zip(velocities.iter_mut()).zip(targets) {
        spring_step(p, v, *t, spring, damping);
    }
}
