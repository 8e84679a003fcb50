use glam::Vec3;

/// Small circular x/y drift that keeps a settled swarm alive.
///
/// `(sin(clock·ω + phase), cos(clock·ω + phase))·amplitude`, z untouched.
#[inline]
pub fn orbit_offset(clock: f64, phase: f32, frequency: f32, amplitude: f32) -> Vec3 {
    let (s, c) = (clock * frequency as f64 + phase as f64).sin_cos();
    Vec3::new(s as f32 * amplitude, c as f32 * amplitude, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orbit_radius_is_amplitude() {
        for i in 0..50 {
            let o = orbit_offset(i as f64 * 0.37, 1.1, 0.4, 1.2);
            assert!((o.length() - 1.2).abs() < 1e-5);
            assert_eq!(o.z, 0.0);
        }
    }

    #[test]
    fn test_phase_desynchronises() {
        let a = orbit_offset(2.0, 0.0, 0.4, 1.2);
        let b = orbit_offset(2.0, 1.5, 0.4, 1.2);
        assert!((a - b).length() > 0.1);
    }
}
