/// Hash float to [0,1).
pub fn hash11(p: f32) -> f32 {
    let mut p = fract(p * 0.1031);
    p *= p + 33.33;
    p *= p + p;
    fract(p)
}

/// GLSL `fract`: always in [0,1), also for negative inputs.
#[inline]
pub fn fract(x: f32) -> f32 {
    x - x.floor()
}

/// Inverse of a `t = index/total` split: maps `t` in `[start, start+len)` onto `[0,1)`.
#[inline]
pub fn local_t(t: f32, start: f32, len: f32) -> f32 {
    (t - start) / len
}
