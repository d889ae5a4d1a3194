#[inline]
pub(super) fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Uniform f32 in [0, 1)
#[inline]
pub(super) fn unit_f32(state: &mut u32) -> f32 {
    (xorshift32(state) as f64 / (u32::MAX as f64 + 1.0)) as f32
}
