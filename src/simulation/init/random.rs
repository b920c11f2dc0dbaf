/// xorshift32 step (Marsaglia 13/17/5). A zero state would stick at zero,
/// so it is nudged to 1 first.
#[inline]
pub(super) fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    if x == 0 {
        x = 1;
    }
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}
