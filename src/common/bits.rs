//! Bit-field helpers shared by the decoders and the load unit.

/// Sign-extends the low `bits` bits of `value` to a full 32-bit signed value.
///
/// Bits above `bits` are ignored. `bits` must be in `1..=32`.
///
/// # Examples
///
/// ```
/// use rv32_emulator::common::sign_extend;
///
/// assert_eq!(sign_extend(0x3f, 6), -1);
/// assert_eq!(sign_extend(0x1f, 6), 31);
/// assert_eq!(sign_extend(0x800, 12), -2048);
/// ```
#[inline]
pub fn sign_extend(value: u32, bits: u32) -> i32 {
    debug_assert!((1..=32).contains(&bits));
    let shift = 32 - bits;
    ((value << shift) as i32) >> shift
}
