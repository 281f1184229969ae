//! Load/Store Unit (LSU).
//!
//! This module moves data between registers and the bus. Integer loads are
//! zero- or sign-extended to 32 bits by width; floating-point transfers move
//! raw bit patterns, with doubles split into two consecutive 32-bit words
//! (low word at the lower address). Word accesses go through the bus word
//! entry points, so they can reach the console ports.

use crate::common::{sign_extend, MemWidth};
use crate::core::control::FpWidth;
use crate::soc::Bus;

/// Load/Store Unit for integer and floating-point register transfers.
pub struct Lsu;

impl Lsu {
    /// Loads a value of `width` from `addr`.
    ///
    /// # Arguments
    ///
    /// * `bus` - The system bus
    /// * `addr` - Effective address (unmasked)
    /// * `width` - Access width
    /// * `signed` - Sign-extend sub-word values when true, zero-extend otherwise
    ///
    /// # Returns
    ///
    /// The loaded value extended to 32 bits.
    pub fn load(bus: &mut Bus, addr: u32, width: MemWidth, signed: bool) -> u32 {
        let raw = match width {
            MemWidth::Byte => bus.read_u8(addr) as u32,
            MemWidth::Half => bus.read_u16(addr) as u32,
            MemWidth::Word => return bus.read_u32(addr),
        };
        if signed {
            sign_extend(raw, width.bits()) as u32
        } else {
            raw
        }
    }

    /// Stores the low `width` bytes of `val` at `addr`.
    pub fn store(bus: &mut Bus, addr: u32, width: MemWidth, val: u32) {
        match width {
            MemWidth::Byte => bus.write_u8(addr, val as u8),
            MemWidth::Half => bus.write_u16(addr, val as u16),
            MemWidth::Word => bus.write_u32(addr, val),
        }
    }

    /// Loads a floating-point register bit pattern.
    ///
    /// Single loads leave the upper 32 bits of the result clear.
    pub fn load_fp(bus: &mut Bus, addr: u32, width: FpWidth) -> u64 {
        let low = bus.read_u32(addr) as u64;
        match width {
            FpWidth::Single => low,
            FpWidth::Double => low | (bus.read_u32(addr.wrapping_add(4)) as u64) << 32,
        }
    }

    /// Stores a floating-point register bit pattern.
    ///
    /// Single stores write only the low 32 bits of `val`.
    pub fn store_fp(bus: &mut Bus, addr: u32, width: FpWidth, val: u64) {
        bus.write_u32(addr, val as u32);
        if width == FpWidth::Double {
            bus.write_u32(addr.wrapping_add(4), (val >> 32) as u32);
        }
    }
}
