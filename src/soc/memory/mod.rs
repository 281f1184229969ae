//! Main Memory.
//!
//! A flat byte array whose capacity is a power of two. Every access masks its
//! address with `capacity - 1` first, so the address space behaves as a ring:
//! there is no out-of-range access and no fault path.
//!
//! Multi-byte values are always composed from explicit little-endian bytes.
//! Naturally aligned accesses take a slice fast path; unaligned accesses are
//! decomposed into single-byte accesses, each masked on its own so that a
//! value straddling the top of memory wraps to address zero. Both paths are
//! observably identical.

/// Byte-addressable main memory with power-of-two wraparound.
pub struct Memory {
    data: Vec<u8>,
    mask: u32,
}

impl Memory {
    /// Creates a zero-filled memory of `size` bytes.
    ///
    /// `size` must be a power of two between 4 bytes and 4 GiB; the
    /// configuration layer validates this before construction.
    pub fn new(size: usize) -> Self {
        debug_assert!(size.is_power_of_two() && size >= 4);
        Self {
            data: vec![0; size],
            mask: (size - 1) as u32,
        }
    }

    /// Returns the capacity in bytes.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Returns the address mask applied to every access.
    pub fn mask(&self) -> u32 {
        self.mask
    }

    #[inline]
    fn index(&self, addr: u32) -> usize {
        (addr & self.mask) as usize
    }

    /// Copies `image` into memory starting at offset 0.
    ///
    /// Images larger than the capacity are truncated. Returns the number of
    /// bytes actually written; the remainder of memory is left untouched.
    pub fn load_image(&mut self, image: &[u8]) -> usize {
        let len = image.len().min(self.data.len());
        self.data[..len].copy_from_slice(&image[..len]);
        len
    }

    #[inline]
    pub fn read_u8(&self, addr: u32) -> u8 {
        self.data[self.index(addr)]
    }

    #[inline]
    pub fn write_u8(&mut self, addr: u32, val: u8) {
        let idx = self.index(addr);
        self.data[idx] = val;
    }

    pub fn read_u16(&self, addr: u32) -> u16 {
        if addr & 0x1 == 0 {
            let idx = self.index(addr);
            u16::from_le_bytes([self.data[idx], self.data[idx + 1]])
        } else {
            u16::from_le_bytes([self.read_u8(addr), self.read_u8(addr.wrapping_add(1))])
        }
    }

    pub fn write_u16(&mut self, addr: u32, val: u16) {
        let bytes = val.to_le_bytes();
        if addr & 0x1 == 0 {
            let idx = self.index(addr);
            self.data[idx..idx + 2].copy_from_slice(&bytes);
        } else {
            for (i, byte) in bytes.into_iter().enumerate() {
                self.write_u8(addr.wrapping_add(i as u32), byte);
            }
        }
    }

    pub fn read_u32(&self, addr: u32) -> u32 {
        if addr & 0x3 == 0 {
            let idx = self.index(addr);
            u32::from_le_bytes([
                self.data[idx],
                self.data[idx + 1],
                self.data[idx + 2],
                self.data[idx + 3],
            ])
        } else {
            u32::from_le_bytes([
                self.read_u8(addr),
                self.read_u8(addr.wrapping_add(1)),
                self.read_u8(addr.wrapping_add(2)),
                self.read_u8(addr.wrapping_add(3)),
            ])
        }
    }

    pub fn write_u32(&mut self, addr: u32, val: u32) {
        let bytes = val.to_le_bytes();
        if addr & 0x3 == 0 {
            let idx = self.index(addr);
            self.data[idx..idx + 4].copy_from_slice(&bytes);
        } else {
            for (i, byte) in bytes.into_iter().enumerate() {
                self.write_u8(addr.wrapping_add(i as u32), byte);
            }
        }
    }
}
