/// Tiny Encryption Algorithm, 16 rounds. Hashes a pixel index and a frame
/// number into a well-mixed starting seed.
pub const fn tea(v0: u32, v1: u32) -> u32 {
    let (mut v0, mut v1) = (v0, v1);
    let mut sum = 0u32;
    let mut i = 0;
    while i < 16 {
        sum = sum.wrapping_add(0x9e37_79b9);
        v0 = v0.wrapping_add(
            (v1 << 4).wrapping_add(0xa341_316c)
                ^ v1.wrapping_add(sum)
                ^ (v1 >> 5).wrapping_add(0xc801_3ea4),
        );
        v1 = v1.wrapping_add(
            (v0 << 4).wrapping_add(0xad90_777d)
                ^ v0.wrapping_add(sum)
                ^ (v0 >> 5).wrapping_add(0x7e95_761e),
        );
        i += 1;
    }
    v0
}

/// xorshift32. A zero state stays zero, so seeds should come from [`tea`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Rng {
    state: u32,
}

impl Rng {
    pub const fn from_seed(seed: u32) -> Self {
        Self { state: seed }
    }

    pub const fn state(&self) -> u32 {
        self.state
    }

    pub const fn next_float(&mut self) -> f32 {
        f32::from_bits((self.next_u32() >> 9) | 0x3f80_0000) - 1.
    }

    pub const fn next_u32(&mut self) -> u32 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        self.state
    }
}
