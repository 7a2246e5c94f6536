//! Seeded gradient noise.
//!
//! Improved Perlin noise over a 256-entry permutation table shuffled with a
//! seeded RNG, summed over octaves and normalized to `[0, 1]`. The RNG is
//! ChaCha8, whose output for a given seed is fixed across releases.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seed used when a sketch never calls `noise_seed`.
pub const DEFAULT_NOISE_SEED: u64 = 0;

const DEFAULT_OCTAVES: u32 = 4;
const DEFAULT_FALLOFF: f64 = 0.5;

/// Deterministic coherent noise generator.
#[derive(Debug, Clone)]
pub struct Noise {
    perm: Vec<u8>,
    octaves: u32,
    falloff: f64,
}

fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

fn lerp(t: f64, a: f64, b: f64) -> f64 {
    a + t * (b - a)
}

/// Dot product of the offset with one of twelve cube-edge gradients.
fn grad(hash: u8, x: f64, y: f64, z: f64) -> f64 {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = match h {
        h if h < 4 => y,
        12 | 14 => x,
        _ => z,
    };
    (if h & 1 == 0 { u } else { -u }) + (if h & 2 == 0 { v } else { -v })
}

impl Noise {
    /// Generator with the default octave settings and a table derived from `seed`.
    pub fn new(seed: u64) -> Self {
        let mut table: Vec<u8> = (0..=255).collect();
        table.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));

        // Doubled so lookups of `perm[i + 1]` never wrap
        let mut perm = Vec::with_capacity(512);
        perm.extend_from_slice(&table);
        perm.extend_from_slice(&table);

        Self {
            perm,
            octaves: DEFAULT_OCTAVES,
            falloff: DEFAULT_FALLOFF,
        }
    }

    /// Current `(octaves, falloff)`.
    pub fn detail(&self) -> (u32, f64) {
        (self.octaves, self.falloff)
    }

    /// Set the octave count and the amplitude ratio between octaves.
    ///
    /// Zero octaves or a falloff outside `(0, 1]` is ignored.
    pub fn set_detail(&mut self, octaves: u32, falloff: f64) {
        if octaves == 0 || !(falloff > 0.0 && falloff <= 1.0) {
            log::warn!(
                target: "sketch",
                "ignoring noise_detail({}, {}): need octaves >= 1 and falloff in (0, 1]",
                octaves,
                falloff
            );
            return;
        }
        self.octaves = octaves;
        self.falloff = falloff;
    }

    fn p(&self, i: usize) -> usize {
        self.perm[i] as usize
    }

    /// Single-octave noise in roughly `[-1, 1]`; zero on integer lattice points.
    pub fn perlin(&self, x: f64, y: f64, z: f64) -> f64 {
        let (xf, yf, zf) = (x.floor(), y.floor(), z.floor());
        let xi = (xf as i64).rem_euclid(256) as usize;
        let yi = (yf as i64).rem_euclid(256) as usize;
        let zi = (zf as i64).rem_euclid(256) as usize;
        let (x, y, z) = (x - xf, y - yf, z - zf);
        let (u, v, w) = (fade(x), fade(y), fade(z));

        let a = self.p(xi) + yi;
        let aa = self.p(a) + zi;
        let ab = self.p(a + 1) + zi;
        let b = self.p(xi + 1) + yi;
        let ba = self.p(b) + zi;
        let bb = self.p(b + 1) + zi;

        let g = |i: usize, dx: f64, dy: f64, dz: f64| grad(self.perm[i], dx, dy, dz);

        lerp(
            w,
            lerp(
                v,
                lerp(u, g(aa, x, y, z), g(ba, x - 1.0, y, z)),
                lerp(u, g(ab, x, y - 1.0, z), g(bb, x - 1.0, y - 1.0, z)),
            ),
            lerp(
                v,
                lerp(u, g(aa + 1, x, y, z - 1.0), g(ba + 1, x - 1.0, y, z - 1.0)),
                lerp(
                    u,
                    g(ab + 1, x, y - 1.0, z - 1.0),
                    g(bb + 1, x - 1.0, y - 1.0, z - 1.0),
                ),
            ),
        )
    }

    /// Octave-summed noise normalized to `[0, 1]`.
    pub fn get(&self, x: f64, y: f64, z: f64) -> f64 {
        let mut total = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut norm = 0.0;
        for _ in 0..self.octaves {
            total += amplitude * self.perlin(x * frequency, y * frequency, z * frequency);
            norm += amplitude;
            amplitude *= self.falloff;
            frequency *= 2.0;
        }
        ((total / norm + 1.0) / 2.0).clamp(0.0, 1.0)
    }
}
