//! Quantum-scale color model, channel selection and fuzzy color equivalence

use crate::io::configuration::{ALPHA_EPSILON, MINIMUM_FUZZ, QUANTUM_PER_BYTE, QUANTUM_RANGE};
use image::Rgba;
use std::ops::BitOr;

/// Opaque pure white
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
/// Opaque pure black
pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
/// Fully transparent fill color
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Map an 8-bit channel value onto the quantum scale
pub fn to_quantum(value: u8) -> f64 {
    f64::from(value) * QUANTUM_PER_BYTE
}

/// Fuzzy color equivalence on the quantum scale
///
/// The alpha difference must lie within `fuzz`. The color difference is weighted by both
/// alphas, so two nearly transparent colors always compare equal, and its root-mean-square
/// over the red, green and blue channels must also lie within `fuzz`.
pub fn is_similar(a: Rgba<u8>, b: Rgba<u8>, fuzz: f64) -> bool {
    let fuzz = fuzz.max(MINIMUM_FUZZ);
    let mut threshold = fuzz * fuzz;

    let alpha_a = to_quantum(a.0[3]);
    let alpha_b = to_quantum(b.0[3]);
    let alpha_delta = alpha_a - alpha_b;
    let mut distance = alpha_delta * alpha_delta;
    if distance > threshold {
        return false;
    }

    let scale = (alpha_a / QUANTUM_RANGE) * (alpha_b / QUANTUM_RANGE);
    if scale <= ALPHA_EPSILON {
        return true;
    }

    distance *= 3.0;
    threshold *= 3.0;
    for (&left, &right) in a.0.iter().zip(b.0.iter()).take(3) {
        let delta = to_quantum(left) - to_quantum(right);
        distance += scale * delta * delta;
        if distance > threshold {
            return false;
        }
    }

    true
}

/// Set of color channels an operation is allowed to modify
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Channels(u8);

impl Channels {
    /// Red channel
    pub const RED: Self = Self(0b0001);
    /// Green channel
    pub const GREEN: Self = Self(0b0010);
    /// Blue channel
    pub const BLUE: Self = Self(0b0100);
    /// Alpha channel
    pub const ALPHA: Self = Self(0b1000);
    /// Red, green and blue channels
    pub const RGB: Self = Self(0b0111);
    /// Every channel
    pub const RGBA: Self = Self(0b1111);

    /// Combine two channel sets
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Test whether the channel at `index` (0 = red, 3 = alpha) is selected
    pub const fn contains(self, index: usize) -> bool {
        index < 4 && self.0 & (1 << index) != 0
    }

    /// Copy the selected channels of `source` into `target`
    pub fn apply(self, target: &mut Rgba<u8>, source: Rgba<u8>) {
        for (index, (channel, &value)) in target.0.iter_mut().zip(source.0.iter()).enumerate() {
            if self.contains(index) {
                *channel = value;
            }
        }
    }
}

impl BitOr for Channels {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}
