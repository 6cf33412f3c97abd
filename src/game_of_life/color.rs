//! Generation-count to display-color mapping

use anyhow::{bail, Context, Result};

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parse a `#rrggbb` hex string (leading `#` optional)
    pub fn from_hex(hex: &str) -> Result<Self> {
        let trimmed = hex.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.len() != 6 {
            bail!("expected 6 hex digits in color '{}'", hex);
        }

        let value = u32::from_str_radix(digits, 16)
            .with_context(|| format!("invalid hex color '{}'", hex))?;

        Ok(Self {
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        })
    }

    /// Linear interpolation toward `other`, `t` in `[0, 1]`
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let mix = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8;
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }
}

/// Maps a cell's consecutive-alive generation count to a display color:
/// newborn cells sit at `start`, cells alive for `max_generations` or longer
/// at `end`. Pure over core state; hosts use it for tinting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorRamp {
    pub start: Rgb,
    pub end: Rgb,
    pub max_generations: u32,
}

impl Default for ColorRamp {
    fn default() -> Self {
        Self {
            start: Rgb {
                r: 0x67,
                g: 0x41,
                b: 0x88,
            },
            end: Rgb {
                r: 0xF7,
                g: 0xEF,
                b: 0xE5,
            },
            max_generations: 5,
        }
    }
}

impl ColorRamp {
    /// Normalized position of a generation count on the ramp
    pub fn intensity(&self, generation: u32) -> f32 {
        let max = self.max_generations.max(1) as f32;
        (generation as f32 / max).clamp(0.0, 1.0)
    }

    pub fn color_for(&self, generation: u32) -> Rgb {
        self.start.lerp(self.end, self.intensity(generation))
    }
}
