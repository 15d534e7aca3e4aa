// Gamma-correct mixing of two 0x00RRGGBB pixels through lookup tables.
// Visual: ink laid over the live feed at partial opacity keeps its true hue
// instead of going muddy, and no powf runs per pixel.

pub struct GammaLut {
    // sRGB(0..255) -> linear (0..1)
    srgb_to_linear: [f32; 256],
    // linear(0..1) -> sRGB(0..255), index = (linear * 4095).round()
    linear_to_srgb: [u8; 4096],
}

impl Default for GammaLut {
    fn default() -> Self {
        Self::new()
    }
}

impl GammaLut {
    /// Build both tables once at startup.
    pub fn new() -> Self {
        let mut s2l = [0.0f32; 256];
        for (v, slot) in s2l.iter_mut().enumerate() {
            let c = v as f32 / 255.0;
            *slot = if c <= 0.04045 { c / 12.92 } else { ((c + 0.055) / 1.055).powf(2.4) };
        }

        let mut l2s = [0u8; 4096];
        for (i, slot) in l2s.iter_mut().enumerate() {
            let l = (i as f32) / 4095.0;
            let s = if l <= 0.003_130_8 { 12.92 * l } else { 1.055 * l.powf(1.0 / 2.4) - 0.055 };
            *slot = (s * 255.0).round().clamp(0.0, 255.0) as u8;
        }

        Self { srgb_to_linear: s2l, linear_to_srgb: l2s }
    }

    #[inline]
    pub fn srgb_u8_to_linear(&self, v: u8) -> f32 {
        self.srgb_to_linear[v as usize]
    }

    #[inline]
    pub fn linear_to_srgb_u8(&self, l: f32) -> u8 {
        let idx = (l.clamp(0.0, 1.0) * 4095.0).round() as usize;
        self.linear_to_srgb[idx]
    }

    /// `a` of `over` on top of `base`, mixed in linear light. `a` in [0,1].
    #[inline]
    pub fn mix(&self, base: u32, over: u32, a: f32) -> u32 {
        let inv = 1.0 - a;
        let mut out = 0u32;
        for shift in [16u32, 8, 0] {
            let b = self.srgb_u8_to_linear(((base >> shift) & 0xFF) as u8);
            let o = self.srgb_u8_to_linear(((over >> shift) & 0xFF) as u8);
            out |= (self.linear_to_srgb_u8(a * o + inv * b) as u32) << shift;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_round_trip_endpoints() {
        let lut = GammaLut::new();
        assert_eq!(lut.linear_to_srgb_u8(lut.srgb_u8_to_linear(0)), 0);
        assert_eq!(lut.linear_to_srgb_u8(lut.srgb_u8_to_linear(255)), 255);
    }

    #[test]
    fn mix_extremes_pick_one_side() {
        let lut = GammaLut::new();
        assert_eq!(lut.mix(0x00_12_34_56, 0x00_FF_00_00, 0.0), 0x00_12_34_56);
        assert_eq!(lut.mix(0x00_12_34_56, 0x00_FF_00_00, 1.0), 0x00_FF_00_00);
    }

    #[test]
    fn half_mix_is_brighter_than_srgb_average() {
        let lut = GammaLut::new();
        let g = (lut.mix(0, 0x00_FF_FF_FF, 0.5) & 0xFF) as u8;
        assert!(g > 128, "linear-light midpoint should land near 188, got {g}");
    }
}
