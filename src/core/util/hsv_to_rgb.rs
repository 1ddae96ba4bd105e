use crate::core::data::colour::Colour;

fn channel_to_u8(channel: f64) -> u8 {
    (channel * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Converts an HSV triple to an opaque colour.
///
/// `h` is in degrees and may be any real number; it is folded onto the six
/// hexagon sectors. `s` and `v` are nominally in `[0, 1]`, and results are
/// clamped per channel.
#[must_use]
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Colour {
    let (r, g, b) = if v <= 0.0 {
        (0.0, 0.0, 0.0)
    } else if s <= 0.0 {
        (v, v, v)
    } else {
        let hf = h / 60.0;
        let sector = hf.floor();
        let f = hf - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        if !f.is_finite() {
            (v, v, v)
        } else {
            match (sector as i64).rem_euclid(6) {
                0 => (v, t, p),
                1 => (q, v, p),
                2 => (p, v, t),
                3 => (p, q, v),
                4 => (t, p, v),
                5 => (v, p, q),
                _ => (v, v, v),
            }
        }
    };

    Colour::opaque(channel_to_u8(r), channel_to_u8(g), channel_to_u8(b))
}
