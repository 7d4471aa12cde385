//! Normalized RGB → `#rrggbb`.

use varex_core::errors::ProjectionError;
use varex_core::models::Rgba;

/// Hex string for normalized channels. Each channel is clamped to `[0, 1]`,
/// scaled to 255 and rounded half away from zero. Alpha is not encoded.
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    format!(
        "#{:02x}{:02x}{:02x}",
        channel_to_byte(r),
        channel_to_byte(g),
        channel_to_byte(b)
    )
}

fn channel_to_byte(channel: f64) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Decode a variable's color, rejecting non-finite channels.
pub fn decode(variable: &str, color: &Rgba) -> Result<String, ProjectionError> {
    for (channel, value) in [('r', color.r), ('g', color.g), ('b', color.b)] {
        if !value.is_finite() {
            return Err(ProjectionError::InvalidChannel {
                variable: variable.to_string(),
                channel,
            });
        }
    }
    Ok(rgb_to_hex(color.r, color.g, color.b))
}
