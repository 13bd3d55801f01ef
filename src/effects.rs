use crate::config::EffectsConfig;

pub const CARD_HOVER_TRANSFORM: &str = "translateY(-10px) scale(1.02)";
pub const CARD_REST_TRANSFORM: &str = "translateY(0) scale(1)";

pub fn card_transform(hovered: bool) -> &'static str {
    if hovered {
        CARD_HOVER_TRANSFORM
    } else {
        CARD_REST_TRANSFORM
    }
}

/// Shapes later in registration order move faster.
pub fn parallax_speed(index: usize, config: &EffectsConfig) -> f64 {
    config.parallax_base_speed + index as f64 * config.parallax_speed_step
}

pub fn parallax_offset(scroll_y: f64, index: usize, config: &EffectsConfig) -> f64 {
    scroll_y * parallax_speed(index, config)
}

pub fn shape_transform(offset: f64) -> String {
    format!("translateY({offset}px)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_transform() {
        assert_eq!(card_transform(true), "translateY(-10px) scale(1.02)");
        assert_eq!(card_transform(false), "translateY(0) scale(1)");
    }

    #[test]
    fn test_parallax_speed_grows_with_index() {
        let config = EffectsConfig::default();
        let speeds = (0..config.shape_count)
            .map(|i| parallax_speed(i, &config))
            .collect::<Vec<_>>();
        assert!(speeds.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(speeds[0], 0.5);
    }

    #[test]
    fn test_parallax_offset() {
        let config = EffectsConfig::default();
        assert_eq!(parallax_offset(0.0, 2, &config), 0.0);
        assert_eq!(parallax_offset(100.0, 0, &config), 50.0);
        assert!(parallax_offset(100.0, 2, &config) > parallax_offset(100.0, 1, &config));
        assert_eq!(shape_transform(50.0), "translateY(50px)");
    }
}
