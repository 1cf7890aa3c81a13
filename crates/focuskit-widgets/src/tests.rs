#[cfg(test)]
mod tests {
    use crate::config::{colors, dimens, drawables};
    use crate::*;
    use focuskit_core::*;
    use std::time::Duration;

    #[test]
    fn test_default_config() {
        let cfg = WidgetConfig::default();
        assert_eq!(cfg.focus_scale_percent, 0.03);
        assert_eq!(cfg.focus_animation.duration, Duration::from_millis(150));
        assert_eq!(cfg.focus_animation.easing, Easing::EaseInOut);
        assert_eq!(cfg.toggle_view_width, 500);
        assert_eq!(cfg.card_width, 500);
    }

    #[test]
    fn test_config_from_resources_overrides_defined_tokens() {
        let res = StaticResources::new()
            .with_dimen(dimens::PC_CORNER_RADIUS, 12)
            .with_dimen(dimens::PC_VERTICAL_PADDING, 10)
            .with_dimen(dimens::PC_MIN_CONTENT_WIDTH, 640)
            .with_color(colors::PC_CARD_FOCUSED, Color::WHITE);
        let cfg = WidgetConfig::from_resources(&res);

        assert_eq!(cfg.corner_radius_px, 12.0);
        assert_eq!(cfg.vertical_padding, 10);
        assert_eq!(cfg.navigation_width, 640);
        assert_eq!(cfg.focused_color, Color::WHITE);

        let defaults = WidgetConfig::default();
        assert_eq!(cfg.horizontal_padding, defaults.horizontal_padding);
        assert_eq!(cfg.unfocused_color, defaults.unfocused_color);
        assert_eq!(cfg.rectangle_colors().focused, Color::WHITE);
    }

    #[test]
    fn test_config_from_empty_resources_is_default() {
        assert_eq!(
            WidgetConfig::from_resources(&StaticResources::new()),
            WidgetConfig::default()
        );
    }

    #[test]
    fn test_toggle_icons_follow_checked_state() {
        let icons = ToggleIcons {
            focused_checked: DrawableId("f_on"),
            unfocused_checked: DrawableId("u_on"),
            focused_unchecked: DrawableId("f_off"),
            unfocused_unchecked: DrawableId("u_off"),
        };
        assert_eq!(icons.pair(true), (DrawableId("f_on"), DrawableId("u_on")));
        assert_eq!(icons.pair(false), (DrawableId("f_off"), DrawableId("u_off")));

        let defaults = ToggleIcons::default();
        assert_eq!(defaults.pair(true).1, drawables::IMG_TOGGLE_ON);
        assert_eq!(defaults.pair(false).1, drawables::IMG_TOGGLE_OFF);
    }
}
