// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presentation settings handed to the presenter as one value.

use core::time::Duration;

use color::{AlphaColor, Srgb};

/// Font weight hint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontWeight {
    /// Regular weight.
    Regular,
    /// Bold weight.
    Bold,
}

/// Font request for a label. Family selection is left to the presenter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontSpec {
    /// Point size.
    pub size: f32,
    /// Weight.
    pub weight: FontWeight,
}

impl FontSpec {
    /// A regular-weight font of the given size.
    #[must_use]
    pub const fn regular(size: f32) -> Self {
        Self {
            size,
            weight: FontWeight::Regular,
        }
    }

    /// A bold font of the given size.
    #[must_use]
    pub const fn bold(size: f32) -> Self {
        Self {
            size,
            weight: FontWeight::Bold,
        }
    }
}

/// Curve for animated thumb moves: an ease-out, damped spring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThumbAnimation {
    /// Total duration of the move.
    pub duration: Duration,
    /// Spring damping ratio in `(0, 1]`; `1.0` settles without overshoot.
    pub damping_ratio: f64,
    /// Initial spring velocity, relative to the total distance per second.
    pub initial_velocity: f64,
}

impl Default for ThumbAnimation {
    fn default() -> Self {
        Self {
            duration: Duration::from_secs(1),
            damping_ratio: 0.75,
            initial_velocity: 0.0,
        }
    }
}

/// Colors, fonts, corner radius, and animation curve of a control.
///
/// The base track is the row of unselected labels; the thumb is the highlighted
/// element showing the selected title.
#[derive(Clone, Copy, Debug)]
pub struct StyleConfig {
    /// Corner radius of both the track and the thumb.
    pub corner_radius: f64,
    /// Background color of the track.
    pub base_background: AlphaColor<Srgb>,
    /// Font of the unselected labels.
    pub base_label_font: FontSpec,
    /// Color of the unselected labels.
    pub base_label_color: AlphaColor<Srgb>,
    /// Fill color of the thumb.
    pub thumb_color: AlphaColor<Srgb>,
    /// Font of the thumb label.
    pub thumb_label_font: FontSpec,
    /// Color of the thumb label.
    pub thumb_label_color: AlphaColor<Srgb>,
    /// Curve used when the thumb snaps to a segment.
    pub animation: ThumbAnimation,
}

impl Default for StyleConfig {
    /// Light gray track with gray bold labels and a white thumb with black text.
    fn default() -> Self {
        Self {
            corner_radius: 5.0,
            base_background: AlphaColor::new([0.95, 0.95, 0.95, 1.0]),
            base_label_font: FontSpec::bold(14.0),
            base_label_color: AlphaColor::new([0.73, 0.73, 0.73, 1.0]),
            thumb_color: AlphaColor::new([1.0, 1.0, 1.0, 1.0]),
            thumb_label_font: FontSpec::bold(14.0),
            thumb_label_color: AlphaColor::new([0.0, 0.0, 0.0, 1.0]),
            animation: ThumbAnimation::default(),
        }
    }
}

impl StyleConfig {
    /// Returns this style with a different corner radius.
    #[must_use]
    pub const fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    /// Returns this style with a different thumb animation.
    #[must_use]
    pub const fn with_animation(mut self, animation: ThumbAnimation) -> Self {
        self.animation = animation;
        self
    }

    /// Returns this style with the thumb recolored.
    #[must_use]
    pub const fn with_thumb_colors(
        mut self,
        fill: AlphaColor<Srgb>,
        label: AlphaColor<Srgb>,
    ) -> Self {
        self.thumb_color = fill;
        self.thumb_label_color = label;
        self
    }
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use color::{AlphaColor, Srgb};

    use super::{FontWeight, StyleConfig, ThumbAnimation};

    #[test]
    fn defaults_match_the_stock_look() {
        let style = StyleConfig::default();
        assert_eq!(style.corner_radius, 5.0);
        assert_eq!(style.base_label_font.size, 14.0);
        assert_eq!(style.thumb_label_font.weight, FontWeight::Bold);
        assert_eq!(style.thumb_color.components, [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(style.animation.duration, Duration::from_secs(1));
        assert_eq!(style.animation.damping_ratio, 0.75);
    }

    #[test]
    fn builders_replace_single_fields() {
        let red: AlphaColor<Srgb> = AlphaColor::new([1.0, 0.0, 0.0, 1.0]);
        let quick = ThumbAnimation {
            duration: Duration::from_millis(250),
            ..ThumbAnimation::default()
        };
        let style = StyleConfig::default()
            .with_corner_radius(12.0)
            .with_animation(quick)
            .with_thumb_colors(red, red);
        assert_eq!(style.corner_radius, 12.0);
        assert_eq!(style.animation, quick);
        assert_eq!(style.thumb_label_color.components, red.components);
        assert_eq!(style.base_label_font, StyleConfig::default().base_label_font);
    }
}
