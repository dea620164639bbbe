//! Anchor coordinates derived from the current style.
//!
//! These helpers compute normalized coordinates for legends and pad-anchored
//! labels from the values of the registry's current style. They do no layout
//! solving; the arithmetic mirrors how the style values are defined.

use crate::style::{StyleError, Styles};

/// Default inward offset from a pad margin, in normalized coordinates.
pub const DEFAULT_PAD_OFFSET: f64 = 0.005;

/// Horizontal anchor within a pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

/// Vertical anchor within a pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Center,
    Bottom,
}

/// Legend placement with optional overrides of the current style's defaults.
///
/// A legend box grows downward from its top edge: `y1 = y2 - dy * n` for `n`
/// entries of height `dy`. The corners default to the current style's
/// `legend_x1`, `legend_x2`, `legend_y2` and `legend_dy` values; each can be
/// overridden individually.
///
/// # Example
///
/// ```rust
/// use plotstyle::{LegendLayout, Styles};
///
/// let styles = Styles::standard();
/// let (x1, y1, x2, y2) = LegendLayout::new().y2(0.88).coords(&styles, 3)?;
/// assert_eq!(y2, 0.88);
/// assert!(y1 < y2);
/// assert!(x1 < x2);
/// # Ok::<(), plotstyle::StyleError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LegendLayout {
    x1: Option<f64>,
    x2: Option<f64>,
    y2: Option<f64>,
    dy: Option<f64>,
}

impl LegendLayout {
    /// Creates a layout that takes all values from the current style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the left edge.
    pub fn x1(mut self, x1: f64) -> Self {
        self.x1 = Some(x1);
        self
    }

    /// Overrides the right edge.
    pub fn x2(mut self, x2: f64) -> Self {
        self.x2 = Some(x2);
        self
    }

    /// Overrides the top edge.
    pub fn y2(mut self, y2: f64) -> Self {
        self.y2 = Some(y2);
        self
    }

    /// Overrides the per-entry height.
    pub fn dy(mut self, dy: f64) -> Self {
        self.dy = Some(dy);
        self
    }

    /// Computes the legend corners `(x1, y1, x2, y2)` for `n_entries`.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::MissingValue`] or [`StyleError::NotANumber`] if
    /// a non-overridden default is absent from the current style.
    pub fn coords(
        &self,
        styles: &Styles,
        n_entries: usize,
    ) -> Result<(f64, f64, f64, f64), StyleError> {
        let x1 = match self.x1 {
            Some(x1) => x1,
            None => styles.number("legend_x1")?,
        };
        let x2 = match self.x2 {
            Some(x2) => x2,
            None => styles.number("legend_x2")?,
        };
        let y2 = match self.y2 {
            Some(y2) => y2,
            None => styles.number("legend_y2")?,
        };
        let dy = match self.dy {
            Some(dy) => dy,
            None => styles.number("legend_dy")?,
        };

        let y1 = y2 - dy * n_entries as f64;

        Ok((x1, y1, x2, y2))
    }
}

/// Computes legend corners from the current style without overrides.
///
/// Shorthand for `LegendLayout::new().coords(styles, n_entries)`.
pub fn legend_coords(
    styles: &Styles,
    n_entries: usize,
) -> Result<(f64, f64, f64, f64), StyleError> {
    LegendLayout::new().coords(styles, n_entries)
}

/// Computes the normalized `(x, y)` anchor point inside a pad.
///
/// The point sits on the inner edge of the pad margins, moved inward by the
/// offsets; pass `None` to use [`DEFAULT_PAD_OFFSET`]. Margins are read from
/// the current style's `pad` group (`LeftMargin`, `RightMargin`, `TopMargin`,
/// `BottomMargin`).
///
/// # Errors
///
/// Returns [`StyleError::MissingGroup`] if the current style has no `pad`
/// group, or [`StyleError::MissingValue`] if a needed margin is absent.
///
/// # Example
///
/// ```rust
/// use plotstyle::{pad_coordinates, HAlign, Styles, VAlign};
///
/// let styles = Styles::standard();
/// let (x, y) = pad_coordinates(&styles, HAlign::Left, VAlign::Top, None, None)?;
/// assert!(x > 0.13); // just inside the left margin
/// assert!(y < 0.95); // just below the top margin
/// # Ok::<(), plotstyle::StyleError>(())
/// ```
pub fn pad_coordinates(
    styles: &Styles,
    h: HAlign,
    v: VAlign,
    h_offset: Option<f64>,
    v_offset: Option<f64>,
) -> Result<(f64, f64), StyleError> {
    let pad = styles.group("pad")?;
    let margin = |name: &str| {
        pad.number(name).ok_or_else(|| StyleError::MissingValue {
            value: format!("pad.{}", name),
            style: styles.current_name(),
        })
    };

    let h_offset = h_offset.unwrap_or(DEFAULT_PAD_OFFSET);
    let v_offset = v_offset.unwrap_or(DEFAULT_PAD_OFFSET);

    // offsets always point inward
    let x = match h {
        HAlign::Left => margin("LeftMargin")? + h_offset,
        HAlign::Center => (1.0 - margin("RightMargin")? + margin("LeftMargin")?) / 2.0,
        HAlign::Right => 1.0 - margin("RightMargin")? - h_offset,
    };

    let y = match v {
        VAlign::Top => 1.0 - margin("TopMargin")? - v_offset,
        VAlign::Center => (1.0 - margin("TopMargin")? + margin("BottomMargin")?) / 2.0,
        VAlign::Bottom => margin("BottomMargin")? + v_offset,
    };

    Ok((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props::Props;
    use crate::style::Style;

    fn test_styles() -> Styles {
        let mut styles = Styles::new();
        styles.set(
            "default",
            Style::new()
                .value("legend_x1", 0.68)
                .value("legend_x2", 0.96)
                .value("legend_y2", 0.92)
                .value("legend_dy", 0.045)
                .group(
                    "pad",
                    Props::new()
                        .prop("TopMargin", 0.05)
                        .prop("RightMargin", 0.03)
                        .prop("BottomMargin", 0.105)
                        .prop("LeftMargin", 0.13),
                ),
        );
        styles
    }

    #[test]
    fn test_legend_coords_defaults() {
        let styles = test_styles();
        let (x1, y1, x2, y2) = legend_coords(&styles, 4).unwrap();

        assert_eq!(x1, 0.68);
        assert_eq!(x2, 0.96);
        assert_eq!(y2, 0.92);
        assert!((y1 - (0.92 - 0.045 * 4.0)).abs() < 1e-12);
    }

    #[test]
    fn test_legend_coords_zero_entries() {
        let styles = test_styles();
        let (_, y1, _, y2) = legend_coords(&styles, 0).unwrap();
        assert_eq!(y1, y2);
    }

    #[test]
    fn test_legend_overrides_beat_style_values() {
        let styles = test_styles();
        let (x1, y1, x2, y2) = LegendLayout::new()
            .x1(0.2)
            .y2(0.8)
            .dy(0.1)
            .coords(&styles, 2)
            .unwrap();

        assert_eq!(x1, 0.2);
        assert_eq!(x2, 0.96); // still the style default
        assert_eq!(y2, 0.8);
        assert!((y1 - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_legend_missing_default_fails() {
        let styles = Styles::new();
        let err = legend_coords(&styles, 1).unwrap_err();
        assert!(matches!(err, StyleError::MissingValue { .. }));

        // fully overridden layouts never touch the style
        let coords = LegendLayout::new()
            .x1(0.1)
            .x2(0.9)
            .y2(0.9)
            .dy(0.05)
            .coords(&styles, 1);
        assert!(coords.is_ok());
    }

    #[test]
    fn test_pad_coordinates_corners() {
        let styles = test_styles();

        let (x, y) =
            pad_coordinates(&styles, HAlign::Left, VAlign::Top, None, None).unwrap();
        assert!((x - (0.13 + 0.005)).abs() < 1e-12);
        assert!((y - (1.0 - 0.05 - 0.005)).abs() < 1e-12);

        let (x, y) =
            pad_coordinates(&styles, HAlign::Right, VAlign::Bottom, None, None).unwrap();
        assert!((x - (1.0 - 0.03 - 0.005)).abs() < 1e-12);
        assert!((y - (0.105 + 0.005)).abs() < 1e-12);
    }

    #[test]
    fn test_pad_coordinates_center() {
        let styles = test_styles();
        let (x, y) =
            pad_coordinates(&styles, HAlign::Center, VAlign::Center, None, None).unwrap();

        assert!((x - (1.0 - 0.03 + 0.13) / 2.0).abs() < 1e-12);
        assert!((y - (1.0 - 0.05 + 0.105) / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_pad_offsets_point_inward() {
        let styles = test_styles();

        let (left_x, _) =
            pad_coordinates(&styles, HAlign::Left, VAlign::Center, Some(0.02), None).unwrap();
        let (right_x, _) =
            pad_coordinates(&styles, HAlign::Right, VAlign::Center, Some(0.02), None).unwrap();
        assert!(left_x > 0.13);
        assert!(right_x < 1.0 - 0.03);

        let (_, top_y) =
            pad_coordinates(&styles, HAlign::Center, VAlign::Top, None, Some(0.02)).unwrap();
        let (_, bottom_y) =
            pad_coordinates(&styles, HAlign::Center, VAlign::Bottom, None, Some(0.02)).unwrap();
        assert!(top_y < 1.0 - 0.05);
        assert!(bottom_y > 0.105);
    }

    #[test]
    fn test_pad_coordinates_all_alignments_stay_inside() {
        let styles = test_styles();
        let aligns = [
            (HAlign::Left, VAlign::Top),
            (HAlign::Left, VAlign::Center),
            (HAlign::Left, VAlign::Bottom),
            (HAlign::Center, VAlign::Top),
            (HAlign::Center, VAlign::Center),
            (HAlign::Center, VAlign::Bottom),
            (HAlign::Right, VAlign::Top),
            (HAlign::Right, VAlign::Center),
            (HAlign::Right, VAlign::Bottom),
        ];

        for (h, v) in aligns {
            let (x, y) = pad_coordinates(&styles, h, v, None, None).unwrap();
            assert!((0.0..=1.0).contains(&x), "x out of range for {:?}/{:?}", h, v);
            assert!((0.0..=1.0).contains(&y), "y out of range for {:?}/{:?}", h, v);
        }
    }

    #[test]
    fn test_pad_coordinates_missing_group_fails() {
        let styles = Styles::new();
        let err =
            pad_coordinates(&styles, HAlign::Left, VAlign::Top, None, None).unwrap_err();
        assert_eq!(
            err,
            StyleError::MissingGroup {
                group: "pad".to_string(),
                style: "default".to_string(),
            }
        );
    }

    #[test]
    fn test_pad_coordinates_missing_margin_fails() {
        let mut styles = Styles::new();
        styles
            .get_mut("default")
            .unwrap()
            .set_group("pad", Props::new().prop("TopMargin", 0.05));

        let err =
            pad_coordinates(&styles, HAlign::Left, VAlign::Top, None, None).unwrap_err();
        assert_eq!(
            err,
            StyleError::MissingValue {
                value: "pad.LeftMargin".to_string(),
                style: "default".to_string(),
            }
        );
    }
}
