//! The built-in default style.

use once_cell::sync::Lazy;

use crate::props::Props;
use crate::style::Style;

/// Shared text size, in pixels (font precision 3).
const TEXT_SIZE: i64 = 22;

static DEFAULT_STYLE: Lazy<Style> = Lazy::new(build_default_style);

/// Returns the built-in default style.
///
/// The preset carries one property group per target category plus a handful
/// of top-level values shared across groups.
/// [`Styles::standard`](crate::Styles::standard) installs it as the default
/// style; the values suit a single-pad 800x640 canvas with axis titles and
/// labels in a fixed-pixel font.
pub fn default_style() -> Style {
    DEFAULT_STYLE.clone()
}

fn build_default_style() -> Style {
    Style::new()
        .value("canvas_width", 800)
        .value("canvas_height", 640)
        .value("text_size", TEXT_SIZE)
        .value("auto_ticklength", 0.015)
        .value("legend_x1", 0.68)
        .value("legend_x2", 0.96)
        .value("legend_y2", 0.92)
        .value("legend_dy", 0.045)
        // named palette indices
        .group(
            "colors",
            Props::new()
                .prop("black", 1)
                .prop("blue", 601)
                .prop("red", 628)
                .prop("magenta", 617)
                .prop("yellow", 798)
                .prop("green", 418)
                .prop("brightgreen", 413)
                .prop("darkgreen", 420)
                .prop("creamblue", 38)
                .prop("creamred", 46)
                .prop("white", 10),
        )
        // global graphics state
        .group("style", Props::new().prop("OptStat", 0))
        .group(
            "canvas",
            Props::new()
                .prop("TopMargin", 0)
                .prop("RightMargin", 0)
                .prop("BottomMargin", 0)
                .prop("LeftMargin", 0)
                .prop("FillStyle", 1001),
        )
        .group(
            "pad",
            Props::new()
                .prop("Pad", (0, 0, 1, 1))
                .prop("TopMargin", 0.05)
                .prop("RightMargin", 0.03)
                .prop("BottomMargin", 0.105)
                .prop("LeftMargin", 0.13)
                .prop("FillStyle", 4000)
                .prop("Ticks", (true, true)),
        )
        .group(
            "axis",
            Props::new()
                .prop("TitleFont", 43)
                .prop("TitleSize", 25)
                .prop("LabelFont", 43)
                .prop("LabelSize", TEXT_SIZE),
        )
        .group(
            "latex",
            Props::new()
                .prop("TextFont", 43)
                .prop("TextSize", TEXT_SIZE)
                .prop("TextAlign", 11)
                .prop("NDC", true),
        )
        .group(
            "legend",
            Props::new()
                .prop("BorderSize", 0)
                .prop("FillStyle", 0)
                .prop("FillColor", 0)
                .prop("LineStyle", 0)
                .prop("LineColor", 0)
                .prop("LineWidth", 0)
                .prop("TextFont", 43)
                .prop("TextSize", TEXT_SIZE)
                .prop("ColumnSeparation", 0.0),
        )
        .group(
            "hist",
            Props::new()
                .prop("LineWidth", 2)
                .prop("LineColor", 1)
                .prop("MarkerColor", 1),
        )
        .group(
            "graph",
            Props::new()
                .prop("LineColor", 1)
                .prop("LineWidth", 2)
                .prop("FillColor", 0)
                .prop("MarkerStyle", 10)
                .prop("MarkerColor", 1),
        )
        .group(
            "line",
            Props::new()
                .prop("LineWidth", 2)
                .prop("LineColor", 1)
                .prop("NDC", true),
        )
        .group(
            "box",
            Props::new()
                .prop("LineWidth", 2)
                .prop("LineColor", 1)
                .prop("FillColor", 0),
        )
        .group("func", Props::new().prop("LineWidth", 2).prop("LineColor", 1))
        .group(
            "ellipse",
            Props::new().prop("LineWidth", 1).prop("LineColor", 1),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Styles;
    use crate::value::Value;

    #[test]
    fn test_preset_top_level_values() {
        let style = default_style();
        assert_eq!(style.number("canvas_width"), Some(800.0));
        assert_eq!(style.number("canvas_height"), Some(640.0));
        assert_eq!(style.number("text_size"), Some(22.0));
        assert_eq!(style.number("legend_dy"), Some(0.045));
    }

    #[test]
    fn test_preset_has_all_groups() {
        let style = default_style();
        for group in [
            "colors", "style", "canvas", "pad", "axis", "latex", "legend", "hist", "graph",
            "line", "box", "func", "ellipse",
        ] {
            assert!(style.get_group(group).is_some(), "missing group {}", group);
        }
    }

    #[test]
    fn test_preset_pad_margins() {
        let style = default_style();
        let pad = style.get_group("pad").unwrap();

        assert_eq!(pad.number("TopMargin"), Some(0.05));
        assert_eq!(pad.number("RightMargin"), Some(0.03));
        assert_eq!(pad.number("BottomMargin"), Some(0.105));
        assert_eq!(pad.number("LeftMargin"), Some(0.13));
        assert_eq!(pad.get("Ticks"), Some(&Value::from((true, true))));
    }

    #[test]
    fn test_preset_legend_text_font() {
        let style = default_style();
        let legend = style.get_group("legend").unwrap();

        assert_eq!(legend.number("TextFont"), Some(43.0));
        assert_eq!(legend.number("TextSize"), Some(22.0));
        assert_eq!(legend.number("BorderSize"), Some(0.0));
    }

    #[test]
    fn test_preset_colors() {
        let style = default_style();
        let colors = style.get_group("colors").unwrap();

        assert_eq!(colors.get("black"), Some(&Value::Int(1)));
        assert_eq!(colors.get("blue"), Some(&Value::Int(601)));
        assert_eq!(colors.get("red"), Some(&Value::Int(628)));
    }

    #[test]
    fn test_standard_registry_uses_preset() {
        let styles = Styles::standard();
        assert_eq!(styles.number("canvas_width"), Ok(800.0));
        assert!(styles.group("hist").is_ok());
    }

    #[test]
    fn test_preset_is_cloned_not_shared() {
        let mut a = default_style();
        a.set_value("canvas_width", 1200);
        let b = default_style();
        assert_eq!(b.number("canvas_width"), Some(800.0));
    }
}
