//! Color application across a target's color-related setters.

use super::error::ApplyError;
use super::{Args, PropertyTable};
use crate::value::Value;

/// The full color flag set: line, marker, fill and text.
pub const COLOR_FLAGS_ALL: &str = "lmft";

fn flag_properties(flag: char) -> Option<&'static [&'static str]> {
    match flag {
        'l' => Some(&["LineColor"]),
        'm' => Some(&["MarkerColor"]),
        'f' => Some(&["FillColor"]),
        't' => Some(&["TextColor", "LabelColor"]),
        _ => None,
    }
}

impl<T> PropertyTable<T> {
    /// Applies one color value across the target's color setters.
    ///
    /// `flags` selects the setter categories, one character each: `l` for
    /// line, `m` for marker, `f` for fill and `t` for text, which covers both
    /// `TextColor` and `LabelColor`. Pass [`COLOR_FLAGS_ALL`] to color
    /// everything. Flags are processed in order, and for each selected
    /// property name a setter is invoked only if registered, so one flag
    /// string works across heterogeneous targets.
    ///
    /// The color is passed with the usual positional unpacking: a scalar is
    /// one argument, a list is unpacked so that multi-argument color setters
    /// (RGB triplets, index-plus-alpha pairs) work unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ApplyError::UnknownColorFlag`] at the first flag character
    /// outside the four known ones; setters invoked for earlier valid flags
    /// remain applied. Setter failures propagate as [`ApplyError::Property`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use plotstyle::PropertyTable;
    ///
    /// #[derive(Default)]
    /// struct Graph {
    ///     line_color: i64,
    ///     marker_color: i64,
    /// }
    ///
    /// let table = PropertyTable::<Graph>::new()
    ///     .setter("LineColor", |g, args| {
    ///         g.line_color = args.i64_at(0)?;
    ///         Ok(())
    ///     })
    ///     .setter("MarkerColor", |g, args| {
    ///         g.marker_color = args.i64_at(0)?;
    ///         Ok(())
    ///     });
    ///
    /// let mut graph = Graph::default();
    /// // "f" and "t" setters are not registered and are skipped
    /// table.set_color(&mut graph, 628, "lmft")?;
    /// assert_eq!(graph.line_color, 628);
    /// assert_eq!(graph.marker_color, 628);
    /// # Ok::<(), plotstyle::ApplyError>(())
    /// ```
    pub fn set_color(
        &self,
        target: &mut T,
        color: impl Into<Value>,
        flags: &str,
    ) -> Result<(), ApplyError> {
        let color = color.into();

        for flag in flags.chars() {
            let names = flag_properties(flag).ok_or(ApplyError::UnknownColorFlag { flag })?;

            for name in names {
                let Some(setter) = self.setters.get(*name) else {
                    continue;
                };
                setter(target, Args::of(&color)).map_err(|source| ApplyError::Property {
                    name: (*name).to_string(),
                    source,
                })?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Default, PartialEq)]
    struct Target {
        line: Option<i64>,
        marker: Option<i64>,
        fill: Option<i64>,
        text: Option<i64>,
        label: Option<i64>,
        rgb: Option<(f64, f64, f64)>,
    }

    fn full_table() -> PropertyTable<Target> {
        PropertyTable::new()
            .setter("LineColor", |t: &mut Target, args| {
                t.line = Some(args.i64_at(0)?);
                Ok(())
            })
            .setter("MarkerColor", |t, args| {
                t.marker = Some(args.i64_at(0)?);
                Ok(())
            })
            .setter("FillColor", |t, args| {
                t.fill = Some(args.i64_at(0)?);
                Ok(())
            })
            .setter("TextColor", |t, args| {
                t.text = Some(args.i64_at(0)?);
                Ok(())
            })
            .setter("LabelColor", |t, args| {
                t.label = Some(args.i64_at(0)?);
                Ok(())
            })
    }

    #[test]
    fn test_all_flags_color_everything() {
        let mut target = Target::default();
        full_table()
            .set_color(&mut target, 601, COLOR_FLAGS_ALL)
            .unwrap();

        assert_eq!(target.line, Some(601));
        assert_eq!(target.marker, Some(601));
        assert_eq!(target.fill, Some(601));
        assert_eq!(target.text, Some(601));
        assert_eq!(target.label, Some(601));
    }

    #[test]
    fn test_flag_subset_colors_only_selected() {
        let mut target = Target::default();
        full_table().set_color(&mut target, 1, "lf").unwrap();

        assert_eq!(target.line, Some(1));
        assert_eq!(target.fill, Some(1));
        assert_eq!(target.marker, None);
        assert_eq!(target.text, None);
    }

    #[test]
    fn test_text_flag_covers_label_color() {
        let mut target = Target::default();
        full_table().set_color(&mut target, 1, "t").unwrap();

        assert_eq!(target.text, Some(1));
        assert_eq!(target.label, Some(1));
        assert_eq!(target.line, None);
    }

    #[test]
    fn test_unknown_flag_names_character() {
        let mut target = Target::default();
        let err = full_table()
            .set_color(&mut target, 1, "lx")
            .unwrap_err();

        assert_eq!(err, ApplyError::UnknownColorFlag { flag: 'x' });
    }

    #[test]
    fn test_earlier_flags_stay_applied_on_failure() {
        let mut target = Target::default();
        let err = full_table()
            .set_color(&mut target, 1, "lxm")
            .unwrap_err();

        assert_eq!(err, ApplyError::UnknownColorFlag { flag: 'x' });
        // "l" ran before the bad flag, "m" never did
        assert_eq!(target.line, Some(1));
        assert_eq!(target.marker, None);
    }

    #[test]
    fn test_missing_setters_are_skipped() {
        let table = PropertyTable::<Target>::new().setter("LineColor", |t, args| {
            t.line = Some(args.i64_at(0)?);
            Ok(())
        });

        let mut target = Target::default();
        table
            .set_color(&mut target, 1, COLOR_FLAGS_ALL)
            .unwrap();

        assert_eq!(target.line, Some(1));
        assert_eq!(target.fill, None);
    }

    #[test]
    fn test_list_color_unpacks() {
        let table = PropertyTable::<Target>::new().setter("FillColor", |t, args| {
            t.rgb = Some((args.f64_at(0)?, args.f64_at(1)?, args.f64_at(2)?));
            Ok(())
        });

        let mut target = Target::default();
        table
            .set_color(&mut target, (1.0, 0.5, 0.0), "f")
            .unwrap();

        assert_eq!(target.rgb, Some((1.0, 0.5, 0.0)));
    }

    #[test]
    fn test_empty_flags_is_a_no_op() {
        let mut target = Target::default();
        full_table().set_color(&mut target, 1, "").unwrap();
        assert_eq!(target, Target::default());
    }

    proptest! {
        #[test]
        fn test_arbitrary_flags_fail_only_on_unknown(flags in "[a-z]{0,8}") {
            let mut target = Target::default();
            let result = full_table().set_color(&mut target, 1, &flags);

            match flags.chars().find(|c| !COLOR_FLAGS_ALL.contains(*c)) {
                Some(bad) => prop_assert_eq!(
                    result,
                    Err(ApplyError::UnknownColorFlag { flag: bad })
                ),
                None => prop_assert!(result.is_ok()),
            }
        }
    }
}
