//! Named, nestable style presets for plot object properties.
//!
//! `plotstyle` is a thin convenience layer over a plotting library's object
//! model: it sets display properties (colors, margins, axis ticks, legend
//! placement) on existing plot objects according to named style presets. It
//! creates no plots and drives no rendering; it only mutates objects handed
//! to it.
//!
//! The crate is built from two pieces:
//!
//! - [`Styles`]: a registry of named [`Style`] presets with stack-scoped
//!   activation. Entering a scope with [`Styles::use_style`] makes a style
//!   current until the returned [`StyleScope`] guard drops; scopes nest.
//! - [`PropertyTable`]: a per-target-type table mapping property names to
//!   setter functions. Applying a style group invokes the registered setter
//!   for each property and silently skips names the target does not support.
//!
//! Property values ([`Value`]) are scalars or lists; a list is unpacked into
//! multiple positional setter arguments, which is how margin tuples and tick
//! pairs reach their multi-argument setters.
//!
//! # Example
//!
//! ```rust
//! use plotstyle::{Props, PropertyTable, Style, Styles};
//!
//! #[derive(Default)]
//! struct Canvas {
//!     fill_style: i64,
//!     top_margin: f64,
//! }
//!
//! let table = PropertyTable::<Canvas>::new()
//!     .setter("FillStyle", |c, args| {
//!         c.fill_style = args.i64_at(0)?;
//!         Ok(())
//!     })
//!     .setter("TopMargin", |c, args| {
//!         c.top_margin = args.f64_at(0)?;
//!         Ok(())
//!     });
//!
//! let mut styles = Styles::standard();
//! styles.set(
//!     "publication",
//!     Style::new().group("canvas", Props::new().prop("FillStyle", 4000)),
//! );
//!
//! let mut canvas = Canvas::default();
//! {
//!     let _scope = styles.use_style("publication")?;
//!     table.apply_group(&mut canvas, &styles, "canvas", None)?;
//! }
//! assert_eq!(canvas.fill_style, 4000);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! The registry keeps its activation stack in a `RefCell` and is meant for
//! single-threaded use; share it across threads only behind external
//! synchronization.

pub mod apply;
pub mod layout;
pub mod presets;
mod props;
pub mod style;
mod value;

pub use apply::{ApplyError, Args, PropertyError, PropertyTable, Setter, COLOR_FLAGS_ALL};
pub use layout::{
    legend_coords, pad_coordinates, HAlign, LegendLayout, VAlign, DEFAULT_PAD_OFFSET,
};
pub use presets::default_style;
pub use props::Props;
pub use style::{Style, StyleEntry, StyleError, StyleScope, Styles, DEFAULT_STYLE_NAME};
pub use value::Value;
