//! Burn positional captions into batches of photographs.
//!
//! Each photo gets two caption blocks anchored to its bottom corners: location and comment
//! on the left, photographer and date on the right. Text is wrapped greedily against
//! measured glyph advances so neither block crosses the vertical midline, then drawn twice
//! (a dark offset shadow under a light face) and composited into the photo.
//!
//! # Pipeline overview
//!
//! 1. **Wrap**: [`wrap_text`] splits on hard newlines and packs words to the half-width bound
//!    using any [`TextMeasurer`].
//! 2. **Plan**: [`plan_captions`] derives [`CaptionGeometry`] from the image size and places
//!    every line ([`CaptionPlan`]).
//! 3. **Render**: [`Annotator`] shapes lines with Parley, rasterises them with `vello_cpu`
//!    and writes the photo back in its original pixel layout.
//!
//! Two drivers feed the compositor: [`run_interactive`] prompts for each photo through a
//! [`PhotoPrompt`], and [`run_batch`] reads a metadata table ([`read_metadata`]).
//!
//! A font that cannot be located is fatal ([`AnnotateError::is_fatal`]); every other
//! failure is scoped to a single photo.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

mod assets;
mod caption;
mod catalog;
mod foundation;
mod render;
mod session;
mod text;

pub use assets::decode::{load_photo, restore_color_type, save_photo};
pub use caption::annotator::{Annotator, Compositor};
pub use caption::layout::{CaptionGeometry, CaptionPlan, CaptionSide, PlacedLine, plan_captions};
pub use caption::style::{CaptionStyle, FONT_ENV_VAR};
pub use catalog::metadata::{MetadataRow, read_metadata, read_metadata_from};
pub use catalog::photos::{
    DEFAULT_OUTPUT_DIR_NAME, PHOTO_EXTENSIONS, default_output_dir, ensure_output_dir, is_photo,
    list_photos,
};
pub use catalog::timestamp::{
    NO_TIMESTAMP, NoEmbeddedTimestamps, TimestampSource, batch_date, interactive_date,
    wall_clock_time,
};
pub use foundation::core::{Canvas, Point, Rgba8};
pub use foundation::error::{AnnotateError, AnnotateResult};
pub use session::batch::{BatchOptions, BatchReport, run_batch};
pub use session::captions::{batch_captions, interactive_captions, output_name};
pub use session::interactive::{
    InteractiveOptions, InteractiveReport, reconcile_fields, run_interactive,
};
pub use session::prompt::{PhotoFields, PhotoPrompt, PromptAction, PromptReply, TerminalPrompt};
pub use text::engine::TextLayoutEngine;
pub use text::font::{LoadedFont, resolve_font};
pub use text::wrap::{FontSpec, TextMeasurer, wrap_text};
