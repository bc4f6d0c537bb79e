//! Read-only preview rendering
//!
//! This module projects an element list into an SVG string. It is the
//! Preview Renderer: no selection affordances, no resize handles, just the
//! document as it will be shared. Canvas and preview resolve styles and
//! display content through the same model functions, so their layouts are
//! identical by construction.

pub mod config;
pub mod svg;

pub use config::SvgConfig;
pub use svg::{render_preview, render_share};
