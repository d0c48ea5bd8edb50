//! Text placement utilities.
//!
//! Everything here draws through a [`Renderer`](crate::render::Renderer) and takes
//! the [`Style`](crate::layout::Style) to draw with explicitly. Text is never
//! wrapped: each call places a single line.
//!
//! # Example
//!
//! ```
//! use pdf_table::layout::{add_text_right_aligned, Style};
//! use pdf_table::render::Recording;
//! use pdf_table::Pt;
//!
//! let mut renderer = Recording::new();
//! add_text_right_aligned(&mut renderer, &Style::default(), Pt(700.0), Pt(545.0), "1 250,00")
//!     .expect("can draw");
//! ```

mod margins;
mod section;
mod text;

pub use margins::*;
pub use section::*;
pub use text::*;
