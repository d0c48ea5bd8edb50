//! Paginated, bordered tables and aligned text for generated PDF documents.
//!
//! The [table] module holds the layout engine: tables made of rows of fixed-width
//! cells, drawn page by page with a repeated header. Layout code talks to a
//! [render::Renderer]; [Document] provides the PDF implementation of it.

mod colour;
pub use colour::*;

mod document;
pub use document::*;

pub(crate) mod encoding;

mod error;
pub use error::*;

mod font;
pub use font::*;

mod image;
pub use self::image::*;

/// Text placement: styles, alignment, underlining, and free-standing text sections
pub mod layout;

mod page;
pub use page::*;

/// Pre-defined page sizes
pub mod pagesize;

mod rect;
pub use rect::*;

pub(crate) mod refs;

/// The drawing capability layout code is written against
pub mod render;

/// Tables that continue across pages
pub mod table;

mod units;
pub use units::*;

/// Re-export PDF-writer functionality, mostly for custom [pdf_writer::Content] generation
pub use pdf_writer;
