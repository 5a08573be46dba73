//! Presentation mapping: catalog items to plain display data.
//!
//! [`CardView`] is the view model one item renders to. It is plain data with
//! no knowledge of any UI toolkit; the terminal browser and the `list`
//! subcommand both materialize it, each in its own way. All placeholder and
//! URL-resolution policy lives here so every surface renders identically.

pub mod card;
pub mod urls;

pub use card::{stats_line, CardView};
pub use urls::{resolve_image_url, resolve_preview_url};
