//! Local delivery for catalog directories.
//!
//! The catalog page cannot fetch its JSON when opened straight from the
//! filesystem, so [`server`] hosts a directory over HTTP the way a static
//! host would, with one difference: every response carries
//! `Cache-Control: no-store`, so edits to the catalog are always re-fetched
//! on reload. Delivery only; there is no API and no server-side filtering.

pub mod server;
