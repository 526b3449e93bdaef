//! Track catalog: directory scanning and lazy duration lookup.

mod model;
mod scan;

pub use model::{Catalog, Track};
pub use scan::{probe_duration, scan};
