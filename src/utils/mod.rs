// PocketBrowser helpers
// Pure functions with no store or I/O dependencies.

pub mod time;
pub mod url;
