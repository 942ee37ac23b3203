// Library target for the integration tests and the renderer benchmark.
// The binary entry point is main.rs; it reaches these modules as `folio::*`
// and keeps the terminal-only code (app, config, ui) to itself.

pub mod content;
pub mod i18n;
pub mod learning;
