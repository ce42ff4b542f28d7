//! Version command

use anyhow::Result;

use crate::app::AppContext;

/// Run the version command.
pub fn run(app: &AppContext) -> Result<()> {
    app.renderer().render_version(env!("CARGO_PKG_VERSION"))
}
