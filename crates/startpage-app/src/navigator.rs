//! Browser-opening navigator.

use startpage_core::nav::Navigator;
use startpage_types::error::{Result, StartpageError};

/// Opens URLs with the platform's default browser.
pub struct SystemNavigator;

impl Navigator for SystemNavigator {
    fn open(&mut self, url: &str) -> Result<()> {
        open::that(url).map_err(|e| StartpageError::Nav(format!("failed to open {url}: {e}")))
    }
}
