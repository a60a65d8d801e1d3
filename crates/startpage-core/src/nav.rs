//! Navigation seam.
//!
//! Components produce URLs; a `Navigator` carries them out. The binary wires
//! in a browser-opening implementation, tests record what would have opened.

use startpage_types::error::{Result, StartpageError};

use crate::validate::is_valid_url;

/// Something that can open a URL in the user's browser.
pub trait Navigator {
    fn open(&mut self, url: &str) -> Result<()>;
}

/// Validate a URL and hand it to the navigator. Stored values go through
/// this too, so a link that was tampered with on disk still cannot smuggle
/// in a non-http scheme.
pub fn safe_navigate(nav: &mut dyn Navigator, url: &str) -> Result<()> {
    if !is_valid_url(url) {
        return Err(StartpageError::Nav(format!("refusing to open {url:?}")));
    }
    nav.open(url)
}
