/// Media module
///
/// Image references in the site document are paths relative to the
/// directory the document was loaded from. This module resolves them
/// and produces downscaled card thumbnails in the background.

pub mod thumbnail;

pub use thumbnail::resolve_asset;
