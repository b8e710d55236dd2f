//! Boundary contracts for the external collaborators.
//!
//! The detection core neither renders pages nor talks to a classification
//! service; it only consumes what a renderer produces and hands crops to a
//! classifier. These traits pin down those two seams so host applications
//! can plug in a PDF backend, an HTTP client, or test stubs without the core
//! knowing which.

use image::RgbImage;

/// Upstream collaborator: supplies one page image per page of a source
/// document.
///
/// The core is agnostic to the source document format and to the resolution
/// policy; both are the renderer's concern.
pub trait PageRenderer {
    /// Error type of the rendering backend.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Renders every page of the document as an RGB image, in page order.
    fn render_pages(&self) -> Result<Vec<RgbImage>, Self::Error>;
}

/// Downstream collaborator: produces a textual description for one cropped
/// region.
///
/// Receives the crop as an encoded raster image (PNG); the core hands the
/// crop off unchanged and does not interpret the returned description.
/// Transient-failure handling (retries, timeouts) is the implementor's
/// responsibility.
pub trait RegionClassifier {
    /// Error type of the classification backend.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns a textual description of the diagram in `crop_png`.
    fn classify(&self, crop_png: &[u8]) -> Result<String, Self::Error>;
}
