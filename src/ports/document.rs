use crate::errors::PwaError;

/// Port for mutating the page document.
pub trait DocumentPort {
    /// Appends `<link rel="manifest" href="...">` to the document head.
    ///
    /// Existing manifest links are not inspected; every call appends a new element.
    fn append_manifest_link(&self, href: &str) -> Result<(), PwaError>;
}
