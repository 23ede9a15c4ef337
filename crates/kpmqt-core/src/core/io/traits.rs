use super::raw::RawModelInput;
use std::error::Error;

/// Defines the interface for input collaborators that produce raw model data.
///
/// The model builder treats the input side as an opaque producer: any source
/// able to yield a [`RawModelInput`] (a directory of files, an in-memory
/// generator script, a network handle) can drive construction. Validation of
/// the produced scalars and arrays belongs to the builder, not the source;
/// sources only report errors of their own medium.
pub trait ModelSource {
    /// The error type for this source's medium.
    type Error: Error + Send + Sync + 'static;

    /// Produces the raw scalar/array bundle the model is built from.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying medium cannot be read or decoded.
    fn load(&self) -> Result<RawModelInput, Self::Error>;
}
