use crate::error::Result;
use crate::filter::{FilterAction, TupleFilter};

/// The two persistence calls the host exposes to the codec.
///
/// Calls are synchronous; failures are returned to the caller unchanged, the
/// codec neither retries nor swallows them.
pub trait SlicerHost {
    /// Remove a persisted property from a visual object.
    fn remove_properties(&mut self, object_name: &str, property_name: &str) -> Result<()>;

    /// Apply (or clear, with an empty slice) JSON filters under the given
    /// object/property.
    fn apply_json_filter(
        &mut self,
        filters: &[TupleFilter],
        object_name: &str,
        property_name: &str,
        action: FilterAction,
    ) -> Result<()>;
}
