//! Capabilities shared by every card node.

use super::CardError;

/// A node that can check its own structural and value-domain rules.
///
/// Validation is re-run before serialization, so a node whose public
/// fields were changed after construction is still checked before it
/// leaves the process.
pub trait Validate {
    /// Checks the node and, transitively, everything it owns.
    ///
    /// # Errors
    ///
    /// Returns the first [`CardError`] found.
    fn validate(&self) -> Result<(), CardError>;
}

/// A node that can be converted to the webhook API's JSON wire format.
pub trait ToWire {
    /// Validates the node and converts it to its wire representation.
    ///
    /// # Errors
    ///
    /// Returns [`CardError`] when validation fails or the node cannot be encoded.
    fn to_wire(&self) -> Result<serde_json::Value, CardError>;
}
