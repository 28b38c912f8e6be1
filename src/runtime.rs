use thiserror::Error;

use crate::{
    AttributeHandle, InteractionClassHandle, ObjectClassHandle, ObjectHandle, ParameterHandle,
};

/// Parameter handle/value pairs for one interaction, in wire layout.
pub type ParameterSet = Vec<(ParameterHandle, Vec<u8>)>;

/// Attribute handle/value pairs for one object update, in wire layout.
pub type AttributeSet = Vec<(AttributeHandle, Vec<u8>)>;

/// Errors reported by the federation runtime collaborator.
///
/// Every runtime call is synchronous-but-non-blocking: a failure is a status,
/// never a panic or a suspension, and the caller decides whether it is fatal
/// (a required publish during setup) or retryable (a send during the cycle).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// A class/attribute/parameter name could not be resolved to a handle
    #[error("Name could not be resolved to a handle: {name}")]
    UnknownName { name: String },

    /// The runtime rejected a call outright
    #[error("Runtime rejected {operation} call")]
    CallRejected { operation: &'static str },

    /// An object handle is not known to the runtime
    #[error("Object handle is not registered with the runtime: {handle:?}")]
    UnknownObject { handle: ObjectHandle },
}

/// The federation runtime contract.
///
/// This is the opaque collaborator boundary: connection management, time
/// advancement, and the actual transport live behind it. The core only needs
/// handle lookup, publish/subscribe registration, object registration, and
/// the send-interaction primitive. Inbound traffic arrives through the
/// [`InboundQueue`](crate::InboundQueue) handle instead of runtime callbacks,
/// so the trait is strictly outbound.
pub trait Runtime {
    fn object_class_handle(&mut self, name: &str) -> Result<ObjectClassHandle, RuntimeError>;

    fn attribute_handle(
        &mut self,
        class: ObjectClassHandle,
        name: &str,
    ) -> Result<AttributeHandle, RuntimeError>;

    fn interaction_class_handle(
        &mut self,
        name: &str,
    ) -> Result<InteractionClassHandle, RuntimeError>;

    fn parameter_handle(
        &mut self,
        class: InteractionClassHandle,
        name: &str,
    ) -> Result<ParameterHandle, RuntimeError>;

    fn publish_object_class(
        &mut self,
        class: ObjectClassHandle,
        attributes: &[AttributeHandle],
    ) -> Result<(), RuntimeError>;

    fn subscribe_object_class(
        &mut self,
        class: ObjectClassHandle,
        attributes: &[AttributeHandle],
    ) -> Result<(), RuntimeError>;

    fn publish_interaction(&mut self, class: InteractionClassHandle) -> Result<(), RuntimeError>;

    fn subscribe_interaction(&mut self, class: InteractionClassHandle) -> Result<(), RuntimeError>;

    /// Register a local object with the federation, yielding its handle.
    fn register_object(
        &mut self,
        class: ObjectClassHandle,
        name: &str,
    ) -> Result<ObjectHandle, RuntimeError>;

    /// Deregister a previously registered local object.
    fn delete_object(&mut self, handle: ObjectHandle) -> Result<(), RuntimeError>;

    fn send_interaction(
        &mut self,
        class: InteractionClassHandle,
        parameters: &ParameterSet,
    ) -> Result<(), RuntimeError>;
}
