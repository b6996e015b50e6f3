use thiserror::Error;

/// Errors raised by [`BoundedStack`](crate::interpreter::stack::BoundedStack).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StackError {
    /// A push was attempted on a stack that already holds `capacity` items.
    #[error("Stack capacity of {capacity} exceeded.")]
    CapacityExceeded {
        /// The fixed capacity of the stack.
        capacity: usize,
    },
}
