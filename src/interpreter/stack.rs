use crate::error::StackError;

/// A last-in-first-out container whose capacity is fixed at construction.
///
/// The converter and the evaluator size their stacks by the number of input
/// tokens, which no phase of either algorithm can exceed. Pushing past the
/// capacity is reported instead of silently dropping the item, and popping or
/// peeking an empty stack yields `None` rather than a placeholder value.
///
/// # Example
/// ```
/// use shunt::interpreter::stack::BoundedStack;
///
/// let mut stack = BoundedStack::with_capacity(2);
/// stack.push(1).unwrap();
/// stack.push(2).unwrap();
/// assert!(stack.push(3).is_err());
/// assert_eq!(stack.peek(), Some(&2));
/// assert_eq!(stack.pop(), Some(2));
/// assert_eq!(stack.pop(), Some(1));
/// assert_eq!(stack.pop(), None);
/// ```
#[derive(Debug, Clone)]
pub struct BoundedStack<T> {
    items:    Vec<T>,
    capacity: usize,
}

impl<T> BoundedStack<T> {
    /// Creates an empty stack that holds at most `capacity` items.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { items: Vec::with_capacity(capacity),
               capacity }
    }

    /// Places `item` on top of the stack.
    ///
    /// # Errors
    /// Returns [`StackError::CapacityExceeded`] and leaves the stack
    /// unchanged if it is already full.
    pub fn push(&mut self, item: T) -> Result<(), StackError> {
        if self.items.len() >= self.capacity {
            return Err(StackError::CapacityExceeded { capacity: self.capacity });
        }
        self.items.push(item);
        Ok(())
    }

    /// Removes and returns the top item, or `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Returns the top item without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Number of items currently on the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the stack holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The most items the stack can hold.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}
