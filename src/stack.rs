use std::fmt;

/// LIFO container shared by the converter and the evaluator.
///
/// A rejected `push` hands the item back untouched, the stack is left as it was.
pub trait Stack<T> {
    fn is_empty(&self) -> bool;
    fn is_full(&self) -> bool;
    fn size(&self) -> usize;
    fn push(&mut self, item: T) -> Result<(), T>;
    fn peek(&self) -> Option<&T>;
    fn pop(&mut self) -> Option<T>;
}

/// Fixed capacity stack backed by a single buffer allocated up front.
#[derive(Debug)]
pub struct ArrayStack<T> {
    capacity: usize,
    elements: Vec<T>,
}

impl<T> ArrayStack<T> {
    pub fn new(capacity: usize) -> ArrayStack<T> {
        ArrayStack {
            capacity,
            elements: Vec::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<T> Stack<T> for ArrayStack<T> {
    fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn is_full(&self) -> bool {
        self.elements.len() == self.capacity
    }

    fn size(&self) -> usize {
        self.elements.len()
    }

    fn push(&mut self, item: T) -> Result<(), T> {
        // never let the Vec reallocate past the declared capacity
        if self.is_full() {
            return Err(item);
        }
        self.elements.push(item);
        Ok(())
    }

    fn peek(&self) -> Option<&T> {
        self.elements.last()
    }

    fn pop(&mut self) -> Option<T> {
        self.elements.pop()
    }
}

struct Frame<T> {
    value: T,
    prev: Option<Box<Frame<T>>>,
}

/// Unbounded stack, one heap frame per element.
pub struct LinkedStack<T> {
    size: usize,
    top: Option<Box<Frame<T>>>,
}

impl<T> LinkedStack<T> {
    pub fn new() -> LinkedStack<T> {
        LinkedStack { size: 0, top: None }
    }

    fn iter(&self) -> impl Iterator<Item = &T> {
        let mut cursor = self.top.as_deref();
        std::iter::from_fn(move || {
            let frame = cursor?;
            cursor = frame.prev.as_deref();
            Some(&frame.value)
        })
    }
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> for LinkedStack<T> {
    fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    fn is_full(&self) -> bool {
        self.size == usize::MAX
    }

    fn size(&self) -> usize {
        self.size
    }

    fn push(&mut self, item: T) -> Result<(), T> {
        if self.is_full() {
            return Err(item);
        }
        let prev = self.top.take();
        self.top = Some(Box::new(Frame { value: item, prev }));
        self.size += 1;
        Ok(())
    }

    fn peek(&self) -> Option<&T> {
        self.top.as_ref().map(|frame| &frame.value)
    }

    fn pop(&mut self) -> Option<T> {
        let frame = self.top.take()?;
        let Frame { value, prev } = *frame;
        self.top = prev;
        self.size -= 1;
        Some(value)
    }
}

impl<T> Drop for LinkedStack<T> {
    // Unlink frame by frame, a recursive Box drop would blow the call stack
    // on long chains.
    fn drop(&mut self) {
        let mut cursor = self.top.take();
        while let Some(mut frame) = cursor {
            cursor = frame.prev.take();
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut values: Vec<&T> = self.iter().collect();
        values.reverse();
        f.debug_struct("LinkedStack")
            .field("size", &self.size)
            .field("elements", &values)
            .finish()
    }
}
