use crate::utils::error::{LessonError, Result};

/// An explicitly optional binding to a capability implementation.
///
/// Reading an unset slot never yields a no-op: `get` panics and `try_get`
/// returns [`LessonError::UnboundCapability`].
pub struct CapabilitySlot<T: ?Sized> {
    capability: &'static str,
    inner: Option<Box<T>>,
}

impl<T: ?Sized> CapabilitySlot<T> {
    pub fn unset(capability: &'static str) -> Self {
        Self {
            capability,
            inner: None,
        }
    }

    pub fn bound(capability: &'static str, value: Box<T>) -> Self {
        Self {
            capability,
            inner: Some(value),
        }
    }

    pub fn bind(&mut self, value: Box<T>) {
        self.inner = Some(value);
    }

    pub fn clear(&mut self) -> Option<Box<T>> {
        self.inner.take()
    }

    pub fn is_bound(&self) -> bool {
        self.inner.is_some()
    }

    pub fn get(&self) -> &T {
        match self.inner.as_deref() {
            Some(value) => value,
            None => panic!("called through an unset {} reference", self.capability),
        }
    }

    pub fn try_get(&self) -> Result<&T> {
        self.inner
            .as_deref()
            .ok_or_else(|| LessonError::UnboundCapability {
                capability: self.capability.to_string(),
            })
    }
}

impl<T: ?Sized> std::fmt::Debug for CapabilitySlot<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CapabilitySlot")
            .field("capability", &self.capability)
            .field("bound", &self.is_bound())
            .finish()
    }
}
