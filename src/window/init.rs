use crate::error::WindowError;

type Initializer<T> = Box<dyn FnOnce(&mut T)>;

/// Initializers queued during configuration and run once, in order, after
/// the target is fully constructed.
pub struct DeferredInit<T> {
    actions: Vec<Initializer<T>>,
    finalized: bool,
}

impl<T> Default for DeferredInit<T> {
    fn default() -> Self {
        Self {
            actions: Vec::new(),
            finalized: false,
        }
    }
}

impl<T> DeferredInit<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append<F>(&mut self, action: F) -> Result<(), WindowError>
    where
        F: FnOnce(&mut T) + 'static,
    {
        self.append_boxed(Box::new(action))
    }

    pub fn append_boxed(&mut self, action: Initializer<T>) -> Result<(), WindowError> {
        if self.finalized {
            return Err(WindowError::AlreadyFinalized);
        }
        self.actions.push(action);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    pub fn finalize(&mut self, target: &mut T) -> Result<(), WindowError> {
        if self.finalized {
            return Err(WindowError::AlreadyFinalized);
        }
        self.finalized = true;
        for action in self.actions.drain(..) {
            action(target);
        }
        Ok(())
    }
}

impl<T> std::fmt::Debug for DeferredInit<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeferredInit")
            .field("pending", &self.actions.len())
            .field("finalized", &self.finalized)
            .finish()
    }
}
