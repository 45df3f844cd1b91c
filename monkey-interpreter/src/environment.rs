use std::collections::HashMap;

use gc::{Finalize, Gc, GcCell, Trace};

use crate::object::Object;

#[derive(Debug, Trace, Finalize)]
pub struct EnvironmentCore {
    store: HashMap<String, Gc<Object>>,
    outer: Option<Environment>,
}

/// A lexical scope frame. Frames are shared: a closure and the call that
/// created it see the same bindings, and the collector reclaims the cycle
/// that forms when a closure is stored into its own defining frame.
#[derive(Debug, Clone, Trace, Finalize)]
pub struct Environment {
    environment: Gc<GcCell<EnvironmentCore>>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            environment: Gc::new(GcCell::new(EnvironmentCore {
                store: HashMap::new(),
                outer: None,
            })),
        }
    }

    pub fn new_enclosed(outer: Environment) -> Environment {
        Environment {
            environment: Gc::new(GcCell::new(EnvironmentCore {
                store: HashMap::new(),
                outer: Some(outer),
            })),
        }
    }

    /// The first frame containing the name wins.
    pub fn get(&self, key: &str) -> Option<Gc<Object>> {
        let env = self.environment.borrow();
        env.store
            .get(key)
            .cloned()
            .or_else(|| env.outer.as_ref().and_then(|outer| outer.get(key)))
    }

    /// Always binds in the current frame, shadowing any outer binding.
    pub fn set(&mut self, key: &str, value: Gc<Object>) {
        self.environment
            .borrow_mut()
            .store
            .insert(key.to_owned(), value);
    }

    pub fn ptr_eq(&self, other: &Environment) -> bool {
        Gc::ptr_eq(&self.environment, &other.environment)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
