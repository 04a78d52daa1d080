use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::Value;

/// A shared, mutable handle to an environment in the scope chain.
pub type SharedEnv = Rc<RefCell<Environment>>;

/// A single scope: a name-to-value map with an optional enclosing scope.
///
/// Lookups walk outward on a miss. Assignment walks outward to the nearest
/// scope that already defines the name; when no scope does, the name is
/// defined in the environment the assignment started from. The chain is
/// acyclic by construction: the global environment has no enclosing parent
/// and every other environment points strictly outward.
#[derive(Debug, Default)]
pub struct Environment {
    values:    HashMap<String, Value>,
    enclosing: Option<SharedEnv>,
}

impl Environment {
    /// Creates a root environment with no enclosing scope.
    #[must_use]
    pub fn new() -> SharedEnv {
        Rc::new(RefCell::new(Self { values:    HashMap::new(),
                                    enclosing: None, }))
    }

    /// Creates an environment nested inside `enclosing`.
    #[must_use]
    pub fn with_enclosing(enclosing: SharedEnv) -> SharedEnv {
        Rc::new(RefCell::new(Self { values:    HashMap::new(),
                                    enclosing: Some(enclosing), }))
    }

    /// Binds `name` in this scope, shadowing any outer binding.
    pub fn define(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_string(), value);
    }

    /// Looks `name` up, walking outward through enclosing scopes.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        match self.values.get(name) {
            Some(value) => Some(value.clone()),
            None => self.enclosing
                        .as_ref()
                        .and_then(|outer| outer.borrow().get(name)),
        }
    }

    /// Assigns `name`, walking outward to the nearest defining scope.
    ///
    /// When no scope in the chain defines the name, it is defined in
    /// `env` itself — so a fresh name assigned inside a function stays
    /// local to that call.
    pub fn assign(env: &SharedEnv, name: &str, value: Value) {
        if !Self::assign_existing(env, name, &value) {
            env.borrow_mut().define(name, value);
        }
    }

    /// Overwrites the nearest existing binding of `name`, if any.
    ///
    /// Returns `true` when a binding was found and updated.
    fn assign_existing(env: &SharedEnv, name: &str, value: &Value) -> bool {
        if env.borrow().values.contains_key(name) {
            env.borrow_mut().values.insert(name.to_string(), value.clone());
            return true;
        }
        let outer = env.borrow().enclosing.clone();
        match outer {
            Some(enclosing) => Self::assign_existing(&enclosing, name, value),
            None => false,
        }
    }
}
