use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::object::core::Object;

/// Shared handle to an [`Environment`].
///
/// Closures capture their defining environment through this handle, so a
/// function value and the scope it was defined in share structure. All
/// evaluation is single-threaded, so the interior mutability is never
/// contended.
pub type Env = Rc<RefCell<Environment>>;

/// A mapping from names to values plus an optional enclosing scope.
///
/// Environments are created at program start and at each function call,
/// never at block entry; shadowing is therefore function-scoped. Lookup
/// walks outward through enclosing environments, while writes always go to
/// the local scope.
#[derive(Debug, Default)]
pub struct Environment {
    store: HashMap<String, Object>,
    outer: Option<Env>,
}

impl Environment {
    /// Creates a fresh root environment with no enclosing scope.
    ///
    /// # Example
    /// ```
    /// use simia::interpreter::object::{core::Object, environment::Environment};
    ///
    /// let env = Environment::new();
    /// env.borrow_mut().set("x".to_string(), Object::Integer(5));
    ///
    /// assert_eq!(env.borrow().get("x"), Some(Object::Integer(5)));
    /// assert_eq!(env.borrow().get("y"), None);
    /// ```
    #[must_use]
    pub fn new() -> Env {
        Rc::new(RefCell::new(Self::default()))
    }

    /// Creates an empty environment enclosed by `outer`.
    ///
    /// Bindings of the enclosing environment stay visible through the new
    /// one; new bindings shadow without overwriting.
    ///
    /// # Example
    /// ```
    /// use simia::interpreter::object::{core::Object, environment::Environment};
    ///
    /// let outer = Environment::new();
    /// outer.borrow_mut().set("x".to_string(), Object::Integer(1));
    ///
    /// let inner = Environment::extend(&outer);
    /// inner.borrow_mut().set("x".to_string(), Object::Integer(2));
    ///
    /// assert_eq!(inner.borrow().get("x"), Some(Object::Integer(2)));
    /// assert_eq!(outer.borrow().get("x"), Some(Object::Integer(1)));
    /// ```
    #[must_use]
    pub fn extend(outer: &Env) -> Env {
        Rc::new(RefCell::new(Self { store: HashMap::new(),
                                    outer: Some(Rc::clone(outer)), }))
    }

    /// Looks a name up, searching enclosing environments if necessary.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Object> {
        if let Some(value) = self.store.get(name) {
            return Some(value.clone());
        }
        self.outer.as_ref().and_then(|outer| outer.borrow().get(name))
    }

    /// Binds a name in the local scope only.
    pub fn set(&mut self, name: String, value: Object) {
        self.store.insert(name, value);
    }
}
