//! Lexically nested environments.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::error::RuntimeError;
use crate::position::Span;
use crate::value::Value;

struct Scope {
    vars: HashMap<String, Value>,
    parent: Option<Environment>,
}

/// A lexically scoped identifier-to-value map with an optional parent.
///
/// Cheap to clone: clones share the same underlying scope (`Rc<RefCell<_>>`), which is what lets
/// a [`crate::value::FunctionData`] capture its defining environment by value.
#[derive(Clone)]
pub struct Environment(Rc<RefCell<Scope>>);

impl Environment {
    /// A fresh, empty root environment with no parent.
    pub fn root() -> Self {
        Self(Rc::new(RefCell::new(Scope {
            vars: HashMap::new(),
            parent: None,
        })))
    }

    /// A new child scope whose lookups fall through to `self` on miss.
    pub fn child(&self) -> Self {
        Self(Rc::new(RefCell::new(Scope {
            vars: HashMap::new(),
            parent: Some(self.clone()),
        })))
    }

    /// Binds `name` in *this* scope, shadowing any same-name binding in an enclosing scope.
    pub fn define(&self, name: impl Into<String>, value: Value) {
        self.0.borrow_mut().vars.insert(name.into(), value);
    }

    /// Walks the parent chain looking for `name`.
    pub fn lookup(&self, name: &str, span: &Span) -> Result<Value, RuntimeError> {
        let scope = self.0.borrow();
        if let Some(v) = scope.vars.get(name) {
            return Ok(v.clone());
        }
        match &scope.parent {
            Some(parent) => parent.lookup(name, span),
            None => Err(RuntimeError::undefined_name(name, span.clone())),
        }
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Environment(..)")
    }
}
