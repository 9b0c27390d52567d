//! Field resolution for `$key`, `$value` and `$type`.
//!
//! An [`Environment`] tells the evaluator how to read each facet off the
//! host's data. Only the outermost scope gets the caller's environment: the
//! target of a field is evaluated with [`EmptyEnvironment`], so a field
//! nested inside another field cannot resolve and reports
//! [`EvalError::MissingAccessor`].

use std::fmt;

use crate::{ast::FieldKey, evaluator::EvalError, value::Value};

pub trait Environment<T: ?Sized> {
    /// Resolves `field` against `data`.
    ///
    /// Fails with [`EvalError::MissingAccessor`] when this environment has no
    /// accessor for `field`, and with [`EvalError::FieldNotFound`] when the
    /// accessor yields nothing for this particular `data`.
    fn resolve(&self, field: FieldKey, data: &T) -> Result<Value, EvalError>;
}

/// The environment of every nested field scope; resolves nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyEnvironment;

impl<T: ?Sized> Environment<T> for EmptyEnvironment {
    fn resolve(&self, field: FieldKey, _data: &T) -> Result<Value, EvalError> {
        Err(EvalError::MissingAccessor(field))
    }
}

type Accessor<'a, T> = Box<dyn Fn(&T) -> Option<Value> + Send + Sync + 'a>;

/// An accessor table with one optional slot per field key.
///
/// # Examples
///
/// ```
/// use sift_lang::{FieldKey, Fields, Environment, Value};
///
/// struct Entry {
///     name: String,
/// }
///
/// let env = Fields::new().with(FieldKey::Key, |e: &Entry| Some(Value::from(e.name.as_str())));
/// let entry = Entry { name: "id".to_string() };
///
/// assert_eq!(env.resolve(FieldKey::Key, &entry).unwrap(), Value::from("id"));
/// assert!(env.resolve(FieldKey::Type, &entry).is_err());
/// ```
pub struct Fields<'a, T: ?Sized> {
    key: Option<Accessor<'a, T>>,
    value: Option<Accessor<'a, T>>,
    type_: Option<Accessor<'a, T>>,
}

impl<'a, T: ?Sized> Fields<'a, T> {
    pub fn new() -> Self {
        Fields {
            key: None,
            value: None,
            type_: None,
        }
    }

    /// Installs the accessor for `field`, replacing any previous one.
    pub fn with<F>(mut self, field: FieldKey, accessor: F) -> Self
    where
        F: Fn(&T) -> Option<Value> + Send + Sync + 'a,
    {
        *self.slot_mut(field) = Some(Box::new(accessor));
        self
    }

    /// Whether an accessor is installed for `field`.
    pub fn has(&self, field: FieldKey) -> bool {
        self.slot(field).is_some()
    }

    fn slot(&self, field: FieldKey) -> &Option<Accessor<'a, T>> {
        match field {
            FieldKey::Key => &self.key,
            FieldKey::Value => &self.value,
            FieldKey::Type => &self.type_,
        }
    }

    fn slot_mut(&mut self, field: FieldKey) -> &mut Option<Accessor<'a, T>> {
        match field {
            FieldKey::Key => &mut self.key,
            FieldKey::Value => &mut self.value,
            FieldKey::Type => &mut self.type_,
        }
    }
}

impl<T: ?Sized> Default for Fields<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Environment<T> for Fields<'_, T> {
    fn resolve(&self, field: FieldKey, data: &T) -> Result<Value, EvalError> {
        let accessor = self
            .slot(field)
            .as_ref()
            .ok_or(EvalError::MissingAccessor(field))?;
        accessor(data).ok_or(EvalError::FieldNotFound(field))
    }
}

impl<T: ?Sized> fmt::Debug for Fields<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fields")
            .field("key", &self.has(FieldKey::Key))
            .field("value", &self.has(FieldKey::Value))
            .field("type", &self.has(FieldKey::Type))
            .finish()
    }
}

impl<T: ?Sized, E: Environment<T> + ?Sized> Environment<T> for &E {
    fn resolve(&self, field: FieldKey, data: &T) -> Result<Value, EvalError> {
        (**self).resolve(field, data)
    }
}
