use std::fmt;

use chrono::NaiveDateTime;

use crate::time::format_admin_datetime;
use crate::validator::SharedValidator;
use crate::{ValidationError, ValidationReason};

/// Where a parameter is placed in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// Rendered into the query string.
    Query,
    /// Rendered as a request header.
    Header,
    /// Substituted into a `{name}` placeholder of the path.
    Path,
}

/// Value bound to a parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterValue {
    /// A bare key without value, e.g. the `quota` in `/user?quota&uid=foo`.
    Flag,
    /// A single value.
    Single(String),
    /// An ordered list of values.
    Multi(Vec<String>),
}

impl ParameterValue {
    /// Returns true for an empty string or an empty list.
    ///
    /// Flags are never empty.
    pub fn is_empty(&self) -> bool {
        match self {
            ParameterValue::Flag => false,
            ParameterValue::Single(v) => v.is_empty(),
            ParameterValue::Multi(vs) => vs.is_empty(),
        }
    }

    /// Iterate over the rendered values, flags yield nothing.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        let values: &[String] = match self {
            ParameterValue::Flag => &[],
            ParameterValue::Single(v) => std::slice::from_ref(v),
            ParameterValue::Multi(vs) => vs,
        };
        values.iter().map(String::as_str)
    }
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterValue::Flag => Ok(()),
            ParameterValue::Single(v) => f.write_str(v),
            ParameterValue::Multi(vs) => f.write_str(&vs.join(",")),
        }
    }
}

impl From<String> for ParameterValue {
    fn from(v: String) -> Self {
        ParameterValue::Single(v)
    }
}

impl From<&str> for ParameterValue {
    fn from(v: &str) -> Self {
        ParameterValue::Single(v.to_string())
    }
}

impl From<&String> for ParameterValue {
    fn from(v: &String) -> Self {
        ParameterValue::Single(v.clone())
    }
}

impl From<bool> for ParameterValue {
    fn from(v: bool) -> Self {
        ParameterValue::Single(if v { "true" } else { "false" }.to_string())
    }
}

impl From<u32> for ParameterValue {
    fn from(v: u32) -> Self {
        ParameterValue::Single(v.to_string())
    }
}

impl From<u64> for ParameterValue {
    fn from(v: u64) -> Self {
        ParameterValue::Single(v.to_string())
    }
}

impl From<NaiveDateTime> for ParameterValue {
    fn from(v: NaiveDateTime) -> Self {
        ParameterValue::Single(format_admin_datetime(v))
    }
}

impl From<Vec<String>> for ParameterValue {
    fn from(v: Vec<String>) -> Self {
        ParameterValue::Multi(v)
    }
}

impl From<Vec<&str>> for ParameterValue {
    fn from(v: Vec<&str>) -> Self {
        ParameterValue::Multi(v.into_iter().map(str::to_string).collect())
    }
}

/// Parameter describes one request input.
///
/// ```
/// use rgwadmin_core::{validators, Parameter};
///
/// let uid = Parameter::query("uid")
///     .require_value()
///     .require_not_empty()
///     .with_validator(validators::string())
///     .bind("alice");
/// assert!(uid.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Parameter {
    name: &'static str,
    location: Location,
    required: bool,
    allow_empty: bool,
    validators: Vec<SharedValidator>,
    value: Option<ParameterValue>,
}

impl Parameter {
    /// Create an optional, unbound parameter.
    pub fn new(name: &'static str, location: Location) -> Self {
        Self {
            name,
            location,
            required: false,
            allow_empty: true,
            validators: Vec::new(),
            value: None,
        }
    }

    /// Create a query parameter.
    pub fn query(name: &'static str) -> Self {
        Self::new(name, Location::Query)
    }

    /// Create a header parameter.
    pub fn header(name: &'static str) -> Self {
        Self::new(name, Location::Header)
    }

    /// Create a path parameter.
    pub fn path(name: &'static str) -> Self {
        Self::new(name, Location::Path)
    }

    /// Create a bare query key like `quota` or `caps`.
    pub fn flag(name: &'static str) -> Self {
        Self::query(name).require_value().bind_flag()
    }

    /// Mark the parameter as required.
    pub fn require_value(mut self) -> Self {
        self.required = true;
        self
    }

    /// Disallow empty strings and empty lists.
    pub fn require_not_empty(mut self) -> Self {
        self.allow_empty = false;
        self
    }

    /// Append a validator, every validator must accept the value.
    pub fn with_validator(mut self, validator: SharedValidator) -> Self {
        self.validators.push(validator);
        self
    }

    /// Bind a value.
    pub fn bind(mut self, value: impl Into<ParameterValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Bind a value if present, leaving the parameter unbound otherwise.
    pub fn bind_opt<V: Into<ParameterValue>>(self, value: Option<V>) -> Self {
        match value {
            Some(v) => self.bind(v),
            None => self,
        }
    }

    fn bind_flag(mut self) -> Self {
        self.value = Some(ParameterValue::Flag);
        self
    }

    /// Name of the parameter.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Placement of the parameter.
    pub fn location(&self) -> Location {
        self.location
    }

    /// Is a value required?
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Are empty values allowed?
    pub fn allows_empty(&self) -> bool {
        self.allow_empty
    }

    /// Bound value, if any.
    pub fn value(&self) -> Option<&ParameterValue> {
        self.value.as_ref()
    }

    /// Check required-ness, emptiness and every validator.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let fail = |reason| ValidationError {
            parameter: self.name.to_string(),
            value: self.value.as_ref().map(ToString::to_string),
            reason,
        };

        let Some(value) = &self.value else {
            return if self.required {
                Err(fail(ValidationReason::Missing))
            } else {
                Ok(())
            };
        };

        if !self.allow_empty && value.is_empty() {
            return Err(fail(ValidationReason::Empty));
        }

        for validator in &self.validators {
            if let Some(bad) = value.values().find(|v| !validator.test(v)) {
                return Err(ValidationError {
                    parameter: self.name.to_string(),
                    value: Some(bad.to_string()),
                    reason: ValidationReason::Rejected {
                        validator: validator.name().to_string(),
                        expected: validator.expected_statement().into_owned(),
                    },
                });
            }
        }

        Ok(())
    }
}
