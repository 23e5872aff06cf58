//! Validators used by [`Parameter`](crate::Parameter).
//!
//! A validator is a pure, stateless predicate over the rendered value of a
//! parameter, plus a human readable statement of what it expects. A
//! parameter may carry several validators, all of which must pass.

use std::borrow::Cow;
use std::fmt::Debug;
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::time::ADMIN_DATETIME_FORMAT;

/// Validator checks the rendered value of a parameter.
pub trait Validator: Debug + Send + Sync + 'static {
    /// Short name of the validator, used in error messages.
    fn name(&self) -> &str;

    /// Returns true if the value is accepted.
    fn test(&self, value: &str) -> bool;

    /// Describes what the validator expects.
    fn expected_statement(&self) -> Cow<'_, str>;
}

/// Accepts any string.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringValidator;

impl Validator for StringValidator {
    fn name(&self) -> &str {
        "string"
    }

    fn test(&self, _: &str) -> bool {
        true
    }

    fn expected_statement(&self) -> Cow<'_, str> {
        Cow::Borrowed("string")
    }
}

/// Accepts the literals `true` and `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanValidator;

impl Validator for BooleanValidator {
    fn name(&self) -> &str {
        "boolean"
    }

    fn test(&self, value: &str) -> bool {
        value.parse::<bool>().is_ok()
    }

    fn expected_statement(&self) -> Cow<'_, str> {
        Cow::Borrowed("boolean (\"true\" or \"false\")")
    }
}

/// Accepts unsigned decimal integers.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerValidator;

impl Validator for IntegerValidator {
    fn name(&self) -> &str {
        "integer"
    }

    fn test(&self, value: &str) -> bool {
        value.parse::<u64>().is_ok() && value.bytes().all(|b| b.is_ascii_digit())
    }

    fn expected_statement(&self) -> Cow<'_, str> {
        Cow::Borrowed("unsigned decimal integer")
    }
}

// ASCII digits only, `\d` would match any unicode digit.
static DATETIME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{2}:[0-9]{2}:[0-9]{2}$")
        .expect("regex must be valid")
});

/// Accepts date times formatted as `YYYY-MM-DD HH:MM:SS`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateTimeValidator;

impl Validator for DateTimeValidator {
    fn name(&self) -> &str {
        "datetime"
    }

    fn test(&self, value: &str) -> bool {
        DATETIME_REGEX.is_match(value)
    }

    fn expected_statement(&self) -> Cow<'_, str> {
        Cow::Owned(format!(
            "string formatted as YYYY-MM-DD HH:MM:SS ({ADMIN_DATETIME_FORMAT})"
        ))
    }
}

/// Accepts DNS-safe bucket names.
///
/// Names are 3 to 63 characters of lowercase letters, digits, hyphens and
/// dots, and neither start nor end with a hyphen.
#[derive(Debug, Clone, Copy, Default)]
pub struct BucketNameValidator;

impl Validator for BucketNameValidator {
    fn name(&self) -> &str {
        "bucket-name"
    }

    fn test(&self, value: &str) -> bool {
        (3..=63).contains(&value.len())
            && value
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-' || b == b'.')
            && !value.starts_with('-')
            && !value.ends_with('-')
    }

    fn expected_statement(&self) -> Cow<'_, str> {
        Cow::Borrowed(
            "3 to 63 lowercase letters, digits, hyphens or dots, not starting or ending with a hyphen",
        )
    }
}

/// Accepts one of a fixed set of values.
#[derive(Debug, Clone, Copy)]
pub struct OneOfValidator {
    name: &'static str,
    allowed: &'static [&'static str],
}

impl OneOfValidator {
    /// Create a validator accepting exactly the `allowed` values.
    pub const fn new(name: &'static str, allowed: &'static [&'static str]) -> Self {
        Self { name, allowed }
    }
}

impl Validator for OneOfValidator {
    fn name(&self) -> &str {
        self.name
    }

    fn test(&self, value: &str) -> bool {
        self.allowed.contains(&value)
    }

    fn expected_statement(&self) -> Cow<'_, str> {
        Cow::Owned(format!("one of [{}]", self.allowed.join(", ")))
    }
}

/// Canned ACLs understood by the gateway.
pub const CANNED_ACLS: &[&str] = &[
    "private",
    "public-read",
    "public-read-write",
    "authenticated-read",
    "bucket-owner-read",
    "bucket-owner-full-control",
];

/// Key types accepted by key management calls.
pub const KEY_TYPES: &[&str] = &["s3", "swift"];

/// Quota scopes accepted by quota calls.
pub const QUOTA_TYPES: &[&str] = &["user", "bucket"];

/// Metadata sections exposed under `/metadata`.
pub const METADATA_SECTIONS: &[&str] = &["user", "bucket", "bucket.instance"];

/// Permissions that can be granted to a subuser.
pub const SUBUSER_ACCESS: &[&str] = &["read", "write", "readwrite", "full"];

/// Shared validator handle stored by parameters.
pub type SharedValidator = Arc<dyn Validator>;

/// Constructors for the built-in validators.
pub mod validators {
    use super::*;

    /// Any string.
    pub fn string() -> SharedValidator {
        Arc::new(StringValidator)
    }

    /// `true` or `false`.
    pub fn boolean() -> SharedValidator {
        Arc::new(BooleanValidator)
    }

    /// Unsigned decimal integer.
    pub fn integer() -> SharedValidator {
        Arc::new(IntegerValidator)
    }

    /// `YYYY-MM-DD HH:MM:SS`.
    pub fn date_time() -> SharedValidator {
        Arc::new(DateTimeValidator)
    }

    /// DNS-safe bucket name.
    pub fn bucket_name() -> SharedValidator {
        Arc::new(BucketNameValidator)
    }

    /// One of the given values.
    pub fn one_of(name: &'static str, allowed: &'static [&'static str]) -> SharedValidator {
        Arc::new(OneOfValidator::new(name, allowed))
    }

    /// Canned ACL.
    pub fn canned_acl() -> SharedValidator {
        one_of("canned-acl", CANNED_ACLS)
    }

    /// `s3` or `swift`.
    pub fn key_type() -> SharedValidator {
        one_of("key-type", KEY_TYPES)
    }

    /// `user` or `bucket`.
    pub fn quota_type() -> SharedValidator {
        one_of("quota-type", QUOTA_TYPES)
    }

    /// Metadata section name.
    pub fn metadata_section() -> SharedValidator {
        one_of("metadata-section", METADATA_SECTIONS)
    }

    /// Subuser access level.
    pub fn subuser_access() -> SharedValidator {
        one_of("subuser-access", SUBUSER_ACCESS)
    }
}
