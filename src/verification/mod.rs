//! Checks a bucket's live configuration against what a test expects.
//!
//! A check fetches one fresh [`BucketConfiguration`](crate::object_storage::BucketConfiguration)
//! and evaluates a single expectation against it. The outcome is a [`Verdict`]:
//! a mismatch is a normal outcome carrying a readable diagnostic, while failing
//! to fetch the bucket at all is an error.

use std::fmt::{Display, Formatter};

pub mod attribute;
pub mod labels;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Success,
    Mismatch(Mismatch),
}

impl Verdict {
    pub fn is_success(&self) -> bool {
        matches!(self, Verdict::Success)
    }
}

impl Display for Verdict {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Success => f.write_str("success"),
            Verdict::Mismatch(mismatch) => write!(f, "{mismatch}"),
        }
    }
}

/// Why a bucket does not match an expectation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mismatch {
    Location {
        expected_prefix: String,
        actual: String,
    },
    StorageClass {
        expected: String,
        actual: String,
    },
    VersioningShouldBeEnabled,
    VersioningShouldBeDisabled,
    LabelValue {
        label_name: String,
        expected: String,
        actual: String,
    },
    LabelNotFound {
        label_name: String,
        expected: String,
    },
}

impl Display for Mismatch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Mismatch::Location {
                expected_prefix,
                actual,
            } => write!(
                f,
                "Bucket location and region must start with `{expected_prefix}`, but location is `{actual}`"
            ),
            Mismatch::StorageClass { expected, actual } => write!(
                f,
                "Storage class is `{actual}` which does not match what is expected: `{expected}`"
            ),
            Mismatch::VersioningShouldBeEnabled => f.write_str("Bucket versioning should be enabled but is not enabled"),
            Mismatch::VersioningShouldBeDisabled => f.write_str("Bucket versioning should not be enabled but is enabled"),
            Mismatch::LabelValue {
                label_name,
                expected,
                actual,
            } => write!(
                f,
                "Expected value for label `{label_name}` is `{expected}` but the value is `{actual}`"
            ),
            Mismatch::LabelNotFound { label_name, expected } => write!(
                f,
                "Expected value for label `{label_name}` is `{expected}` but the bucket has no such label"
            ),
        }
    }
}
