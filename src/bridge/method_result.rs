use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::{Display, Formatter, Result};

/// Answer to a [`MethodCall`](crate::bridge::MethodCall).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "kebab-case")]
pub enum MethodResult {
    Success(Value),
    /// The method name is not one this handler knows.
    NotImplemented,
}

impl MethodResult {
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, MethodResult::NotImplemented)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            MethodResult::Success(v) => v.as_f64(),
            MethodResult::NotImplemented => None,
        }
    }
}

impl Display for MethodResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            MethodResult::Success(v) => write!(f, "{v}"),
            MethodResult::NotImplemented => write!(f, "not implemented"),
        }
    }
}
