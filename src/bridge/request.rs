use crate::bridge::MethodCall;
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumMessage, EnumString, IntoStaticStr};
use thiserror::Error;

/// Every method the bridge answers, keyed by its wire name.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumMessage, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "camelCase")]
pub enum Request {
    #[strum(
        message = "Get Memory Usage",
        detailed_message = "Physical footprint of this process in MB (-1 on failure)."
    )]
    GetMemoryUsage,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown method: {0}")]
pub struct UnknownMethod(pub String);

impl TryFrom<&MethodCall> for Request {
    type Error = UnknownMethod;

    fn try_from(call: &MethodCall) -> Result<Self, Self::Error> {
        Request::from_str(&call.method).map_err(|_| UnknownMethod(call.method.clone()))
    }
}
