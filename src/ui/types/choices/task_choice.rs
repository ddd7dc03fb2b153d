use crate::bridge::Request;
use crate::sampling::SamplerParams;
use crate::ui::types::choices::{UIChoice, params_schema};
use schemars::{JsonSchema, Schema};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

fn default_method() -> String {
    let name: &'static str = Request::GetMemoryUsage.into();
    name.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct InvokeParams {
    #[serde(default = "default_method")]
    #[schemars(
        title = "Method",
        description = "Method name sent over the bridge (getMemoryUsage is the only one answered)"
    )]
    pub method: String,
}

impl Default for InvokeParams {
    fn default() -> Self {
        Self {
            method: default_method(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct WatchParams {
    #[serde(default = "WatchParams::default_samples")]
    #[schemars(
        title = "Samples",
        description = "How many readings to take",
        range(min = 1)
    )]
    pub samples: u64,

    #[serde(default = "WatchParams::default_interval_millis")]
    #[schemars(
        title = "Interval (ms)",
        description = "Pause between consecutive readings, in milliseconds"
    )]
    pub interval_millis: u64,

    #[serde(default)]
    #[schemars(
        title = "Output file",
        description = "Write the readings here (.csv, .tsv or .json)"
    )]
    pub output: Option<String>,
}

impl WatchParams {
    fn default_samples() -> u64 {
        SamplerParams::default().samples
    }
    fn default_interval_millis() -> u64 {
        SamplerParams::default().interval_millis
    }
}

impl Default for WatchParams {
    fn default() -> Self {
        Self {
            samples: Self::default_samples(),
            interval_millis: Self::default_interval_millis(),
            output: None,
        }
    }
}

impl From<&WatchParams> for SamplerParams {
    fn from(p: &WatchParams) -> Self {
        SamplerParams {
            samples: p.samples,
            interval_millis: p.interval_millis,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants, PartialEq)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(TaskKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum TaskChoice {
    #[strum_discriminants(strum(
        message = "Invoke Method",
        detailed_message = "Send one method call through the memory usage bridge."
    ))]
    InvokeMethod(InvokeParams),

    #[strum_discriminants(strum(
        message = "Watch Memory",
        detailed_message = "Sample the memory footprint repeatedly and optionally export it."
    ))]
    WatchMemory(WatchParams),
}

impl UIChoice for TaskChoice {
    type Kind = TaskKind;

    fn prompt_label() -> &'static str {
        "Choose a task:"
    }

    fn params_schema(kind: Self::Kind) -> Schema {
        match kind {
            TaskKind::InvokeMethod => params_schema::<InvokeParams>(),
            TaskKind::WatchMemory => params_schema::<WatchParams>(),
        }
    }

    fn default_params(kind: Self::Kind) -> Value {
        match kind {
            TaskKind::InvokeMethod => json!(InvokeParams::default()),
            TaskKind::WatchMemory => json!(WatchParams::default()),
        }
    }
}
