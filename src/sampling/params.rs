use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

fn default_samples() -> u64 {
    10
}

fn default_interval_millis() -> u64 {
    1000
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SamplerParams {
    #[serde(default = "default_samples")]
    #[schemars(
        title = "Samples",
        description = "How many readings to take",
        range(min = 1)
    )]
    pub samples: u64,

    #[serde(default = "default_interval_millis")]
    #[schemars(
        title = "Interval (ms)",
        description = "Pause between consecutive readings, in milliseconds"
    )]
    pub interval_millis: u64,
}

impl Default for SamplerParams {
    fn default() -> Self {
        Self {
            samples: default_samples(),
            interval_millis: default_interval_millis(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_fields_take_defaults() {
        let p: SamplerParams = serde_json::from_value(json!({})).unwrap();
        assert_eq!(p, SamplerParams::default());
        assert_eq!(p.samples, 10);
        assert_eq!(p.interval_millis, 1000);
    }

    #[test]
    fn explicit_fields_win() {
        let p: SamplerParams =
            serde_json::from_value(json!({ "samples": 3, "interval_millis": 0 })).unwrap();
        assert_eq!(p.samples, 3);
        assert_eq!(p.interval_millis, 0);
    }
}
