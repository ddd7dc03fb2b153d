use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::fmt::{Display, Formatter};
use strum::{EnumMessage, IntoEnumIterator};

use crate::ui::cli::drivers::PromptDriver;
use crate::ui::types::choices::{FieldKind, FieldSpec, UIChoice, field_specs};

const DIM_ITALIC: &str = "\x1b[2m\x1b[3m";
const RESET: &str = "\x1b[0m";

struct KindItem<K> {
    kind: K,
    text: String,
}

impl<K> Display for KindItem<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

fn kind_items<K>() -> Vec<KindItem<K>>
where
    K: Copy + Into<&'static str> + EnumMessage + IntoEnumIterator,
{
    K::iter()
        .map(|k| {
            let label = k.get_message().unwrap_or_else(|| k.into());
            let desc = k.get_detailed_message().unwrap_or("");
            let text = if desc.is_empty() {
                label.to_string()
            } else {
                format!("{label}  {DIM_ITALIC}{desc}{RESET}")
            };
            KindItem { kind: k, text }
        })
        .collect()
}

/// Asks which kind of `C` to build, then one question per parameter.
pub fn prompt_choice<C: UIChoice, D: PromptDriver>(driver: &D) -> Result<C> {
    let items = kind_items::<C::Kind>();
    let labels: Vec<String> = items.iter().map(ToString::to_string).collect();

    let idx = driver.select(C::prompt_label(), C::prompt_help(), &labels)?;
    let choice_kind = items
        .get(idx)
        .map(|i| i.kind)
        .with_context(|| format!("no option at index {idx}"))?;

    let specs = field_specs(&C::params_schema(choice_kind))?;
    let defaults = C::default_params(choice_kind);

    let mut params = Map::new();
    for s in specs {
        let init = s.default.clone().or_else(|| defaults.get(&s.name).cloned());
        if let Some(val) = ask_field(driver, &s, init)? {
            params.insert(s.name.clone(), val);
        }
    }

    C::from_parts(choice_kind, Value::Object(params))
}

fn ask_field<D: PromptDriver>(
    driver: &D,
    s: &FieldSpec,
    init: Option<Value>,
) -> Result<Option<Value>> {
    let help = s.description.as_deref().unwrap_or("");
    let optional = !s.required && matches!(init, None | Some(Value::Null));

    match s.kind {
        FieldKind::String if optional => {
            let answer = driver.ask_string(&s.title, &format!("{help}\n(leave blank for none)"), "")?;
            let answer = answer.trim();
            Ok((!answer.is_empty()).then(|| Value::String(answer.to_string())))
        }
        FieldKind::String => {
            let def = init
                .as_ref()
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            let answer = driver.ask_string(&s.title, help, &def)?;
            Ok(Some(Value::String(answer.trim().to_string())))
        }
        FieldKind::Integer => {
            let def = init.and_then(|v| v.as_u64()).or(s.min).unwrap_or(0);
            let n = driver.ask_u64(&s.title, help, def, s.min, s.max)?;
            Ok(Some(Value::from(n)))
        }
    }
}
