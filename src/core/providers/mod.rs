pub mod headhunter;
pub mod superjob;

pub use headhunter::HeadHunterClient;
pub use superjob::SuperjobClient;

use crate::utils::error::{AggError, Result};
use serde_json::Value;

/// Approximate exchange rate applied to salaries reported in a currency
/// other than rubles. A fixed constant, not a live quote; normalized
/// amounts are a known imprecision, consistent across providers.
pub const APPROX_RUB_RATE: u64 = 78;

/// Normalizes one raw salary bound. A missing or zero bound stays absent
/// (never `Some(0)`); a bound in rubles passes through; anything else is
/// converted at [`APPROX_RUB_RATE`].
pub(crate) fn reconcile_bound(raw: Option<u64>, in_rubles: bool) -> Option<u64> {
    match raw {
        None | Some(0) => None,
        Some(value) if in_rubles => Some(value),
        Some(value) => Some(value * APPROX_RUB_RATE),
    }
}

/// Provider ids arrive as JSON strings or numbers depending on the API.
pub(crate) fn id_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

pub(crate) fn require_str(item: &Value, field: &str, provider: &str) -> Result<String> {
    item.get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            AggError::response_format(format!("{provider} record is missing field {field:?}"))
        })
}
