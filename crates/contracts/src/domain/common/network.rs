use super::lenient::null_as_default;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;

/// Блокчейн-сеть, в которой обращается криптовалюта
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyNetwork {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(rename = "chainId", default, deserialize_with = "deserialize_chain_id")]
    pub chain_id: Option<String>,

    /// Фиатные валюты, с которыми сеть не работает
    #[serde(
        rename = "fiatCurrenciesNotSupported",
        default,
        deserialize_with = "deserialize_fiat_exclusions"
    )]
    pub fiat_exclusions: BTreeSet<String>,
}

impl CurrencyNetwork {
    pub fn excludes_fiat(&self, symbol: &str) -> bool {
        self.fiat_exclusions.contains(symbol)
    }
}

// ============================================================================
// Wire decoding
// ============================================================================

/// chainId приходит строкой, числом или null
fn deserialize_chain_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FiatExclusionWire {
    Symbol(String),
    Detailed {
        #[serde(rename = "fiatCurrency")]
        fiat_currency: String,
    },
}

fn deserialize_fiat_exclusions<'de, D>(deserializer: D) -> Result<BTreeSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<FiatExclusionWire>>::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|entry| match entry {
            FiatExclusionWire::Symbol(symbol) => symbol,
            FiatExclusionWire::Detailed { fiat_currency } => fiat_currency,
        })
        .collect())
}
