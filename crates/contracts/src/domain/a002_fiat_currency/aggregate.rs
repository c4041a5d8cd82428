use crate::domain::common::lenient::null_as_default;
use crate::domain::common::{CatalogEntry, CurrencyNetwork, IconRef};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// Aggregate
// ============================================================================

/// Фиатная валюта из каталога поддерживаемых валют
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FiatCurrency {
    /// Код валюты (ключ выбора), например "USD"
    pub symbol: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Обычно встроенный SVG флага
    #[serde(rename = "icon", default)]
    pub icon: IconRef,

    /// Способы оплаты в порядке, заданном API
    #[serde(rename = "paymentOptions", default, deserialize_with = "null_as_default")]
    pub payment_methods: Vec<PaymentMethod>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub network: CurrencyNetwork,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ============================================================================
// Nested entity
// ============================================================================

/// Способ оплаты, доступный для фиатной валюты
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethod {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(rename = "processingTime", default, deserialize_with = "null_as_default")]
    pub processing_time: String,

    #[serde(default)]
    pub icon: IconRef,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PaymentMethod {
    /// Строка вида "Card - 5 min"
    pub fn summary(&self) -> String {
        format!("{} - {}", self.name, self.processing_time)
    }
}

impl CatalogEntry for FiatCurrency {
    fn catalog_key(&self) -> &str {
        &self.symbol
    }

    fn option_label(&self) -> String {
        format!("{} ({})", self.name, self.symbol)
    }

    fn catalog_name() -> &'static str {
        "fiat-currencies"
    }

    fn placeholder_label() -> &'static str {
        "Select a fiat currency"
    }
}
