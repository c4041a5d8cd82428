use crate::domain::common::lenient::null_as_default;
use crate::domain::common::{CatalogEntry, CurrencyNetwork};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// Aggregate
// ============================================================================

/// Криптовалюта из каталога поддерживаемых активов
///
/// Ключ выбора — `display_id` (`uniqueId` в API): один и тот же актив в разных
/// сетях имеет общий `stable_id`, но разные `display_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CryptoAsset {
    #[serde(rename = "coinId", default, deserialize_with = "null_as_default")]
    pub stable_id: String,

    #[serde(rename = "uniqueId")]
    pub display_id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub symbol: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub network: CurrencyNetwork,

    #[serde(default, deserialize_with = "null_as_default")]
    pub image: CryptoImage,

    /// Остальные поля API, не используемые страницей
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Набор изображений актива
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CryptoImage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub thumb: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub small: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub large: Option<String>,
}

impl CryptoAsset {
    /// Адрес иконки для карточки (миниатюра)
    pub fn icon_url(&self) -> &str {
        &self.image.thumb
    }

    /// Можно ли покупать актив за указанную фиатную валюту
    pub fn supports_fiat(&self, fiat_symbol: &str) -> bool {
        !self.network.excludes_fiat(fiat_symbol)
    }
}

impl CatalogEntry for CryptoAsset {
    fn catalog_key(&self) -> &str {
        &self.display_id
    }

    fn option_label(&self) -> String {
        format!("{} ({}) - {}", self.name, self.symbol, self.network.name)
    }

    fn catalog_name() -> &'static str {
        "crypto-currencies"
    }

    fn placeholder_label() -> &'static str {
        "Select a cryptocurrency"
    }
}
