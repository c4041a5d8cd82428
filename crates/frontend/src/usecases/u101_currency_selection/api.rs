use super::error::CatalogLoadFailure;
use super::state::LoadedCatalogs;
use crate::shared::config::ApiConfig;
use contracts::domain::a001_crypto_asset::aggregate::CryptoAsset;
use contracts::domain::a002_fiat_currency::aggregate::FiatCurrency;
use contracts::domain::common::{CatalogEntry, CatalogResponse};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

/// Fetch both catalogs concurrently. Either failure fails the whole load.
pub async fn fetch_catalogs(api: &ApiConfig) -> Result<LoadedCatalogs, CatalogLoadFailure> {
    let crypto_url = api.crypto_url();
    let fiat_url = api.fiat_url();

    let (cryptos, fiats) = futures::try_join!(
        fetch_catalog::<CryptoAsset>(&crypto_url),
        fetch_catalog::<FiatCurrency>(&fiat_url),
    )?;

    Ok(LoadedCatalogs { cryptos, fiats })
}

/// GET one catalog endpoint and unwrap its `response` array
pub async fn fetch_catalog<T>(url: &str) -> Result<Vec<T>, CatalogLoadFailure>
where
    T: CatalogEntry + DeserializeOwned,
{
    let catalog = T::catalog_name();

    let resp = Request::get(url)
        .header("accept", "application/json")
        .send()
        .await
        .map_err(|e| CatalogLoadFailure::Transport {
            catalog,
            message: e.to_string(),
        })?;

    if !resp.ok() {
        return Err(CatalogLoadFailure::Status {
            catalog,
            status: resp.status(),
        });
    }

    let text = resp.text().await.map_err(|e| CatalogLoadFailure::Transport {
        catalog,
        message: e.to_string(),
    })?;
    decode_catalog(&text)
}

pub fn decode_catalog<T>(body: &str) -> Result<Vec<T>, CatalogLoadFailure>
where
    T: CatalogEntry + DeserializeOwned,
{
    let data: CatalogResponse<T> =
        serde_json::from_str(body).map_err(|e| CatalogLoadFailure::Decode {
            catalog: T::catalog_name(),
            message: e.to_string(),
        })?;
    Ok(data.response)
}
