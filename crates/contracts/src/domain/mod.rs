pub mod a001_crypto_asset;
pub mod a002_fiat_currency;
pub mod common;
