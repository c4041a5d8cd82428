use serde::{Deserialize, Deserializer};

/// Поле, которое API иногда отдаёт как `null`: `null` читается как значение
/// по умолчанию. Отсутствие поля покрывает `#[serde(default)]`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
