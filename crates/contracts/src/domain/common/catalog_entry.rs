/// Трейт для элемента каталога валют
///
/// Каталог выбирается по строковому ключу, поэтому каждый элемент обязан
/// предоставить ключ, подпись для выпадающего списка и метаданные каталога.
pub trait CatalogEntry {
    /// Ключ выбора (уникален в пределах загруженного каталога)
    fn catalog_key(&self) -> &str;

    /// Подпись элемента в выпадающем списке
    fn option_label(&self) -> String;

    /// Имя каталога в API (например, "crypto-currencies")
    fn catalog_name() -> &'static str;

    /// Подпись пустого варианта выбора
    fn placeholder_label() -> &'static str;
}
