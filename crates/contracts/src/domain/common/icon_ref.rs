use serde::{Deserialize, Serialize};

/// Ссылка на иконку: адрес картинки или встроенная SVG-разметка
///
/// API отдаёт оба варианта в одном строковом поле. Строка, начинающаяся
/// с `<`, считается разметкой; всё остальное считается адресом.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum IconRef {
    Url(String),
    InlineSvg(String),
}

impl IconRef {
    pub fn is_empty(&self) -> bool {
        match self {
            IconRef::Url(url) => url.is_empty(),
            IconRef::InlineSvg(markup) => markup.trim().is_empty(),
        }
    }
}

impl Default for IconRef {
    fn default() -> Self {
        IconRef::Url(String::new())
    }
}

impl From<String> for IconRef {
    fn from(raw: String) -> Self {
        if raw.trim_start().starts_with('<') {
            IconRef::InlineSvg(raw)
        } else {
            IconRef::Url(raw.trim().to_string())
        }
    }
}

impl From<Option<String>> for IconRef {
    fn from(raw: Option<String>) -> Self {
        raw.map(IconRef::from).unwrap_or_default()
    }
}

impl From<IconRef> for String {
    fn from(icon: IconRef) -> Self {
        match icon {
            IconRef::Url(s) | IconRef::InlineSvg(s) => s,
        }
    }
}
