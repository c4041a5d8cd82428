use super::CatalogEntry;
use std::collections::HashMap;

/// Неизменяемый каталог с индексом по ключу выбора
///
/// Порядок элементов сохраняется как в ответе API. Индекс строится один раз
/// при создании; при повторе ключа побеждает первое вхождение.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog<T> {
    entries: Vec<T>,
    index: HashMap<String, usize>,
    duplicate_keys: Vec<String>,
}

impl<T> Default for Catalog<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
            duplicate_keys: Vec::new(),
        }
    }
}

impl<T: CatalogEntry> Catalog<T> {
    pub fn new(entries: Vec<T>) -> Self {
        let mut index = HashMap::with_capacity(entries.len());
        let mut duplicate_keys = Vec::new();
        for (pos, entry) in entries.iter().enumerate() {
            let key = entry.catalog_key();
            if index.contains_key(key) {
                duplicate_keys.push(key.to_string());
                continue;
            }
            index.insert(key.to_string(), pos);
        }

        Self {
            entries,
            index,
            duplicate_keys,
        }
    }

    /// Найти элемент по точному совпадению ключа
    pub fn get(&self, key: &str) -> Option<&T> {
        self.index.get(key).map(|&pos| &self.entries[pos])
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn first(&self) -> Option<&T> {
        self.entries.first()
    }

    /// Ключи, встретившиеся повторно (в порядке появления)
    pub fn duplicate_keys(&self) -> &[String] {
        &self.duplicate_keys
    }
}

impl<T> Catalog<T> {
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a, T> IntoIterator for &'a Catalog<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
