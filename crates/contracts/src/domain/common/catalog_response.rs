use serde::{Deserialize, Serialize};

/// Конверт ответа API каталогов: `{ "response": [ ... ] }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogResponse<T> {
    pub response: Vec<T>,
}
