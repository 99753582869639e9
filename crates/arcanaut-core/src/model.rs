use serde::{Deserialize, Serialize};

/// One named sub-entry of a kit. Every kit nominally carries exactly three.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Power {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao")]
    pub description: String,
}

/// A character kit extracted from the book.
///
/// Field names on the wire keep the Portuguese labels used by the source
/// material (`nome`, `nucleos`, ...), so the JSON artifact is directly
/// consumable by downstream tooling built against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kit {
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "nucleos")]
    pub categories: Vec<String>,
    #[serde(rename = "exigencias")]
    pub requirements: Vec<String>,
    #[serde(rename = "poderes")]
    pub powers: Vec<Power>,
    #[serde(rename = "pagina_inicial")]
    pub start_page: usize,
}

/// Format the stable identifier for the `ordinal`-th kit (1-based).
pub fn kit_id(ordinal: usize) -> String {
    format!("kit_{ordinal:03}")
}
