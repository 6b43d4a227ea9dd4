use serde::{Deserialize, Serialize};

/// Id of the inline JSON element in index.html that carries the config.
pub const CONFIG_ELEMENT_ID: &str = "board-config";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BoardConfig {
    pub column_title_prefix: String,
    pub task_content_prefix: String,
    /// Pixels the pointer must travel before a press becomes a drag.
    pub drag_activation_distance: i32,
    /// Titles of the columns the board starts with.
    pub initial_columns: Vec<String>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            column_title_prefix: "Column".to_string(),
            task_content_prefix: "Task".to_string(),
            drag_activation_distance: 3,
            initial_columns: Vec::new(),
        }
    }
}

impl BoardConfig {
    pub fn from_json(raw: &str) -> Result<Self, String> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let mut config: Self = serde_json::from_str(raw)
            .map_err(|e| format!("Failed to parse board config: {}", e))?;
        if config.drag_activation_distance < 0 {
            return Err(format!(
                "drag_activation_distance must not be negative (got {})",
                config.drag_activation_distance
            ));
        }
        config.initial_columns.retain(|title| !title.trim().is_empty());
        Ok(config)
    }

    /// Reads the config element from the page. A missing element means
    /// defaults; a malformed one is logged and also falls back to defaults.
    pub fn load_from_document() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match raw {
            Some(raw) => match Self::from_json(&raw) {
                Ok(config) => {
                    web_sys::console::log_1(&format!("Loaded board config: {:?}", config).into());
                    config
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("{}; using defaults", e).into());
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }
}
