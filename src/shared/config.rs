use serde::{Deserialize, Serialize};

pub const DEFAULT_LOG_FILTER: &str = "granular_sync=debug,info";
pub const DEFAULT_INTEGRITY_TEMPLATE: &str = "%s -> %s: value %s not found (from %s)";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub errors: ErrorReportingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    pub filter: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorReportingConfig {
    /// 参照整合性エラーの説明文テンプレート（`%s` を from/to/値/uid の順で置換）
    pub integrity_description_template: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Default for ErrorReportingConfig {
    fn default() -> Self {
        Self {
            integrity_description_template: DEFAULT_INTEGRITY_TEMPLATE.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(v) = std::env::var("GRANULAR_SYNC_LOG")
            && let Some(value) = parse_non_empty(&v)
        {
            cfg.logging.filter = value;
        }
        if let Ok(v) = std::env::var("GRANULAR_SYNC_FK_TEMPLATE")
            && let Some(value) = parse_non_empty(&v)
        {
            cfg.errors.integrity_description_template = value;
        }

        cfg
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.logging.filter.trim().is_empty() {
            return Err("Logging filter must not be empty".to_string());
        }
        if !self.errors.integrity_description_template.contains("%s") {
            return Err(
                "Integrity description template must contain at least one %s placeholder"
                    .to_string(),
            );
        }
        Ok(())
    }
}

fn parse_non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
