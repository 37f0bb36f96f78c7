use std::collections::HashMap;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server_bind: String,
    pub operator_email: String,
    pub site_name: String,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: String,
    pub smtp_password: String,
    pub smtp_from_address: String,
    pub smtp_from_name: String,
    pub smtp_send_timeout_seconds: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:8080".into(),
            operator_email: "info@pureprintsmedia.com".into(),
            site_name: "Pure Prints Media".into(),
            smtp_host: "localhost".into(),
            smtp_port: 587,
            smtp_username: String::new(),
            smtp_password: String::new(),
            smtp_from_address: "no-reply@pureprintsmedia.com".into(),
            smtp_from_name: "Pure Prints Media".into(),
            smtp_send_timeout_seconds: 30,
        }
    }
}

pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = std::fs::read_to_string("relay.toml") {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(v) = file_cfg.get("bind_addr") {
                settings.server_bind = v.clone();
            }
            if let Some(v) = file_cfg.get("operator_email") {
                settings.operator_email = v.clone();
            }
            if let Some(v) = file_cfg.get("site_name") {
                settings.site_name = v.clone();
            }
            if let Some(v) = file_cfg.get("smtp_host") {
                settings.smtp_host = v.clone();
            }
            if let Some(v) = file_cfg.get("smtp_port") {
                if let Ok(parsed) = v.parse::<u16>() {
                    settings.smtp_port = parsed;
                }
            }
            if let Some(v) = file_cfg.get("smtp_username") {
                settings.smtp_username = v.clone();
            }
            if let Some(v) = file_cfg.get("smtp_password") {
                settings.smtp_password = v.clone();
            }
            if let Some(v) = file_cfg.get("smtp_from_address") {
                settings.smtp_from_address = v.clone();
            }
            if let Some(v) = file_cfg.get("smtp_from_name") {
                settings.smtp_from_name = v.clone();
            }
        }
    }

    if let Ok(v) = std::env::var("SERVER_BIND") {
        settings.server_bind = v;
    }
    if let Ok(v) = std::env::var("APP__BIND_ADDR") {
        settings.server_bind = v;
    }

    if let Ok(v) = std::env::var("OPERATOR_EMAIL") {
        settings.operator_email = v;
    }
    if let Ok(v) = std::env::var("APP__OPERATOR_EMAIL") {
        settings.operator_email = v;
    }

    if let Ok(v) = std::env::var("SITE_NAME") {
        settings.site_name = v;
    }
    if let Ok(v) = std::env::var("APP__SITE_NAME") {
        settings.site_name = v;
    }

    if let Ok(v) = std::env::var("SMTP_HOST") {
        settings.smtp_host = v;
    }
    if let Ok(v) = std::env::var("APP__SMTP_HOST") {
        settings.smtp_host = v;
    }

    if let Ok(v) = std::env::var("SMTP_PORT") {
        if let Ok(parsed) = v.parse::<u16>() {
            settings.smtp_port = parsed;
        }
    }
    if let Ok(v) = std::env::var("APP__SMTP_PORT") {
        if let Ok(parsed) = v.parse::<u16>() {
            settings.smtp_port = parsed;
        }
    }

    if let Ok(v) = std::env::var("SMTP_USERNAME") {
        settings.smtp_username = v;
    }
    if let Ok(v) = std::env::var("APP__SMTP_USERNAME") {
        settings.smtp_username = v;
    }

    if let Ok(v) = std::env::var("SMTP_PASSWORD") {
        settings.smtp_password = v;
    }
    if let Ok(v) = std::env::var("APP__SMTP_PASSWORD") {
        settings.smtp_password = v;
    }

    if let Ok(v) = std::env::var("SMTP_FROM_ADDRESS") {
        settings.smtp_from_address = v;
    }
    if let Ok(v) = std::env::var("APP__SMTP_FROM_ADDRESS") {
        settings.smtp_from_address = v;
    }

    if let Ok(v) = std::env::var("SMTP_FROM_NAME") {
        settings.smtp_from_name = v;
    }
    if let Ok(v) = std::env::var("APP__SMTP_FROM_NAME") {
        settings.smtp_from_name = v;
    }

    if let Ok(v) = std::env::var("APP__SMTP_SEND_TIMEOUT_SECONDS") {
        if let Ok(parsed) = v.parse::<u64>() {
            settings.smtp_send_timeout_seconds = parsed;
        }
    }

    settings
}
