use actix_web::{web, HttpResponse, Result};
use shared_types::{ApiKeyConfig, SettingsResponse};

use crate::handlers::AppState;

fn mask_api_key(key: &Option<String>) -> Option<String> {
    key.as_ref().map(|k| {
        if k.len() <= 6 {
            k.clone()
        } else {
            let masked = format!("{}{}", &k[..6], "*".repeat(k.len() - 6));
            if masked.len() > 40 {
                format!("{}...", &masked[..37])
            } else {
                masked
            }
        }
    })
}

pub async fn get_settings(data: web::Data<AppState>) -> Result<HttpResponse> {
    let config = data.config.read().map_err(|e| {
        actix_web::error::ErrorInternalServerError(format!(
            "Failed to acquire config read lock: {}",
            e
        ))
    })?;

    let gemini_key = config
        .api_keys
        .as_ref()
        .and_then(|keys| keys.gemini_api_key.clone());

    let api_keys = vec![ApiKeyConfig {
        name: "gemini".to_string(),
        key: mask_api_key(&gemini_key),
        is_configured: gemini_key.is_some(),
    }];

    let config_path = crate::config::get_config_path();
    let response = SettingsResponse {
        config_file_path: config_path.to_string_lossy().to_string(),
        api_keys,
        dataset_path: config.dataset.as_ref().map(|d| d.path.clone()),
    };

    Ok(HttpResponse::Ok().json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_short_key() {
        assert_eq!(
            mask_api_key(&Some("abc".to_string())),
            Some("abc".to_string())
        );
    }

    #[test]
    fn test_mask_long_key() {
        let masked = mask_api_key(&Some("abcdef0123456789".to_string())).unwrap();
        assert!(masked.starts_with("abcdef"));
        assert!(!masked.contains('0'));
    }

    #[test]
    fn test_mask_missing_key() {
        assert_eq!(mask_api_key(&None), None);
    }
}
