//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno con valores por
//! defecto razonables para desarrollo.

use std::env;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
}

impl EnvironmentConfig {
    pub fn from_env() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("PORT must be a valid number"),
            cors_origins: env::var("CORS_ORIGINS")
                .unwrap_or_default()
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_origins_parsing() {
        let config = EnvironmentConfig {
            environment: "production".to_string(),
            host: "0.0.0.0".to_string(),
            port: 3000,
            cors_origins: "https://a.example, https://b.example"
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        };
        assert_eq!(
            config.cors_origins,
            vec!["https://a.example", "https://b.example"]
        );
        assert!(config.is_production());
        assert!(!config.is_development());
    }
}
