use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;

use crate::models::Difficulty;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub game: GameConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory with the browser client, served as the fallback route
    pub static_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    pub words_path: String,
    /// Tier used when a client starts a game without naming one
    pub default_difficulty: Difficulty,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let server = ServerConfig {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("PORT must be a number")?,
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| "./public".to_string()),
        };

        let game = GameConfig {
            words_path: env::var("WORDS_PATH").unwrap_or_else(|_| "./palabras.json".to_string()),
            default_difficulty: match env::var("DEFAULT_DIFFICULTY") {
                Ok(value) => value
                    .parse::<Difficulty>()
                    .map_err(anyhow::Error::msg)
                    .context("DEFAULT_DIFFICULTY must be easy, medium or hard")?,
                Err(_) => Difficulty::default(),
            },
        };

        Ok(Config { server, game })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
                static_dir: "./public".to_string(),
            },
            game: GameConfig {
                words_path: "./palabras.json".to_string(),
                default_difficulty: Difficulty::default(),
            },
        }
    }
}
