//! Game domain models and DTOs.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::entity::game;

/// Platform enum. Stored as TEXT using the display names below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "PC")]
    Pc,
    PlayStation,
    Xbox,
    Nintendo,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pc => "PC",
            Self::PlayStation => "PlayStation",
            Self::Xbox => "Xbox",
            Self::Nintendo => "Nintendo",
        }
    }

    /// Parse from the stored/submitted text. Case-sensitive by design.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "PC" => Some(Self::Pc),
            "PlayStation" => Some(Self::PlayStation),
            "Xbox" => Some(Self::Xbox),
            "Nintendo" => Some(Self::Nintendo),
            _ => None,
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Play status enum. Defaults to `Pendiente`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Pendiente,
    Jugando,
    Terminado,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pendiente => "Pendiente",
            Self::Jugando => "Jugando",
            Self::Terminado => "Terminado",
        }
    }

    /// Parse from the stored/submitted text. Case-sensitive by design.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Pendiente" => Some(Self::Pendiente),
            "Jugando" => Some(Self::Jugando),
            "Terminado" => Some(Self::Terminado),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Optional equality filters for listing a user's collection.
///
/// Absent or empty fields add no predicate; present fields combine
/// conjunctively. Field names match the query string of the admin panel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameFilter {
    #[serde(default)]
    pub plataforma: Option<String>,
    #[serde(default)]
    pub genero: Option<String>,
    #[serde(default)]
    pub estado: Option<String>,
}

impl GameFilter {
    /// A field only restricts results when present and non-empty.
    pub fn active_plataforma(&self) -> Option<&str> {
        self.plataforma.as_deref().filter(|s| !s.is_empty())
    }

    pub fn active_genero(&self) -> Option<&str> {
        self.genero.as_deref().filter(|s| !s.is_empty())
    }

    pub fn active_estado(&self) -> Option<&str> {
        self.estado.as_deref().filter(|s| !s.is_empty())
    }
}

/// Game DTO exposed to handlers and views.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Game {
    pub id: i32,
    pub id_usuario: i32,
    pub titulo: String,
    pub plataforma: String,
    pub genero: String,
    pub estado: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imagen: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_creacion: Option<NaiveDateTime>,
}

impl From<game::Model> for Game {
    fn from(m: game::Model) -> Self {
        Game {
            id: m.id,
            id_usuario: m.id_usuario,
            titulo: m.titulo,
            plataforma: m.plataforma,
            genero: m.genero.unwrap_or_default(),
            estado: m.estado,
            imagen: m.imagen,
            fecha_creacion: m.fecha_creacion,
        }
    }
}
