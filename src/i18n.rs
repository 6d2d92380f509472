//! Localized display strings.
//!
//! String keys are typed, so a missing translation is a compile error rather
//! than a blank label.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Display-string keys used by the read receipt screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Screen title.
    ReadReceipt,
    /// Empty-state message.
    NoReadReceipts,
    /// Activity indicator label.
    Loading,
    HintQuit,
    HintReload,
    HintTheme,
    HintScroll,
}

/// Supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Language {
    #[default]
    En,
    PtBr,
    De,
    Es,
}

impl Language {
    pub fn tag(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::PtBr => "pt-BR",
            Language::De => "de",
            Language::Es => "es",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported language '{0}' (expected en, pt-BR, de or es)")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "en" | "en-us" | "en-gb" => Ok(Language::En),
            "pt-br" | "pt" => Ok(Language::PtBr),
            "de" | "de-de" => Ok(Language::De),
            "es" | "es-es" => Ok(Language::Es),
            _ => Err(UnknownLanguage(s.to_string())),
        }
    }
}

impl TryFrom<String> for Language {
    type Error = UnknownLanguage;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// String lookup for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct I18n {
    language: Language,
}

impl I18n {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Resolve a key to display text.
    pub fn t(&self, key: Key) -> &'static str {
        match self.language {
            Language::En => match key {
                Key::ReadReceipt => "Read Receipt",
                Key::NoReadReceipts => "No read receipts",
                Key::Loading => "Loading...",
                Key::HintQuit => "quit",
                Key::HintReload => "reload",
                Key::HintTheme => "theme",
                Key::HintScroll => "scroll",
            },
            Language::PtBr => match key {
                Key::ReadReceipt => "Confirmação de leitura",
                Key::NoReadReceipts => "Não há confirmações de leitura",
                Key::Loading => "Carregando...",
                Key::HintQuit => "sair",
                Key::HintReload => "recarregar",
                Key::HintTheme => "tema",
                Key::HintScroll => "rolar",
            },
            Language::De => match key {
                Key::ReadReceipt => "Lesebestätigung",
                Key::NoReadReceipts => "Keine Lesebestätigungen",
                Key::Loading => "Lädt...",
                Key::HintQuit => "beenden",
                Key::HintReload => "neu laden",
                Key::HintTheme => "Design",
                Key::HintScroll => "blättern",
            },
            Language::Es => match key {
                Key::ReadReceipt => "Confirmación de lectura",
                Key::NoReadReceipts => "No hay confirmaciones de lectura",
                Key::Loading => "Cargando...",
                Key::HintQuit => "salir",
                Key::HintReload => "recargar",
                Key::HintTheme => "tema",
                Key::HintScroll => "desplazar",
            },
        }
    }
}
