//! Static registry of the feature modules a USER can be assigned to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A feature area. Serialized as its wire key (`"CHAT"`, `"AI_CHAT"`, ...).
/// The default is the module unassigned users land in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ModuleKey {
    #[default]
    Chat,
    AiChat,
    Dashboard,
    Pdv,
    Financeiro,
    Doom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleEntry {
    pub key: ModuleKey,
    pub label: &'static str,
    pub route: &'static str,
}

pub const MODULES: [ModuleEntry; 6] = [
    ModuleEntry { key: ModuleKey::Chat, label: "Chat geral", route: "/chat" },
    ModuleEntry { key: ModuleKey::AiChat, label: "AI CHAT", route: "/ai-chat" },
    ModuleEntry { key: ModuleKey::Dashboard, label: "Campo RPG", route: "/dashboard" },
    ModuleEntry { key: ModuleKey::Pdv, label: "PDV", route: "/pdv" },
    ModuleEntry { key: ModuleKey::Financeiro, label: "Financeiro", route: "/financeiro" },
    ModuleEntry { key: ModuleKey::Doom, label: "Doom", route: "/doom" },
];

/// Route used when a user has no (or an unknown) module.
pub const FALLBACK_ROUTE: &str = "/chat";

impl ModuleKey {
    pub fn entry(self) -> &'static ModuleEntry {
        // MODULES lists every variant in declaration order.
        &MODULES[self as usize]
    }

    pub fn label(self) -> &'static str {
        self.entry().label
    }

    pub fn route(self) -> &'static str {
        self.entry().route
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ModuleKey::Chat => "CHAT",
            ModuleKey::AiChat => "AI_CHAT",
            ModuleKey::Dashboard => "DASHBOARD",
            ModuleKey::Pdv => "PDV",
            ModuleKey::Financeiro => "FINANCEIRO",
            ModuleKey::Doom => "DOOM",
        }
    }
}

/// Default landing route of a module, `/chat` when unset.
pub fn route_for(module: Option<ModuleKey>) -> &'static str {
    module.map(ModuleKey::route).unwrap_or(FALLBACK_ROUTE)
}

impl fmt::Display for ModuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownModule(pub String);

impl fmt::Display for UnknownModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown module: {}", self.0)
    }
}

impl std::error::Error for UnknownModule {}

impl FromStr for ModuleKey {
    type Err = UnknownModule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MODULES
            .iter()
            .map(|entry| entry.key)
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownModule(s.to_string()))
    }
}
