use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Роль пользователя дашборда. Задаётся один раз на сессию.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    #[serde(alias = "pt")]
    PersonalTrainer,
}

impl Role {
    /// Код роли, используется в URL (`/dashboard/<code>`)
    pub fn code(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::PersonalTrainer => "personal_trainer",
        }
    }

    /// Человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::PersonalTrainer => "Personal Trainer",
        }
    }

    pub fn all() -> [Role; 2] {
        [Role::Admin, Role::PersonalTrainer]
    }

    /// Парсинг из строки. `pt` принимается как короткий код тренера.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "admin" => Some(Role::Admin),
            "personal_trainer" | "pt" => Some(Role::PersonalTrainer),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Role {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        Role::from_code(s.trim()).ok_or_else(|| anyhow!("unknown role code: '{}'", s))
    }
}

/// Identity handed to the dashboard by the session collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub role: Role,
    pub user_name: String,
    pub user_email: String,
    pub user_avatar: Option<String>,
}

impl Identity {
    /// Up to two uppercase initials, used when no avatar is set.
    pub fn initials(&self) -> String {
        self.user_name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_codes() {
        for role in Role::all() {
            assert_eq!(Role::from_code(role.code()), Some(role));
        }
        assert_eq!(Role::from_code("pt"), Some(Role::PersonalTrainer));
        assert_eq!(Role::from_code("owner"), None);
    }

    #[test]
    fn test_role_from_str() {
        assert_eq!(" admin ".parse::<Role>().unwrap(), Role::Admin);
        let err = "coach".parse::<Role>().unwrap_err();
        assert!(err.to_string().contains("coach"));
    }

    #[test]
    fn test_role_serde_alias() {
        let role: Role = serde_json::from_str("\"pt\"").unwrap();
        assert_eq!(role, Role::PersonalTrainer);
        assert_eq!(
            serde_json::to_string(&Role::PersonalTrainer).unwrap(),
            "\"personal_trainer\""
        );
    }

    #[test]
    fn test_initials() {
        let identity = Identity {
            role: Role::Admin,
            user_name: "maria de souza lima".to_string(),
            user_email: "maria@example.com".to_string(),
            user_avatar: None,
        };
        assert_eq!(identity.initials(), "MD");
    }
}
