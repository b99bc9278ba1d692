use serde::{Deserialize, Serialize};

/// Профиль, при котором из списка продуктов сделки убирается действие
/// "открыть продукт"
pub const RESTRICTED_PROFILE: &str = "Commercial";

/// Классификация профиля текущего пользователя, как её отдаёт платформа.
/// Запрашивается один раз при активации компонента.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentProfile {
    pub name: String,
}

impl CurrentProfile {
    pub fn is_restricted(&self) -> bool {
        self.name == RESTRICTED_PROFILE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_restricted() {
        let p = CurrentProfile {
            name: "Commercial".to_string(),
        };
        assert!(p.is_restricted());

        let p = CurrentProfile {
            name: "System Administrator".to_string(),
        };
        assert!(!p.is_restricted());
    }
}
