use {
    crate::BuilderError,
    serde::{de, de::Deserializer, ser::Serializer, Deserialize, Serialize},
    std::{
        collections::HashSet,
        fmt::{Display, Formatter, Result as FmtResult},
        slice::Iter,
        str::FromStr,
    },
};

/// The coarse permission category AWS assigns to every action.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum AccessLevel {
    List,
    Read,
    Tagging,
    Write,
    PermissionsManagement,
}

impl AccessLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::List => "List",
            Self::Read => "Read",
            Self::Tagging => "Tagging",
            Self::Write => "Write",
            Self::PermissionsManagement => "Permissions management",
        }
    }
}

impl Display for AccessLevel {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessLevel {
    type Err = BuilderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "List" => Ok(Self::List),
            "Read" => Ok(Self::Read),
            "Tagging" => Ok(Self::Tagging),
            "Write" => Ok(Self::Write),
            "Permissions management" => Ok(Self::PermissionsManagement),
            _ => Err(BuilderError::InvalidAccessLevel(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for AccessLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        AccessLevel::from_str(&s).map_err(de::Error::custom)
    }
}

impl Serialize for AccessLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A service's static action to access level table.
///
/// Action names are case-sensitive and carry no service prefix. A well-formed table lists each action under exactly
/// one level; see [AccessLevelList::validate].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AccessLevelList {
    levels: &'static [(AccessLevel, &'static [&'static str])],
}

impl AccessLevelList {
    pub const fn new(levels: &'static [(AccessLevel, &'static [&'static str])]) -> Self {
        Self {
            levels,
        }
    }

    /// The level `action` belongs to, or `None` if the table does not know it.
    pub fn access_level(&self, action: &str) -> Option<AccessLevel> {
        self.levels.iter().find(|(_, actions)| actions.contains(&action)).map(|(level, _)| *level)
    }

    /// All actions classified at `level`. Empty if the service has none.
    pub fn actions(&self, level: AccessLevel) -> Vec<&'static str> {
        self.levels.iter().filter(|(l, _)| *l == level).flat_map(|(_, actions)| actions.iter().copied()).collect()
    }

    /// Every action in the table, in table order.
    pub fn all_actions(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.levels.iter().flat_map(|(_, actions)| actions.iter().copied())
    }

    #[inline]
    pub fn iter(&self) -> Iter<'static, (AccessLevel, &'static [&'static str])> {
        self.levels.iter()
    }

    /// Check that no action is listed under more than one level.
    pub fn validate(&self, service: &str) -> Result<(), BuilderError> {
        let mut seen = HashSet::new();

        for action in self.all_actions() {
            if !seen.insert(action) {
                log::debug!("Action {}:{} appears under more than one access level", service, action);
                return Err(BuilderError::DuplicateAccessLevel {
                    service: service.to_string(),
                    action: action.to_string(),
                });
            }
        }

        Ok(())
    }
}
