use serde::{Deserialize, Serialize};

/// Returned when a string does not name any variant of a `str_enum!` type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid {field} value: {value}")]
pub struct InvalidEnum {
    pub field: String,
    pub value: String,
}

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }

            pub fn all() -> &'static [$name] {
                &[$(Self::$variant),+]
            }
        }

        impl std::str::FromStr for $name {
            type Err = InvalidEnum;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(ExperienceTier {
    Junior => "junior",
    Mid => "mid",
    Senior => "senior",
});

str_enum!(SocialPlatform {
    Linkedin => "linkedin",
    Github => "github",
    Twitter => "twitter",
});

impl ExperienceTier {
    /// Label shown in the filter form. The year ranges are display text only.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Junior => "Junior (1-3 years)",
            Self::Mid => "Mid-Level (3-5 years)",
            Self::Senior => "Senior (5+ years)",
        }
    }
}
