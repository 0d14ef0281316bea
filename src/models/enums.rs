use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Parse failure for the closed test/symptom vocabularies.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind} identifier: {value}")]
pub struct VocabularyError {
    pub kind: &'static str,
    pub value: String,
}

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$(Self::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = VocabularyError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(VocabularyError {
                        kind: stringify!($name),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(TestId {
    Hemoglobin => "hemoglobin",
    Glucose => "glucose",
    Leukocytes => "leukocytes",
});

str_enum!(Verdict {
    Low => "low",
    Normal => "normal",
    High => "high",
    Unknown => "unknown",
});

str_enum!(Symptom {
    Fever => "fever",
    Weakness => "weakness",
});

str_enum!(Finding {
    BacterialInfection => "bacterial_infection",
    IronDeficiencyAnemia => "iron_deficiency_anemia",
    NoCorrelation => "no_correlation",
});
