use std::fmt;

use serde::{Deserialize, Serialize};

use super::validation::{BlankTypeCode, InvalidProfileError};

pub const DIMENSION_MIN: f64 = 0.0;
pub const DIMENSION_MAX: f64 = 100.0;

/// Value substituted for MBTI axes an assessment did not report.
pub const NEUTRAL_MBTI_VALUE: f64 = 50.0;

/// The sixteen type codes produced by the MBTI classifier.
pub const RECOGNIZED_TYPE_CODES: [&str; 16] = [
    "ISTJ", "ISFJ", "INFJ", "INTJ", "ISTP", "ISFP", "INFP", "INTP", "ESTP", "ESFP", "ENFP", "ENTP",
    "ESTJ", "ESFJ", "ENFJ", "ENTJ",
];

/// Behavioral model a dimension belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DimensionGroup {
    Disc,
    Mbti,
}

impl DimensionGroup {
    pub fn dimensions(self) -> [Dimension; 4] {
        match self {
            DimensionGroup::Disc => Dimension::DISC,
            DimensionGroup::Mbti => Dimension::MBTI,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DimensionGroup::Disc => "DISC",
            DimensionGroup::Mbti => "MBTI",
        }
    }
}

impl fmt::Display for DimensionGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One of the eight measured behavioral dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dimension {
    #[serde(rename = "disc_d")]
    Dominance,
    #[serde(rename = "disc_i")]
    Influence,
    #[serde(rename = "disc_s")]
    Steadiness,
    #[serde(rename = "disc_c")]
    Conformity,
    #[serde(rename = "mbti_e_i")]
    ExtraversionIntroversion,
    #[serde(rename = "mbti_s_n")]
    SensingIntuition,
    #[serde(rename = "mbti_t_f")]
    ThinkingFeeling,
    #[serde(rename = "mbti_j_p")]
    JudgingPerceiving,
}

impl Dimension {
    pub const DISC: [Dimension; 4] = [
        Dimension::Dominance,
        Dimension::Influence,
        Dimension::Steadiness,
        Dimension::Conformity,
    ];

    pub const MBTI: [Dimension; 4] = [
        Dimension::ExtraversionIntroversion,
        Dimension::SensingIntuition,
        Dimension::ThinkingFeeling,
        Dimension::JudgingPerceiving,
    ];

    pub const ALL: [Dimension; 8] = [
        Dimension::Dominance,
        Dimension::Influence,
        Dimension::Steadiness,
        Dimension::Conformity,
        Dimension::ExtraversionIntroversion,
        Dimension::SensingIntuition,
        Dimension::ThinkingFeeling,
        Dimension::JudgingPerceiving,
    ];

    pub fn group(self) -> DimensionGroup {
        match self {
            Dimension::Dominance
            | Dimension::Influence
            | Dimension::Steadiness
            | Dimension::Conformity => DimensionGroup::Disc,
            _ => DimensionGroup::Mbti,
        }
    }

    /// Stable field key shared by profile records and CSV exports.
    pub fn key(self) -> &'static str {
        match self {
            Dimension::Dominance => "disc_d",
            Dimension::Influence => "disc_i",
            Dimension::Steadiness => "disc_s",
            Dimension::Conformity => "disc_c",
            Dimension::ExtraversionIntroversion => "mbti_e_i",
            Dimension::SensingIntuition => "mbti_s_n",
            Dimension::ThinkingFeeling => "mbti_t_f",
            Dimension::JudgingPerceiving => "mbti_j_p",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Dimension::Dominance => "Dominância (D)",
            Dimension::Influence => "Influência (I)",
            Dimension::Steadiness => "Estabilidade (S)",
            Dimension::Conformity => "Conformidade (C)",
            Dimension::ExtraversionIntroversion => "E-I",
            Dimension::SensingIntuition => "S-N",
            Dimension::ThinkingFeeling => "T-F",
            Dimension::JudgingPerceiving => "J-P",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// DISC factor intensities, each on a 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscScores {
    pub dominance: f64,
    pub influence: f64,
    pub steadiness: f64,
    pub conformity: f64,
}

impl DiscScores {
    /// Strongest DISC factor; ties resolve in D, I, S, C order.
    pub fn primary_factor(&self) -> Dimension {
        let mut primary = Dimension::Dominance;
        let mut highest = self.dominance;
        for (dimension, value) in [
            (Dimension::Influence, self.influence),
            (Dimension::Steadiness, self.steadiness),
            (Dimension::Conformity, self.conformity),
        ] {
            if value > highest {
                primary = dimension;
                highest = value;
            }
        }
        primary
    }
}

/// MBTI axis positions. 100 leans fully toward E, S, T and J; 0 toward I, N, F and P.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MbtiScores {
    pub extraversion_introversion: f64,
    pub sensing_intuition: f64,
    pub thinking_feeling: f64,
    pub judging_perceiving: f64,
}

/// Four-letter MBTI type code, normalized to upper case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TypeCode(String);

impl TypeCode {
    /// Returns `None` for blank input.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_uppercase();
        if normalized.is_empty() {
            None
        } else {
            Some(Self(normalized))
        }
    }

    /// Classifies axis positions, using 50 as the pole threshold.
    pub fn from_scores(scores: &MbtiScores) -> Self {
        let pole = |value: f64, high: char, low: char| if value >= 50.0 { high } else { low };
        let code: String = [
            pole(scores.extraversion_introversion, 'E', 'I'),
            pole(scores.sensing_intuition, 'S', 'N'),
            pole(scores.thinking_feeling, 'T', 'F'),
            pole(scores.judging_perceiving, 'J', 'P'),
        ]
        .iter()
        .collect();
        Self(code)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_recognized(&self) -> bool {
        RECOGNIZED_TYPE_CODES.contains(&self.0.as_str())
    }
}

impl TryFrom<String> for TypeCode {
    type Error = BlankTypeCode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or(BlankTypeCode)
    }
}

impl From<TypeCode> for String {
    fn from(value: TypeCode) -> Self {
        value.0
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Behavioral profile measured by the DISC and MBTI assessments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasuredProfile {
    pub disc: DiscScores,
    pub mbti: MbtiScores,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_code: Option<TypeCode>,
}

impl MeasuredProfile {
    pub fn value(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Dominance => self.disc.dominance,
            Dimension::Influence => self.disc.influence,
            Dimension::Steadiness => self.disc.steadiness,
            Dimension::Conformity => self.disc.conformity,
            Dimension::ExtraversionIntroversion => self.mbti.extraversion_introversion,
            Dimension::SensingIntuition => self.mbti.sensing_intuition,
            Dimension::ThinkingFeeling => self.mbti.thinking_feeling,
            Dimension::JudgingPerceiving => self.mbti.judging_perceiving,
        }
    }
}

/// Flat profile record as stored by the assessment collaborators.
///
/// DISC factors are mandatory. Missing MBTI axes are normalized to
/// [`NEUTRAL_MBTI_VALUE`] so scorers never see absent values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileDraft {
    #[serde(default)]
    pub disc_d: Option<f64>,
    #[serde(default)]
    pub disc_i: Option<f64>,
    #[serde(default)]
    pub disc_s: Option<f64>,
    #[serde(default)]
    pub disc_c: Option<f64>,
    #[serde(default)]
    pub mbti_e_i: Option<f64>,
    #[serde(default)]
    pub mbti_s_n: Option<f64>,
    #[serde(default)]
    pub mbti_t_f: Option<f64>,
    #[serde(default)]
    pub mbti_j_p: Option<f64>,
    #[serde(default)]
    pub mbti_type: Option<String>,
}

impl ProfileDraft {
    pub fn normalize(&self) -> Result<MeasuredProfile, InvalidProfileError> {
        let required = |value: Option<f64>, dimension: Dimension| {
            value.ok_or(InvalidProfileError::Missing { dimension })
        };
        let neutral = |value: Option<f64>| value.unwrap_or(NEUTRAL_MBTI_VALUE);

        let profile = MeasuredProfile {
            disc: DiscScores {
                dominance: required(self.disc_d, Dimension::Dominance)?,
                influence: required(self.disc_i, Dimension::Influence)?,
                steadiness: required(self.disc_s, Dimension::Steadiness)?,
                conformity: required(self.disc_c, Dimension::Conformity)?,
            },
            mbti: MbtiScores {
                extraversion_introversion: neutral(self.mbti_e_i),
                sensing_intuition: neutral(self.mbti_s_n),
                thinking_feeling: neutral(self.mbti_t_f),
                judging_perceiving: neutral(self.mbti_j_p),
            },
            type_code: self.mbti_type.as_deref().and_then(TypeCode::parse),
        };

        profile.validate()?;
        Ok(profile)
    }
}

/// Expected band and relative importance of one dimension for a role.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionRange {
    pub min: f64,
    pub max: f64,
    pub weight: f64,
}

impl DimensionRange {
    pub const fn new(min: f64, max: f64, weight: f64) -> Self {
        Self { min, max, weight }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Human readable band, e.g. `60-90`.
    pub fn describe(&self) -> String {
        format!("{}-{}", self.min, self.max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscRanges {
    pub dominance: DimensionRange,
    pub influence: DimensionRange,
    pub steadiness: DimensionRange,
    pub conformity: DimensionRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MbtiRanges {
    pub extraversion_introversion: DimensionRange,
    pub sensing_intuition: DimensionRange,
    pub thinking_feeling: DimensionRange,
    pub judging_perceiving: DimensionRange,
}

/// Weighted expectations a role places on every behavioral dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdealProfile {
    pub role_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub disc: DiscRanges,
    pub mbti: MbtiRanges,
    /// Preferred type codes, highest priority first. `None` skips the type step;
    /// an empty list means no type is preferred.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_types: Option<Vec<TypeCode>>,
}

impl IdealProfile {
    /// Role with every band fully open and uniform weights.
    pub fn open_ranges(role_name: impl Into<String>) -> Self {
        let open = DimensionRange::new(0.0, 100.0, 0.5);
        Self {
            role_name: role_name.into(),
            description: None,
            disc: DiscRanges {
                dominance: open,
                influence: open,
                steadiness: open,
                conformity: open,
            },
            mbti: MbtiRanges {
                extraversion_introversion: open,
                sensing_intuition: open,
                thinking_feeling: open,
                judging_perceiving: open,
            },
            preferred_types: None,
        }
    }

    pub fn range(&self, dimension: Dimension) -> &DimensionRange {
        match dimension {
            Dimension::Dominance => &self.disc.dominance,
            Dimension::Influence => &self.disc.influence,
            Dimension::Steadiness => &self.disc.steadiness,
            Dimension::Conformity => &self.disc.conformity,
            Dimension::ExtraversionIntroversion => &self.mbti.extraversion_introversion,
            Dimension::SensingIntuition => &self.mbti.sensing_intuition,
            Dimension::ThinkingFeeling => &self.mbti.thinking_feeling,
            Dimension::JudgingPerceiving => &self.mbti.judging_perceiving,
        }
    }

    pub fn group_weight(&self, group: DimensionGroup) -> f64 {
        group
            .dimensions()
            .iter()
            .map(|dimension| self.range(*dimension).weight)
            .sum()
    }

    /// Unrecognized codes never count as a preferred match.
    pub fn prefers(&self, code: &TypeCode) -> bool {
        code.is_recognized()
            && self
                .preferred_types
                .as_ref()
                .is_some_and(|types| types.contains(code))
    }
}
