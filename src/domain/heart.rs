//! Patient record for the heart-disease predictors.
//!
//! Every categorical field encodes to the integer code the models were
//! trained on. Each mapping is a bijection over its declared option list:
//! `code` and `from_code` round-trip, and every label resolves to exactly
//! one code.

use crate::HEART_FEATURE_COUNT;

/// Column names of the 11-feature schema, in model input order.
pub const HEART_FEATURE_COLUMNS: [&str; HEART_FEATURE_COUNT] = [
    "Age",
    "Sex",
    "ChestPainType",
    "RestingBP",
    "Cholesterol",
    "FastingBS",
    "RestingECG",
    "MaxHR",
    "ExerciseAngina",
    "Oldpeak",
    "ST_Slope",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub const OPTIONS: [Sex; 2] = [Sex::Male, Sex::Female];

    pub fn label(self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Sex::Male => 0,
            Sex::Female => 1,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::OPTIONS.into_iter().find(|option| option.code() == code)
    }

    /// Resolve a form label (case-insensitive) or a bare numeric code.
    pub fn parse(input: &str) -> Option<Self> {
        if let Ok(code) = input.trim().parse::<u8>() {
            return Self::from_code(code);
        }
        Self::OPTIONS
            .into_iter()
            .find(|option| option.label().eq_ignore_ascii_case(input.trim()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChestPainType {
    TypicalAngina,
    AtypicalAngina,
    NonAnginalPain,
    Asymptomatic,
}

impl ChestPainType {
    pub const OPTIONS: [ChestPainType; 4] = [
        ChestPainType::TypicalAngina,
        ChestPainType::AtypicalAngina,
        ChestPainType::NonAnginalPain,
        ChestPainType::Asymptomatic,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ChestPainType::TypicalAngina => "Typical Angina",
            ChestPainType::AtypicalAngina => "Atypical Angina",
            ChestPainType::NonAnginalPain => "Non-Anginal Pain",
            ChestPainType::Asymptomatic => "Asymptomatic",
        }
    }

    pub fn code(self) -> u8 {
        match self {
            ChestPainType::TypicalAngina => 0,
            ChestPainType::AtypicalAngina => 1,
            ChestPainType::NonAnginalPain => 2,
            ChestPainType::Asymptomatic => 3,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::OPTIONS.into_iter().find(|option| option.code() == code)
    }

    /// Resolve a form label (case-insensitive) or a bare numeric code.
    pub fn parse(input: &str) -> Option<Self> {
        if let Ok(code) = input.trim().parse::<u8>() {
            return Self::from_code(code);
        }
        Self::OPTIONS
            .into_iter()
            .find(|option| option.label().eq_ignore_ascii_case(input.trim()))
    }
}

/// Whether fasting blood sugar exceeds 120 mg/dl.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FastingBloodSugar {
    Over120,
    AtMost120,
}

impl FastingBloodSugar {
    pub const OPTIONS: [FastingBloodSugar; 2] =
        [FastingBloodSugar::Over120, FastingBloodSugar::AtMost120];

    pub fn label(self) -> &'static str {
        match self {
            FastingBloodSugar::Over120 => "> 120 mg/dl",
            FastingBloodSugar::AtMost120 => "<= 120 mg/dl",
        }
    }

    pub fn code(self) -> u8 {
        match self {
            FastingBloodSugar::Over120 => 1,
            FastingBloodSugar::AtMost120 => 0,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::OPTIONS.into_iter().find(|option| option.code() == code)
    }

    /// Resolve a form label (case-insensitive) or a bare numeric code.
    pub fn parse(input: &str) -> Option<Self> {
        if let Ok(code) = input.trim().parse::<u8>() {
            return Self::from_code(code);
        }
        Self::OPTIONS
            .into_iter()
            .find(|option| option.label().eq_ignore_ascii_case(input.trim()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestingEcg {
    Normal,
    SttAbnormality,
    LeftVentricularHypertrophy,
}

impl RestingEcg {
    pub const OPTIONS: [RestingEcg; 3] = [
        RestingEcg::Normal,
        RestingEcg::SttAbnormality,
        RestingEcg::LeftVentricularHypertrophy,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RestingEcg::Normal => "Normal",
            RestingEcg::SttAbnormality => "ST-T Wave Abnormality",
            RestingEcg::LeftVentricularHypertrophy => "Left Ventricular Hypertrophy",
        }
    }

    pub fn code(self) -> u8 {
        match self {
            RestingEcg::Normal => 0,
            RestingEcg::SttAbnormality => 1,
            RestingEcg::LeftVentricularHypertrophy => 2,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::OPTIONS.into_iter().find(|option| option.code() == code)
    }

    /// Resolve a form label (case-insensitive) or a bare numeric code.
    pub fn parse(input: &str) -> Option<Self> {
        if let Ok(code) = input.trim().parse::<u8>() {
            return Self::from_code(code);
        }
        Self::OPTIONS
            .into_iter()
            .find(|option| option.label().eq_ignore_ascii_case(input.trim()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExerciseAngina {
    Yes,
    No,
}

impl ExerciseAngina {
    pub const OPTIONS: [ExerciseAngina; 2] = [ExerciseAngina::Yes, ExerciseAngina::No];

    pub fn label(self) -> &'static str {
        match self {
            ExerciseAngina::Yes => "Yes",
            ExerciseAngina::No => "No",
        }
    }

    pub fn code(self) -> u8 {
        match self {
            ExerciseAngina::Yes => 1,
            ExerciseAngina::No => 0,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::OPTIONS.into_iter().find(|option| option.code() == code)
    }

    /// Resolve a form label (case-insensitive) or a bare numeric code.
    pub fn parse(input: &str) -> Option<Self> {
        if let Ok(code) = input.trim().parse::<u8>() {
            return Self::from_code(code);
        }
        Self::OPTIONS
            .into_iter()
            .find(|option| option.label().eq_ignore_ascii_case(input.trim()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StSlope {
    Upsloping,
    Flat,
    Downsloping,
}

impl StSlope {
    pub const OPTIONS: [StSlope; 3] = [StSlope::Upsloping, StSlope::Flat, StSlope::Downsloping];

    pub fn label(self) -> &'static str {
        match self {
            StSlope::Upsloping => "Upsloping",
            StSlope::Flat => "Flat",
            StSlope::Downsloping => "Downsloping",
        }
    }

    pub fn code(self) -> u8 {
        match self {
            StSlope::Upsloping => 0,
            StSlope::Flat => 1,
            StSlope::Downsloping => 2,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::OPTIONS.into_iter().find(|option| option.code() == code)
    }

    /// Resolve a form label (case-insensitive) or a bare numeric code.
    pub fn parse(input: &str) -> Option<Self> {
        if let Ok(code) = input.trim().parse::<u8>() {
            return Self::from_code(code);
        }
        Self::OPTIONS
            .into_iter()
            .find(|option| option.label().eq_ignore_ascii_case(input.trim()))
    }
}

/// One patient, as entered on the single-prediction form.
#[derive(Debug, Clone)]
pub struct HeartRecord {
    pub age: u32,
    pub sex: Sex,
    pub chest_pain: ChestPainType,
    pub resting_bp: u32,
    pub cholesterol: u32,
    pub fasting_bs: FastingBloodSugar,
    pub resting_ecg: RestingEcg,
    pub max_hr: u32,
    pub exercise_angina: ExerciseAngina,
    pub oldpeak: f32,
    pub st_slope: StSlope,
}

impl HeartRecord {
    /// Encode the record in the fixed column order the models expect.
    pub fn to_features(&self) -> [f32; HEART_FEATURE_COUNT] {
        [
            self.age as f32,
            f32::from(self.sex.code()),
            f32::from(self.chest_pain.code()),
            self.resting_bp as f32,
            self.cholesterol as f32,
            f32::from(self.fasting_bs.code()),
            f32::from(self.resting_ecg.code()),
            self.max_hr as f32,
            f32::from(self.exercise_angina.code()),
            self.oldpeak,
            f32::from(self.st_slope.code()),
        ]
    }
}
