//! Bilingual (Hindi/English) UI strings.
//!
//! Every [`TextKey`] must be defined for both languages; the per-language
//! lookups are exhaustive matches, so a missing entry fails to compile.

use crate::models::error::AppError;
use serde::{Deserialize, Serialize};

/// Languages the dashboard can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "hi")]
    Hindi,
    #[serde(rename = "en")]
    English,
}

impl Language {
    /// Returns the two-letter code used in storage.
    pub fn code(self) -> &'static str {
        match self {
            Language::Hindi => "hi",
            Language::English => "en",
        }
    }

    /// Parses a language code. Only `hi` and `en` are supported.
    pub fn from_code(code: &str) -> Result<Self, AppError> {
        match code.trim().to_ascii_lowercase().as_str() {
            "hi" => Ok(Language::Hindi),
            "en" => Ok(Language::English),
            other => Err(AppError::ConfigError(format!(
                "Unsupported language code: {other}"
            ))),
        }
    }

    /// The language a toggle switches to.
    pub fn toggle(self) -> Self {
        match self {
            Language::Hindi => Language::English,
            Language::English => Language::Hindi,
        }
    }

    /// Looks up a UI string in this language.
    pub fn text(self, key: TextKey) -> &'static str {
        translate(self, key)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

/// Identifiers for every translatable UI string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKey {
    Title,
    Subtitle,
    SearchPlaceholder,
    SelectDistrict,
    Loading,
    Statistics,
    DistrictCount,
    /// Label of the toggle button, i.e. the name of the other language
    LanguageSwitch,
    About,
    AboutText,
    NoDistricts,
    Back,
    PerformanceDashboard,
    CurrentPerformance,
    TotalWorkers,
    WorkCompleted,
    WorkOngoing,
    AverageWage,
    BudgetAllocated,
    BudgetSpent,
    PersonDays,
    Comparison,
    HistoricalTrend,
    BudgetTrend,
    Month,
    Allocated,
    Spent,
    LoadDistrictsFailed,
    LoadDistrictFailed,
    Dismiss,
}

impl TextKey {
    pub const ALL: &'static [TextKey] = &[
        TextKey::Title,
        TextKey::Subtitle,
        TextKey::SearchPlaceholder,
        TextKey::SelectDistrict,
        TextKey::Loading,
        TextKey::Statistics,
        TextKey::DistrictCount,
        TextKey::LanguageSwitch,
        TextKey::About,
        TextKey::AboutText,
        TextKey::NoDistricts,
        TextKey::Back,
        TextKey::PerformanceDashboard,
        TextKey::CurrentPerformance,
        TextKey::TotalWorkers,
        TextKey::WorkCompleted,
        TextKey::WorkOngoing,
        TextKey::AverageWage,
        TextKey::BudgetAllocated,
        TextKey::BudgetSpent,
        TextKey::PersonDays,
        TextKey::Comparison,
        TextKey::HistoricalTrend,
        TextKey::BudgetTrend,
        TextKey::Month,
        TextKey::Allocated,
        TextKey::Spent,
        TextKey::LoadDistrictsFailed,
        TextKey::LoadDistrictFailed,
        TextKey::Dismiss,
    ];
}

/// Resolves `key` in `language`.
pub fn translate(language: Language, key: TextKey) -> &'static str {
    match language {
        Language::Hindi => hindi(key),
        Language::English => english(key),
    }
}

fn hindi(key: TextKey) -> &'static str {
    match key {
        TextKey::Title => "मनरेगा डैशबोर्ड",
        TextKey::Subtitle => "उत्तर प्रदेश जिला प्रदर्शन ट्रैकर",
        TextKey::SearchPlaceholder => "खोजें... (जिला का नाम)",
        TextKey::SelectDistrict => "जिला चुनें",
        TextKey::Loading => "लोड हो रहा है...",
        TextKey::Statistics => "आंकड़े",
        TextKey::DistrictCount => "कुल जिले",
        TextKey::LanguageSwitch => "English",
        TextKey::About => "मनरेगा के बारे में",
        TextKey::AboutText => {
            "महात्मा गांधी राष्ट्रीय ग्रामीण रोजगार गारंटी अधिनियम (मनरेगा) भारत में ग्रामीण परिवारों को एक वित्तीय वर्ष में कम से कम 100 दिनों की मजदूरी रोजगार की कानूनी गारंटी प्रदान करता है।"
        }
        TextKey::NoDistricts => "कोई जिला नहीं मिला",
        TextKey::Back => "वापस जाएं",
        TextKey::PerformanceDashboard => "प्रदर्शन डैशबोर्ड",
        TextKey::CurrentPerformance => "वर्तमान प्रदर्शन",
        TextKey::TotalWorkers => "कुल कर्मचारी",
        TextKey::WorkCompleted => "कार्य पूर्ण",
        TextKey::WorkOngoing => "चल रहे कार्य",
        TextKey::AverageWage => "औसत मजदूरी",
        TextKey::BudgetAllocated => "आवंटित बजट",
        TextKey::BudgetSpent => "खर्च किया गया बजट",
        TextKey::PersonDays => "व्यक्ति दिवस",
        TextKey::Comparison => "पिछले महीने की तुलना",
        TextKey::HistoricalTrend => "ऐतिहासिक प्रवृत्ति (6 महीने)",
        TextKey::BudgetTrend => "बजट प्रवृत्ति",
        TextKey::Month => "महीना",
        TextKey::Allocated => "आवंटित",
        TextKey::Spent => "खर्च",
        TextKey::LoadDistrictsFailed => "जिले लोड करने में विफल",
        TextKey::LoadDistrictFailed => "जिला डेटा लोड करने में विफल",
        TextKey::Dismiss => "बंद करें",
    }
}

fn english(key: TextKey) -> &'static str {
    match key {
        TextKey::Title => "MGNREGA Dashboard",
        TextKey::Subtitle => "Uttar Pradesh District Performance Tracker",
        TextKey::SearchPlaceholder => "Search... (District Name)",
        TextKey::SelectDistrict => "Select a District",
        TextKey::Loading => "Loading...",
        TextKey::Statistics => "Statistics",
        TextKey::DistrictCount => "Total Districts",
        TextKey::LanguageSwitch => "हिंदी",
        TextKey::About => "About MGNREGA",
        TextKey::AboutText => {
            "Mahatma Gandhi National Rural Employment Guarantee Act (MGNREGA) provides a legal guarantee of 100 days of wage employment in a financial year to rural households in India."
        }
        TextKey::NoDistricts => "No districts found",
        TextKey::Back => "Back to Districts",
        TextKey::PerformanceDashboard => "Performance Dashboard",
        TextKey::CurrentPerformance => "Current Performance",
        TextKey::TotalWorkers => "Total Workers",
        TextKey::WorkCompleted => "Work Completed",
        TextKey::WorkOngoing => "Ongoing Works",
        TextKey::AverageWage => "Average Wage",
        TextKey::BudgetAllocated => "Budget Allocated",
        TextKey::BudgetSpent => "Budget Spent",
        TextKey::PersonDays => "Person Days",
        TextKey::Comparison => "Comparison with Last Month",
        TextKey::HistoricalTrend => "Historical Trend (6 Months)",
        TextKey::BudgetTrend => "Budget Trend",
        TextKey::Month => "Month",
        TextKey::Allocated => "Allocated",
        TextKey::Spent => "Spent",
        TextKey::LoadDistrictsFailed => "Failed to load districts",
        TextKey::LoadDistrictFailed => "Failed to load district data",
        TextKey::Dismiss => "Dismiss",
    }
}
