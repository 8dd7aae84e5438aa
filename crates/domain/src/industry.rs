use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use wattgrant_core::{AppError, AppResult};

/// NAICS sectors eligible for program funding.
///
/// Manufacturing spans NAICS sectors 31, 32 and 33 and is tracked as the
/// consolidated `31-33` sector.
pub const ELIGIBLE_SECTORS: &[&str] = &["11", "21", "22", "23", "31-33", "48", "56"];

/// Hierarchy level of a NAICS code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndustryLevel {
    /// 2-digit sector (or the consolidated `31-33`).
    Sector,
    /// 3-digit subsector.
    Subsector,
    /// 6-digit national industry.
    NationalIndustry,
}

impl IndustryLevel {
    /// Returns a stable storage value for this level.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sector => "sector",
            Self::Subsector => "subsector",
            Self::NationalIndustry => "national_industry",
        }
    }
}

/// Normalizes a raw NAICS code cell value.
///
/// Strips the `.0` suffix spreadsheet exports add to numeric cells and
/// validates the shape: the consolidated `31-33` sector, or 2, 3 or 6
/// digits.
pub fn normalize_code(raw: &str) -> AppResult<String> {
    let trimmed = raw.trim();
    let stripped = trimmed.strip_suffix(".0").unwrap_or(trimmed);

    if stripped == "31-33" {
        return Ok(stripped.to_owned());
    }

    let is_digits = !stripped.is_empty() && stripped.bytes().all(|byte| byte.is_ascii_digit());
    if is_digits && matches!(stripped.len(), 2 | 3 | 6) {
        return Ok(stripped.to_owned());
    }

    Err(AppError::Validation(format!(
        "malformed NAICS code '{raw}'"
    )))
}

/// Normalizes a NAICS title cell value.
///
/// Official structure exports mark some titles with a trailing `T`
/// (trilateral-agreement marker); the marker is not part of the title.
#[must_use]
pub fn clean_title(raw: &str) -> String {
    let trimmed = raw.trim();
    let stripped = trimmed.strip_suffix('T').unwrap_or(trimmed);
    stripped.trim_end().to_owned()
}

/// Returns the (consolidated) sector a normalized NAICS code belongs to.
#[must_use]
pub fn sector_for(code: &str) -> Option<String> {
    if code == "31-33" {
        return Some(code.to_owned());
    }

    let prefix = code.get(..2)?;
    if !prefix.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }

    match prefix {
        "31" | "32" | "33" => Some("31-33".to_owned()),
        _ => Some(prefix.to_owned()),
    }
}

/// Returns whether a raw NAICS code falls in an eligible sector.
#[must_use]
pub fn is_eligible_code(raw: &str) -> bool {
    normalize_code(raw)
        .ok()
        .and_then(|code| sector_for(&code))
        .map(|sector| ELIGIBLE_SECTORS.contains(&sector.as_str()))
        .unwrap_or(false)
}

/// One code in the industry catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndustryEntry {
    /// Normalized NAICS code (`31-33` for the consolidated sector).
    pub code: String,
    /// Cleaned title.
    pub title: String,
    /// Hierarchy level.
    pub level: IndustryLevel,
    /// Parent code; absent for sectors.
    pub parent: Option<String>,
}

/// Immutable NAICS lookup restricted to program-eligible sectors.
///
/// Built once from the structure export and never mutated; company
/// onboarding uses it to offer only classifications the program accepts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndustryCatalog {
    entries: BTreeMap<String, IndustryEntry>,
}

impl IndustryCatalog {
    /// Builds a catalog from raw `(code, title)` rows.
    ///
    /// Rows outside the eligible sectors are skipped. Sector rows 31, 32
    /// and 33 collapse into the consolidated `31-33` Manufacturing sector.
    /// Malformed codes are a validation error; duplicate codes keep the
    /// first row seen.
    pub fn from_rows<I, C, T>(rows: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = (C, T)>,
        C: AsRef<str>,
        T: AsRef<str>,
    {
        let mut entries = BTreeMap::new();

        for (raw_code, raw_title) in rows {
            let code = normalize_code(raw_code.as_ref())?;
            let sector = match sector_for(&code) {
                Some(sector) => sector,
                None => continue,
            };
            if !ELIGIBLE_SECTORS.contains(&sector.as_str()) {
                continue;
            }

            let entry = match code.len() {
                2 if matches!(code.as_str(), "31" | "32" | "33") => IndustryEntry {
                    code: "31-33".to_owned(),
                    title: "Manufacturing".to_owned(),
                    level: IndustryLevel::Sector,
                    parent: None,
                },
                // Covers plain sectors and the consolidated "31-33" itself.
                2 | 5 => IndustryEntry {
                    code: code.clone(),
                    title: clean_title(raw_title.as_ref()),
                    level: IndustryLevel::Sector,
                    parent: None,
                },
                3 => IndustryEntry {
                    code: code.clone(),
                    title: clean_title(raw_title.as_ref()),
                    level: IndustryLevel::Subsector,
                    parent: Some(sector),
                },
                _ => IndustryEntry {
                    code: code.clone(),
                    title: clean_title(raw_title.as_ref()),
                    level: IndustryLevel::NationalIndustry,
                    parent: code.get(..3).map(str::to_owned),
                },
            };

            entries.entry(entry.code.clone()).or_insert(entry);
        }

        Ok(Self { entries })
    }

    /// Returns the entry for a normalized code, if present.
    #[must_use]
    pub fn find(&self, code: &str) -> Option<&IndustryEntry> {
        self.entries.get(code)
    }

    /// Returns the direct children of a code, in code order.
    #[must_use]
    pub fn children_of(&self, code: &str) -> Vec<&IndustryEntry> {
        self.entries
            .values()
            .filter(|entry| entry.parent.as_deref() == Some(code))
            .collect()
    }

    /// Returns the sector entries, in code order.
    pub fn sectors(&self) -> impl Iterator<Item = &IndustryEntry> {
        self.entries
            .values()
            .filter(|entry| entry.level == IndustryLevel::Sector)
    }

    /// Returns the number of catalog entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
