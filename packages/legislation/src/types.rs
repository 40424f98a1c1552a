//! Legislation type codes and geographical extents.
//!
//! Both are fixed lookup tables: each variant maps to the short code
//! legislation.gov.uk uses in URIs and CLML attributes, and the inverse
//! maps are built once per process.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::{LegislationError, Result};

/// Types of UK legislation available through the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LegislationType {
    /// UK Public General Acts.
    UkPublicGeneralAct,
    /// UK Local Acts.
    UkLocalAct,
    /// UK Private and Personal Acts.
    UkPrivateAct,
    /// Acts of the Scottish Parliament.
    ScottishAct,
    /// Acts of Senedd Cymru.
    SeneddAct,
    /// Acts of the National Assembly for Wales.
    WelshAssemblyAct,
    /// Measures of the National Assembly for Wales.
    WelshAssemblyMeasure,
    /// Church Measures.
    ChurchMeasure,
    /// Acts of the Northern Ireland Assembly.
    NorthernIrelandAct,
    /// Acts of the Old Scottish Parliament (pre-1707).
    OldScottishParliamentAct,
    /// Acts of the English Parliament (pre-1707).
    EnglishParliamentAct,
    /// Acts of the Old Irish Parliament (pre-1800).
    IrishParliamentAct,
    /// Acts of the Parliament of Great Britain (1707-1800).
    GreatBritainAct,
    /// Local Acts of the Parliament of Great Britain.
    GreatBritainLocalAct,
    /// Private and Personal Acts of the Parliament of Great Britain.
    GreatBritainPrivateAct,
    /// Northern Ireland Orders in Council.
    NorthernIrelandOrderInCouncil,
    /// Measures of the Northern Ireland Assembly.
    NorthernIrelandMeasure,
    /// Acts of the Northern Ireland Parliament.
    NorthernIrelandParliamentAct,
    /// UK Statutory Instruments.
    UkStatutoryInstrument,
    /// Wales Statutory Instruments.
    WalesStatutoryInstrument,
    /// Scottish Statutory Instruments.
    ScottishStatutoryInstrument,
    /// Northern Ireland Statutory Rules.
    NorthernIrelandStatutoryRule,
    /// Church Instruments.
    ChurchInstrument,
    /// UK Ministerial Directions.
    UkMinisterialDirection,
    /// UK Ministerial Orders.
    UkMinisterialOrder,
    /// UK Statutory Rules and Orders.
    UkStatutoryRulesAndOrders,
    /// Northern Ireland Statutory Rules and Orders.
    NorthernIrelandStatutoryRulesAndOrders,
    /// European Union Regulations.
    EuRegulation,
    /// European Union Decisions.
    EuDecision,
    /// European Union Directives.
    EuDirective,
    /// UK Draft Statutory Instruments.
    UkDraftStatutoryInstrument,
    /// Scottish Draft Statutory Instruments.
    ScottishDraftStatutoryInstrument,
    /// Northern Ireland Draft Statutory Rules.
    NorthernIrelandDraftStatutoryRule,
    /// UK Impact Assessments.
    UkImpactAssessment,
}

/// Variant to URI code table. Codes are lowercase and unique.
const TYPE_CODES: &[(LegislationType, &str)] = &[
    (LegislationType::UkPublicGeneralAct, "ukpga"),
    (LegislationType::UkLocalAct, "ukla"),
    (LegislationType::UkPrivateAct, "ukppa"),
    (LegislationType::ScottishAct, "asp"),
    (LegislationType::SeneddAct, "asc"),
    (LegislationType::WelshAssemblyAct, "anaw"),
    (LegislationType::WelshAssemblyMeasure, "mwa"),
    (LegislationType::ChurchMeasure, "ukcm"),
    (LegislationType::NorthernIrelandAct, "nia"),
    (LegislationType::OldScottishParliamentAct, "aosp"),
    (LegislationType::EnglishParliamentAct, "aep"),
    (LegislationType::IrishParliamentAct, "aip"),
    (LegislationType::GreatBritainAct, "apgb"),
    (LegislationType::GreatBritainLocalAct, "gbla"),
    (LegislationType::GreatBritainPrivateAct, "gbppa"),
    (LegislationType::NorthernIrelandOrderInCouncil, "nisi"),
    (LegislationType::NorthernIrelandMeasure, "mnia"),
    (LegislationType::NorthernIrelandParliamentAct, "apni"),
    (LegislationType::UkStatutoryInstrument, "uksi"),
    (LegislationType::WalesStatutoryInstrument, "wsi"),
    (LegislationType::ScottishStatutoryInstrument, "ssi"),
    (LegislationType::NorthernIrelandStatutoryRule, "nisr"),
    (LegislationType::ChurchInstrument, "ukci"),
    (LegislationType::UkMinisterialDirection, "ukmd"),
    (LegislationType::UkMinisterialOrder, "ukmo"),
    (LegislationType::UkStatutoryRulesAndOrders, "uksro"),
    (LegislationType::NorthernIrelandStatutoryRulesAndOrders, "nisro"),
    (LegislationType::EuRegulation, "eur"),
    (LegislationType::EuDecision, "eudn"),
    (LegislationType::EuDirective, "eudr"),
    (LegislationType::UkDraftStatutoryInstrument, "ukdsi"),
    (LegislationType::ScottishDraftStatutoryInstrument, "sdsi"),
    (LegislationType::NorthernIrelandDraftStatutoryRule, "nidsr"),
    (LegislationType::UkImpactAssessment, "ukia"),
];

static TYPES_BY_CODE: LazyLock<HashMap<&'static str, LegislationType>> =
    LazyLock::new(|| TYPE_CODES.iter().map(|&(ty, code)| (code, ty)).collect());

impl LegislationType {
    /// All known legislation types, in table order.
    pub fn all() -> impl Iterator<Item = Self> {
        TYPE_CODES.iter().map(|&(ty, _)| ty)
    }

    /// URI code for this type (e.g. `UkPublicGeneralAct` -> `"ukpga"`).
    #[must_use]
    pub fn uri_code(self) -> &'static str {
        TYPE_CODES
            .iter()
            .find(|&&(ty, _)| ty == self)
            .map(|&(_, code)| code)
            .unwrap_or_default()
    }

    /// Look up a type by URI code, ignoring ASCII case.
    ///
    /// # Examples
    /// ```
    /// use uk_legislation::types::LegislationType;
    ///
    /// assert_eq!(
    ///     LegislationType::from_uri_code("UKSI").unwrap(),
    ///     LegislationType::UkStatutoryInstrument
    /// );
    /// assert!(LegislationType::from_uri_code("nope").is_err());
    /// ```
    pub fn from_uri_code(code: &str) -> Result<Self> {
        let trimmed = code.trim();
        if trimmed.is_empty() {
            return Err(LegislationError::UnknownTypeCode(code.to_string()));
        }
        TYPES_BY_CODE
            .get(trimmed.to_ascii_lowercase().as_str())
            .copied()
            .ok_or_else(|| LegislationError::UnknownTypeCode(code.to_string()))
    }

    /// Like [`Self::from_uri_code`], but `None` for blank or unknown codes.
    #[must_use]
    pub fn try_from_uri_code(code: Option<&str>) -> Option<Self> {
        code.and_then(|c| Self::from_uri_code(c).ok())
    }
}

impl fmt::Display for LegislationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.uri_code())
    }
}

impl FromStr for LegislationType {
    type Err = LegislationError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_uri_code(s)
    }
}

/// Territorial application of a piece of legislation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeographicalExtent {
    England,
    Wales,
    Scotland,
    NorthernIreland,
    EnglandWales,
    GreatBritain,
    UnitedKingdom,
}

impl GeographicalExtent {
    /// Extent code as used in listings (`E+W+S+NI`).
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::England => "E",
            Self::Wales => "W",
            Self::Scotland => "S",
            Self::NorthernIreland => "NI",
            Self::EnglandWales => "E+W",
            Self::GreatBritain => "E+W+S",
            Self::UnitedKingdom => "E+W+S+NI",
        }
    }

    /// Parse an extent code.
    ///
    /// Accepts the CLML spelling `N.I.` and any case. Unrecognised
    /// combinations (e.g. `S+NI`) return `None`.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let normalized: String = code
            .chars()
            .filter(|c| *c != '.' && !c.is_whitespace())
            .collect::<String>()
            .to_ascii_uppercase();

        match normalized.as_str() {
            "E" => Some(Self::England),
            "W" => Some(Self::Wales),
            "S" => Some(Self::Scotland),
            "NI" => Some(Self::NorthernIreland),
            "E+W" => Some(Self::EnglandWales),
            "E+W+S" => Some(Self::GreatBritain),
            "E+W+S+NI" => Some(Self::UnitedKingdom),
            _ => None,
        }
    }

    /// Whether this extent covers `other` (e.g. `GreatBritain` covers `Wales`).
    #[must_use]
    pub fn covers(self, other: Self) -> bool {
        other.bits() & !self.bits() == 0
    }

    fn bits(self) -> u8 {
        match self {
            Self::England => 0b0001,
            Self::Wales => 0b0010,
            Self::Scotland => 0b0100,
            Self::NorthernIreland => 0b1000,
            Self::EnglandWales => 0b0011,
            Self::GreatBritain => 0b0111,
            Self::UnitedKingdom => 0b1111,
        }
    }
}

impl fmt::Display for GeographicalExtent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
