//! Static survey catalog: module definitions and YÖKAK criteria labels.
//!
//! Built once on first access and never mutated afterwards.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::domain::foundation::ModuleCode;

/// Answer format of a module's questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionFormat {
    /// 100 points split across four alternatives.
    Ipsative,
    #[serde(rename = "likert_5")]
    Likert5,
    #[serde(rename = "likert_7")]
    Likert7,
    /// Five-point scale answered from several rater perspectives.
    #[serde(rename = "likert_360")]
    Likert360,
}

impl QuestionFormat {
    /// Inclusive Likert scale bounds, `None` for ipsative modules.
    pub fn scale_bounds(&self) -> Option<(u8, u8)> {
        match self {
            QuestionFormat::Ipsative => None,
            QuestionFormat::Likert5 | QuestionFormat::Likert360 => Some((1, 5)),
            QuestionFormat::Likert7 => Some((1, 7)),
        }
    }

    pub fn is_ipsative(&self) -> bool {
        matches!(self, QuestionFormat::Ipsative)
    }
}

/// Description of one survey instrument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleDefinition {
    pub code: ModuleCode,
    pub name: &'static str,
    pub full_name: &'static str,
    pub item_count: u16,
    pub format: QuestionFormat,
    pub dimensions: &'static [&'static str],
    pub yokak_mapping: &'static [&'static str],
    /// True for instruments developed in-house rather than adapted.
    pub is_original: bool,
}

static MODULE_DEFINITIONS: Lazy<HashMap<ModuleCode, ModuleDefinition>> = Lazy::new(|| {
    let definitions = [
        ModuleDefinition {
            code: ModuleCode::M1Ocai,
            name: "OCAI+",
            full_name: "Örgüt Kültürü Değerlendirme Aracı",
            item_count: 24,
            format: QuestionFormat::Ipsative,
            dimensions: &["Klan", "Adhokrasi", "Pazar", "Hiyerarşi"],
            yokak_mapping: &["A.1", "A.3"],
            is_original: false,
        },
        ModuleDefinition {
            code: ModuleCode::M2Qci,
            name: "QCI-TR",
            full_name: "Kalite Kültürü Envanteri",
            item_count: 30,
            format: QuestionFormat::Likert5,
            dimensions: &["Bağlılık", "Liderlik", "İletişim", "Yetkilendirme", "Güven", "Kaynaklar"],
            yokak_mapping: &["A.3"],
            is_original: false,
        },
        ModuleDefinition {
            code: ModuleCode::M3Msai,
            name: "MSAI-YÖ",
            full_name: "360° Yönetim Becerileri Değerlendirme",
            item_count: 48,
            format: QuestionFormat::Likert360,
            dimensions: &["Takım Yönetimi", "İnovasyon", "Rekabetçilik", "Kontrol"],
            yokak_mapping: &["A.2.3"],
            is_original: false,
        },
        ModuleDefinition {
            code: ModuleCode::M4Uwes,
            name: "UWES-TR",
            full_name: "Utrecht İş Bağlılığı Ölçeği",
            item_count: 9,
            format: QuestionFormat::Likert7,
            dimensions: &["Dinçlik", "Adanmışlık", "Yoğunlaşma"],
            yokak_mapping: &["A.5"],
            is_original: false,
        },
        ModuleDefinition {
            code: ModuleCode::M5Pke,
            name: "PKE",
            full_name: "Paydaş Katılım Endeksi",
            item_count: 20,
            format: QuestionFormat::Likert5,
            dimensions: &["Bilgilenme", "Danışılma", "Dahil Olma", "İşbirliği", "Yetkilendirme"],
            yokak_mapping: &["A.4"],
            is_original: true,
        },
        ModuleDefinition {
            code: ModuleCode::M6Spu,
            name: "SPU",
            full_name: "Stratejik Plan Uyum Analizi",
            item_count: 15,
            format: QuestionFormat::Likert5,
            dimensions: &["Farkındalık", "Benimseme", "Uygulama", "İzleme", "Uyum"],
            yokak_mapping: &["A.1", "A.6"],
            is_original: true,
        },
    ];
    definitions.into_iter().map(|d| (d.code, d)).collect()
});

static YOKAK_CRITERIA: Lazy<BTreeMap<&'static str, &'static str>> = Lazy::new(|| {
    BTreeMap::from([
        ("A.1", "Yönetim ve Kalite"),
        ("A.1.4", "İç Kalite Güvencesi Mekanizmaları"),
        ("A.2.1", "Misyon, Vizyon ve Politikalar"),
        ("A.2.3", "Performans Yönetimi"),
        ("A.3", "Kalite Güvencesi"),
        ("A.3.1", "Bilgi Yönetim Sistemi"),
        ("A.3.4", "Süreç Yönetimi"),
        ("A.4", "Paydaş Katılımı"),
        ("A.4.1", "İç ve Dış Paydaş Katılımı"),
        ("A.5", "İnsan Kaynakları Yönetimi"),
        ("A.6", "Stratejik Planlama"),
    ])
});

impl ModuleCode {
    /// Returns the catalog entry for this module.
    pub fn definition(&self) -> &'static ModuleDefinition {
        // Every variant is inserted above.
        &(*MODULE_DEFINITIONS)[self]
    }

    /// Shorthand for the module's answer format.
    pub fn format(&self) -> QuestionFormat {
        self.definition().format
    }
}

/// Looks up the label of a YÖKAK accreditation criterion, e.g. `A.4`.
pub fn yokak_criterion_label(code: &str) -> Option<&'static str> {
    YOKAK_CRITERIA.get(code).copied()
}

/// YÖKAK criteria covered by the given modules, deduplicated and sorted.
pub fn yokak_coverage(modules: &[ModuleCode]) -> Vec<&'static str> {
    let mut codes: Vec<&'static str> = modules
        .iter()
        .flat_map(|m| m.definition().yokak_mapping.iter().copied())
        .collect();
    codes.sort_unstable();
    codes.dedup();
    codes
}
