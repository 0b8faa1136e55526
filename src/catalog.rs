use crate::error::{EchoGradeError, EgResult};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::{debug, warn};

/// Classification of a substat roll space.
///
/// Flat stats roll in whole-number increments; Percent stats carry one
/// decimal digit. The tag is stored on each catalog entry so that scoring
/// never has to re-derive it from the identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StatKind {
    Flat,
    Percent,
}

/// Known min/max bounds of a single substat roll. Invariant: `max >= min`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatRange {
    pub min: f64,
    pub max: f64,
}

impl StatRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogEntry {
    pub kind: StatKind,
    pub range: StatRange,
}

impl CatalogEntry {
    pub const fn new(kind: StatKind, min: f64, max: f64) -> Self {
        Self {
            kind,
            range: StatRange::new(min, max),
        }
    }
}

/// The 13 echo substats with their live roll bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display)]
#[strum(serialize_all = "snake_case")]
pub enum KnownStat {
    Atk,
    Hp,
    Def,
    #[strum(serialize = "atk%")]
    AtkPercent,
    #[strum(serialize = "hp%")]
    HpPercent,
    #[strum(serialize = "def%")]
    DefPercent,
    EnergyRegen,
    CritRate,
    CritDmg,
    BasicAtkDmgBonus,
    HeavyAtkDmgBonus,
    ResonanceSkillDmgBonus,
    ResonanceLiberationDmgBonus,
}

impl KnownStat {
    pub fn entry(self) -> CatalogEntry {
        use StatKind::{Flat, Percent};
        match self {
            Self::Atk => CatalogEntry::new(Flat, 30.0, 70.0),
            Self::Hp => CatalogEntry::new(Flat, 320.0, 580.0),
            Self::Def => CatalogEntry::new(Flat, 30.0, 70.0),
            Self::AtkPercent => CatalogEntry::new(Percent, 6.4, 11.6),
            Self::HpPercent => CatalogEntry::new(Percent, 6.4, 11.6),
            Self::DefPercent => CatalogEntry::new(Percent, 8.1, 14.7),
            Self::EnergyRegen => CatalogEntry::new(Percent, 5.6, 14.9),
            Self::CritRate => CatalogEntry::new(Percent, 6.3, 10.5),
            Self::CritDmg => CatalogEntry::new(Percent, 12.6, 21.0),
            Self::BasicAtkDmgBonus => CatalogEntry::new(Percent, 6.4, 11.6),
            Self::HeavyAtkDmgBonus => CatalogEntry::new(Percent, 6.4, 11.6),
            Self::ResonanceSkillDmgBonus => CatalogEntry::new(Percent, 6.4, 11.6),
            Self::ResonanceLiberationDmgBonus => CatalogEntry::new(Percent, 6.4, 11.6),
        }
    }
}

/// Read-only mapping from substat identifier to its roll bounds and kind.
///
/// Built once (from the embedded table or a CSV override) and then shared
/// by every scoring call. Not a global: callers construct it and pass it in,
/// so tests can substitute arbitrary ranges.
#[derive(Debug, Clone, Default)]
pub struct SubstatCatalog {
    entries: HashMap<String, CatalogEntry>,
}

impl SubstatCatalog {
    /// Catalog holding the embedded `KnownStat` table.
    pub fn builtin() -> Self {
        let mut catalog = Self::default();
        for stat in KnownStat::iter() {
            catalog.insert(stat.to_string(), stat.entry());
        }
        catalog
    }

    pub fn insert(&mut self, name: impl Into<String>, entry: CatalogEntry) {
        debug_assert!(entry.range.max >= entry.range.min);
        self.entries.insert(name.into(), entry);
    }

    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.get(name)
    }

    /// Lookup that fails with `UnknownStat` when the identifier is absent.
    pub fn entry(&self, name: &str) -> EgResult<&CatalogEntry> {
        self.entries
            .get(name)
            .ok_or_else(|| EchoGradeError::UnknownStat(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in a stable (alphabetical) order, for reports.
    pub fn sorted_entries(&self) -> Vec<(&str, &CatalogEntry)> {
        let mut items: Vec<(&str, &CatalogEntry)> = self
            .entries
            .iter()
            .map(|(name, entry)| (name.as_str(), entry))
            .collect();
        items.sort_unstable_by_key(|(name, _)| *name);
        items
    }

    /// Parses a range table from CSV with a `Stat,Kind,Min,Max` header.
    ///
    /// Rows with missing fields, unparseable values, or text the reader
    /// cannot decode are skipped and counted, mirroring how game data
    /// exported from spreadsheets tends to arrive. A row whose max is below
    /// its min is a hard `Catalog` error: that is a broken table, not a
    /// stray line.
    pub fn from_csv_reader<R: Read>(reader: R) -> EgResult<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .has_headers(true)
            .from_reader(reader);

        let mut catalog = Self::default();
        let mut skipped = 0usize;

        for result in rdr.records() {
            let rec = match result {
                Ok(rec) => rec,
                Err(e) => {
                    debug!("Unreadable row in substat range table: {}", e);
                    skipped += 1;
                    continue;
                }
            };
            if rec.len() < 4 {
                skipped += 1;
                continue;
            }

            let name = rec[0].trim().to_string();
            if name.is_empty() {
                skipped += 1;
                continue;
            }

            let kind: StatKind = match rec[1].trim().parse() {
                Ok(k) => k,
                Err(_) => {
                    skipped += 1;
                    continue;
                }
            };
            let min: f64 = match rec[2].trim().parse() {
                Ok(v) => v,
                Err(_) => {
                    skipped += 1;
                    continue;
                }
            };
            let max: f64 = match rec[3].trim().parse() {
                Ok(v) => v,
                Err(_) => {
                    skipped += 1;
                    continue;
                }
            };

            if max < min {
                return Err(EchoGradeError::Catalog(format!(
                    "stat '{}' has max {} below min {}",
                    name, max, min
                )));
            }

            catalog.insert(name, CatalogEntry::new(kind, min, max));
        }

        if skipped > 0 {
            warn!("Skipped {} invalid rows in substat range table.", skipped);
        }
        debug!("Loaded {} substat range entries.", catalog.len());

        Ok(catalog)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> EgResult<Self> {
        let file = File::open(path)?;
        Self::from_csv_reader(file)
    }
}
