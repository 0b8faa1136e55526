pub mod types;

pub use self::types::{EchoEfficiency, RolledSubstat, SubstatScore};

use crate::catalog::{StatKind, StatRange, SubstatCatalog};
use crate::error::{EchoGradeError, EgResult};

/// Maps one rolled value onto the `[baseline, 100]` scale for its range.
///
/// Each range is treated as a set of discrete roll outcomes: whole numbers
/// for flat stats, tenths for percent stats. The scale assigns 100 to the
/// maximum outcome and `100 / outcome_count` to the minimum, so a documented
/// minimum roll still earns its share instead of grading 0. Values outside
/// the range extrapolate on the same line.
pub fn substat_efficiency(kind: StatKind, range: StatRange, value: f64) -> f64 {
    match kind {
        StatKind::Flat => {
            let weight = 100.0 / (range.max - range.min + 1.0);
            (value - range.min + 1.0) * weight
        }
        StatKind::Percent => {
            // Tenths are the roll granularity, so widen by 10 before the
            // same one-outcome baseline shift.
            let weight = 100.0 / ((range.max - range.min) * 10.0 + 1.0);
            ((value - range.min) * 10.0 + 1.0) * weight
        }
    }
}

/// Grades every rolled substat against the catalog and aggregates.
///
/// `max_efficiency` describes how close the rolled stat *types* are to the
/// best possible set for the build, on a 0.0 to 1.0 scale. The mean of the
/// per-substat efficiencies is reported as `theoretical`; scaling it by
/// `max_efficiency` yields `total`.
///
/// Every substat name is resolved before any grading arithmetic runs, so an
/// unknown name rejects the whole echo instead of producing a partial grade.
pub fn grade_substats(
    catalog: &SubstatCatalog,
    substats: &[RolledSubstat],
    max_efficiency: f64,
) -> EgResult<EchoEfficiency> {
    if substats.is_empty() {
        return Err(EchoGradeError::EmptySubstats);
    }

    let mut resolved = Vec::with_capacity(substats.len());
    for substat in substats {
        resolved.push((substat, *catalog.entry(&substat.name)?));
    }

    let mut scores = Vec::with_capacity(resolved.len());
    let mut sum = 0.0;

    for (substat, entry) in resolved {
        let efficiency = substat_efficiency(entry.kind, entry.range, substat.value);
        sum += efficiency;
        scores.push(SubstatScore {
            name: substat.name.clone(),
            value: substat.value,
            efficiency,
        });
    }

    let theoretical = sum / scores.len() as f64;

    Ok(EchoEfficiency {
        substats: scores,
        theoretical,
        total: theoretical * max_efficiency,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn flat_range() -> StatRange {
        // atk: 41 whole-number outcomes
        StatRange::new(30.0, 70.0)
    }

    #[test]
    fn test_flat_max_is_100() {
        let eff = substat_efficiency(StatKind::Flat, flat_range(), 70.0);
        assert!((eff - 100.0).abs() < EPS);
    }

    #[test]
    fn test_flat_min_is_one_outcome_share() {
        // 100 / 41 outcomes, not zero
        let eff = substat_efficiency(StatKind::Flat, flat_range(), 30.0);
        assert!((eff - 100.0 / 41.0).abs() < EPS);
    }

    #[test]
    fn test_percent_counts_tenths() {
        // crit_rate 6.3..10.5 => 43 outcomes, mid roll 8.4 is the 22nd
        let range = StatRange::new(6.3, 10.5);
        let eff = substat_efficiency(StatKind::Percent, range, 8.4);
        assert!((eff - 22.0 * 100.0 / 43.0).abs() < 1e-6);
    }

    #[test]
    fn test_grade_rejects_empty_list() {
        let catalog = SubstatCatalog::builtin();
        let result = grade_substats(&catalog, &[], 1.0);
        assert!(matches!(result, Err(EchoGradeError::EmptySubstats)));
    }

    #[test]
    fn test_grade_rejects_unknown_name() {
        let catalog = SubstatCatalog::builtin();
        let substats = vec![
            RolledSubstat::new("atk", 50.0),
            RolledSubstat::new("mystery_stat", 5.0),
        ];
        let result = grade_substats(&catalog, &substats, 1.0);
        match result {
            Err(EchoGradeError::UnknownStat(name)) => assert_eq!(name, "mystery_stat"),
            other => panic!("expected UnknownStat, got {:?}", other),
        }
    }
}
