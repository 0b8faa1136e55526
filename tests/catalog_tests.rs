use echograde::catalog::{StatKind, SubstatCatalog};
use echograde::error::EchoGradeError;
use std::io::{Cursor, Write};
use tempfile::NamedTempFile;

// --- BUILTIN TABLE ---

#[test]
fn test_builtin_has_thirteen_stats() {
    let catalog = SubstatCatalog::builtin();
    assert_eq!(catalog.len(), 13);
    assert!(!catalog.is_empty());
}

#[test]
fn test_builtin_flat_stats() {
    // Exactly the three base values roll as whole numbers.
    let catalog = SubstatCatalog::builtin();

    let flats: Vec<&str> = catalog
        .sorted_entries()
        .into_iter()
        .filter(|(_, e)| e.kind == StatKind::Flat)
        .map(|(name, _)| name)
        .collect();

    assert_eq!(flats, vec!["atk", "def", "hp"]);
}

#[test]
fn test_builtin_percent_suffix_is_a_distinct_stat() {
    let catalog = SubstatCatalog::builtin();

    let atk = catalog.entry("atk").unwrap();
    assert_eq!(atk.kind, StatKind::Flat);
    assert_eq!(atk.range.min, 30.0);
    assert_eq!(atk.range.max, 70.0);

    let atk_pct = catalog.entry("atk%").unwrap();
    assert_eq!(atk_pct.kind, StatKind::Percent);
    assert_eq!(atk_pct.range.min, 6.4);
    assert_eq!(atk_pct.range.max, 11.6);
}

#[test]
fn test_builtin_ranges_are_sane() {
    let catalog = SubstatCatalog::builtin();
    for (name, entry) in catalog.sorted_entries() {
        assert!(
            entry.range.max > entry.range.min,
            "{} has a degenerate range",
            name
        );
        assert!(entry.range.min > 0.0, "{} has a non-positive minimum", name);
    }
}

#[test]
fn test_builtin_covers_all_dmg_bonuses() {
    let catalog = SubstatCatalog::builtin();
    for name in [
        "basic_atk_dmg_bonus",
        "heavy_atk_dmg_bonus",
        "resonance_skill_dmg_bonus",
        "resonance_liberation_dmg_bonus",
    ] {
        let entry = catalog.entry(name).unwrap();
        assert_eq!(entry.kind, StatKind::Percent);
        assert_eq!(entry.range.min, 6.4);
        assert_eq!(entry.range.max, 11.6);
    }
}

#[test]
fn test_unknown_lookup_names_the_stat() {
    let catalog = SubstatCatalog::builtin();
    match catalog.entry("moxie") {
        Err(EchoGradeError::UnknownStat(name)) => assert_eq!(name, "moxie"),
        other => panic!("expected UnknownStat, got {:?}", other),
    }
}

// --- CSV OVERRIDE LOADING ---

#[test]
fn test_csv_in_memory_loading() {
    let data = "Stat,Kind,Min,Max\natk,flat,30,70\ncrit_rate,percent,6.3,10.5\n";
    let catalog = SubstatCatalog::from_csv_reader(Cursor::new(data)).unwrap();

    assert_eq!(catalog.len(), 2);
    let atk = catalog.entry("atk").unwrap();
    assert_eq!(atk.kind, StatKind::Flat);
    assert_eq!(atk.range.max, 70.0);
}

#[test]
fn test_csv_handles_whitespace_and_case() {
    let data = "Stat,Kind,Min,Max\n atk , Flat , 30 , 70 \n";
    let catalog = SubstatCatalog::from_csv_reader(Cursor::new(data)).unwrap();

    let atk = catalog.entry("atk").unwrap();
    assert_eq!(atk.kind, StatKind::Flat);
    assert_eq!(atk.range.min, 30.0);
}

#[test]
fn test_csv_skips_bad_rows() {
    let data = "Stat,Kind,Min,Max\n\
                atk,flat,30,70\n\
                mystery,sideways,1,2\n\
                hp,flat,oops,580\n\
                short,flat\n\
                ,percent,1,2\n\
                crit_rate,percent,6.3,10.5\n";
    let catalog = SubstatCatalog::from_csv_reader(Cursor::new(data)).unwrap();

    assert_eq!(catalog.len(), 2);
    assert!(catalog.get("atk").is_some());
    assert!(catalog.get("crit_rate").is_some());
    assert!(catalog.get("mystery").is_none());
}

#[test]
fn test_csv_skips_unreadable_rows() {
    // A row that is not valid UTF-8 drops out like any other bad row
    // instead of poisoning the whole load.
    let mut data = b"Stat,Kind,Min,Max\natk,flat,30,70\n".to_vec();
    data.extend_from_slice(b"\xff\xfe,percent,1,2\n");
    data.extend_from_slice(b"crit_rate,percent,6.3,10.5\n");

    let catalog = SubstatCatalog::from_csv_reader(Cursor::new(data)).unwrap();
    assert_eq!(catalog.len(), 2);
    assert!(catalog.get("atk").is_some());
    assert!(catalog.get("crit_rate").is_some());
}

#[test]
fn test_csv_inverted_range_is_fatal() {
    // A max below min silently poisons every grade computed from it,
    // so the whole load fails instead.
    let data = "Stat,Kind,Min,Max\natk,flat,70,30\n";
    match SubstatCatalog::from_csv_reader(Cursor::new(data)) {
        Err(EchoGradeError::Catalog(msg)) => {
            assert!(msg.contains("atk"), "message should name the stat: {}", msg)
        }
        other => panic!("expected Catalog error, got {:?}", other),
    }
}

#[test]
fn test_csv_replaces_builtin_entirely() {
    // An override table is the whole table: stats it omits are unknown.
    let data = "Stat,Kind,Min,Max\natk,flat,0,99\n";
    let catalog = SubstatCatalog::from_csv_reader(Cursor::new(data)).unwrap();

    assert_eq!(catalog.len(), 1);
    assert!(catalog.entry("crit_rate").is_err());
}

#[test]
fn test_csv_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Stat,Kind,Min,Max").unwrap();
    writeln!(file, "atk,flat,30,70").unwrap();
    writeln!(file, "hp%,percent,6.4,11.6").unwrap();

    let catalog = SubstatCatalog::load_from_file(file.path()).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.entry("hp%").unwrap().kind, StatKind::Percent);
}

#[test]
fn test_csv_missing_file_is_io_error() {
    match SubstatCatalog::load_from_file("no/such/ranges.csv") {
        Err(EchoGradeError::Io(_)) => {}
        other => panic!("expected Io error, got {:?}", other),
    }
}
