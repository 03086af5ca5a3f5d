use approx::assert_relative_eq;
use converter::{Category, ConversionError, Converter, UnitRegistry, normalize};

const VALUES: [f64; 6] = [0.001, 0.5, 1.0, 42.0, 1234.5678, 9.81e6];

fn keys(category: Category) -> Vec<&'static str> {
    UnitRegistry::global().units(category).map(|u| u.key).collect()
}

fn all_keys() -> Vec<&'static str> {
    Category::ALL.into_iter().flat_map(keys).collect()
}

// ═══════════════════════════════════════════════════════════════════
//  Round trip & identity
// ═══════════════════════════════════════════════════════════════════

#[test]
fn round_trip_within_each_category() {
    let conv = Converter::new();
    for category in Category::ALL {
        let units = keys(category);
        for &a in &units {
            for &b in &units {
                for v in VALUES {
                    let there = conv.convert(a, b, v).unwrap();
                    let back = conv.convert(b, a, there).unwrap();
                    assert_relative_eq!(back, v, max_relative = 1e-9);
                }
            }
        }
    }
}

#[test]
fn converting_a_unit_to_itself_is_exact() {
    let conv = Converter::new();
    for u in all_keys() {
        for v in VALUES.into_iter().chain([0.0, -17.3, 1.0 / 3.0]) {
            assert_eq!(conv.convert(u, u, v).unwrap(), v, "{u} -> {u} with {v}");
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Category closure
// ═══════════════════════════════════════════════════════════════════

#[test]
fn same_category_always_succeeds_and_reports_category() {
    let conv = Converter::new();
    for category in Category::ALL {
        let units = keys(category);
        for &a in &units {
            for &b in &units {
                let c = conv.conversion(a, b, 1.0).unwrap();
                assert_eq!(c.category, category);
            }
        }
    }
}

#[test]
fn different_categories_always_fail_as_incompatible() {
    let conv = Converter::new();
    for ca in Category::ALL {
        for cb in Category::ALL.into_iter().filter(|&c| c != ca) {
            for a in keys(ca) {
                for b in keys(cb) {
                    match conv.convert(a, b, 1.0) {
                        Err(ConversionError::IncompatibleUnits { from_category, to_category, .. }) => {
                            assert_eq!((from_category, to_category), (ca, Some(cb)));
                        }
                        other => panic!("{a} -> {b}: expected IncompatibleUnits, got {other:?}"),
                    }
                }
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Normalization
// ═══════════════════════════════════════════════════════════════════

#[test]
fn every_alias_resolves_to_a_convertible_key() {
    let reg = UnitRegistry::global();
    for (alias, canonical) in reg.aliases() {
        assert_eq!(normalize(alias), canonical);
        assert_eq!(normalize(&alias.to_uppercase()), canonical);
        assert!(reg.lookup_category(canonical).is_some(), "{alias} -> {canonical}");
    }
}

#[test]
fn normalization_is_stable_after_one_pass() {
    let inputs = all_keys()
        .into_iter()
        .map(String::from)
        .chain(UnitRegistry::global().aliases().map(|(a, _)| a.to_uppercase()))
        .chain(["", "  ", "Meters", "mEtReS", "unknown", "ML", "Ul"].map(String::from));
    for x in inputs {
        let once = normalize(&x);
        assert_eq!(normalize(&once), once, "input {x:?}");
    }
}

#[test]
fn alias_lookup_ignores_case() {
    assert_eq!(normalize("METERS"), "m");
    assert_eq!(normalize("meters"), "m");
    assert_eq!(normalize("METERS"), normalize("meters"));
}
