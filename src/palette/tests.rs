//! Unit tests for the color registry

use super::*;

fn is_hex_color(s: &str) -> bool {
    s.len() == 7 && s.starts_with('#') && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

#[test]
fn test_palette_sizes() {
    assert_eq!(base_colors().len(), 14);
    assert_eq!(additional_colors().len(), 6);
    assert_eq!(merged_palette().len(), 20);
}

#[test]
fn test_all_values_are_hex_colors() {
    for e in base_colors().iter().chain(additional_colors().iter()) {
        assert!(is_hex_color(e.hex), "{} has bad value {}", e.name, e.hex);
        assert!(HexColor::parse(e.hex).is_ok(), "{} should parse", e.name);
    }
}

#[test]
fn test_names_unique_within_each_palette() {
    for palette in [base_colors(), additional_colors()] {
        let mut names: Vec<_> = palette.names().collect();
        let before = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), before);
    }
}

#[test]
fn test_color_palette_array_order() {
    let array = color_palette_array();
    assert_eq!(array.len(), 14);
    assert_eq!(array[0], "#1D4289");
    assert_eq!(array[1], "#41B6E6");
    assert_eq!(array[13], "#47DAE5");

    let base_values: Vec<_> = base_colors().values().collect();
    assert_eq!(array, base_values.as_slice());
}

#[test]
fn test_merged_palette_values() {
    let merged = merged_palette();
    assert_eq!(merged.get("Dark Blue"), Some("#1D4289"));
    assert_eq!(merged.get("Indian Red"), Some("#981717"));
    assert_eq!(&merged["Cyan"], "#47DAE5");
    assert_eq!(&merged["Pink 2"], "#C63FA9");
}

#[test]
fn test_merged_palette_prefers_additional() {
    let merged = merged_palette();
    for name in merged.names() {
        let expected = additional_colors()
            .get(name)
            .or_else(|| base_colors().get(name));
        assert_eq!(merged.get(name), expected, "mismatch for {}", name);
    }
    for name in base_colors().names().chain(additional_colors().names()) {
        assert!(merged.contains(name), "merged palette lacks {}", name);
    }
}

#[test]
fn test_merged_palette_order() {
    let names: Vec<_> = merged_palette().names().collect();
    assert_eq!(names[0], "Dark Blue");
    assert_eq!(names[13], "Cyan");
    assert_eq!(names[14], "Indian Red");
    assert_eq!(names[19], "Pink 2");
}

#[test]
fn test_merge_override_keeps_position() {
    let base = Palette::from_entries(&[
        ColorEntry {
            name: "One",
            hex: "#111111",
        },
        ColorEntry {
            name: "Two",
            hex: "#222222",
        },
    ]);
    let overlay = Palette::from_entries(&[
        ColorEntry {
            name: "Three",
            hex: "#333333",
        },
        ColorEntry {
            name: "One",
            hex: "#AAAAAA",
        },
    ]);

    let merged = base.merge(&overlay);
    assert_eq!(merged.len(), 3);
    assert_eq!(merged.get("One"), Some("#AAAAAA"));
    assert_eq!(merged.get("Two"), Some("#222222"));
    let names: Vec<_> = merged.names().collect();
    assert_eq!(names, ["One", "Two", "Three"]);

    // Sources are untouched
    assert_eq!(base.get("One"), Some("#111111"));
    assert!(!base.contains("Three"));
}

#[test]
fn test_from_entries_later_value_wins() {
    let p = Palette::from_entries(&[
        ColorEntry {
            name: "Dup",
            hex: "#000001",
        },
        ColorEntry {
            name: "Dup",
            hex: "#000002",
        },
    ]);
    assert_eq!(p.len(), 1);
    assert_eq!(p.get("Dup"), Some("#000002"));
}

#[test]
fn test_accessors_idempotent() {
    assert_eq!(base_colors(), base_colors());
    assert_eq!(additional_colors(), additional_colors());
    assert_eq!(color_palette_array(), color_palette_array());
    assert_eq!(merged_palette(), merged_palette());
    assert!(std::ptr::eq(merged_palette(), merged_palette()));
}

#[test]
fn test_concurrent_readers() {
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| (merged_palette().len(), color_palette_array()[0])))
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), (20, "#1D4289"));
    }
}

#[test]
fn test_lookup_case_insensitive() {
    let e = lookup("dark blue").unwrap();
    assert_eq!(e.name, "Dark Blue");
    assert_eq!(e.hex, "#1D4289");
    assert_eq!(lookup("GREEN 3").map(|e| e.hex), Some("#049235"));
    assert!(lookup("Mauve").is_none());
}

#[test]
fn test_auto_color_cycles() {
    assert_eq!(auto_color(0), "#1D4289");
    assert_eq!(auto_color(13), "#47DAE5");
    assert_eq!(auto_color(14), "#1D4289");
    assert_eq!(auto_color(15), "#41B6E6");

    let colors = auto_colors(30);
    assert_eq!(colors.len(), 30);
    assert_eq!(&colors[..14], color_palette_array());
    assert!(auto_colors(0).is_empty());
}

#[test]
fn test_additional_not_in_auto_cycle() {
    let cycle = auto_colors(28);
    for hex in additional_colors().values() {
        assert!(!cycle.contains(&hex), "{} should not be automatic", hex);
    }
}

#[test]
fn test_palette_for_set() {
    assert_eq!(palette_for(PaletteSet::Base).len(), 14);
    assert_eq!(palette_for(PaletteSet::Additional).len(), 6);
    assert_eq!(palette_for(PaletteSet::Merged).len(), 20);
    assert_eq!(PaletteSet::default(), PaletteSet::Merged);
}

#[test]
fn test_palette_serializes_in_order() {
    let json = serde_json::to_string(additional_colors()).unwrap();
    assert_eq!(
        json,
        r##"{"Indian Red":"#981717","Green 2":"#17BF51","Green 3":"#049235","Dark Turquoise":"#00B6EB","Dark Violet":"#A58AFF","Pink 2":"#C63FA9"}"##
    );
}

#[test]
fn test_merged_override_serializes_in_base_position() {
    let overlay = Palette::from_entries(&[
        ColorEntry {
            name: "Extra",
            hex: "#123456",
        },
        ColorEntry {
            name: "Dark Blue",
            hex: "#ABCDEF",
        },
    ]);
    let merged = base_colors().merge(&overlay);
    assert_eq!(merged.len(), 15);

    let json = serde_json::to_string(&merged).unwrap();
    assert!(json.starts_with(r##"{"Dark Blue":"#ABCDEF","Light Blue":"#41B6E6""##));
    assert!(json.ends_with(r##""Cyan":"#47DAE5","Extra":"#123456"}"##));
}

#[test]
fn test_auto_marker_follows_hex_not_name() {
    for hex in base_colors().values() {
        assert!(is_auto_color(hex));
    }
    for hex in additional_colors().values() {
        assert!(!is_auto_color(hex));
    }

    // A base name overridden with a manual color is no longer automatic
    let overlay = Palette::from_entries(&[ColorEntry {
        name: "Red",
        hex: "#981717",
    }]);
    let merged = base_colors().merge(&overlay);
    let red = merged.find("Red").unwrap();
    assert!(!is_auto_color(red.hex));
    assert_eq!(merged.values().filter(|hex| is_auto_color(hex)).count(), 13);
}

#[test]
#[should_panic(expected = "no color named")]
fn test_index_unknown_name_panics() {
    let _ = &merged_palette()["Mauve"];
}
