//! Wire-form stability for locale lists: the serialized string is carried
//! in restart parameters and bookmarked URLs, so these shapes are frozen.

use canvas_nav::locale::{self, LocaleEntry};
use canvas_nav::LocaleError;

#[test]
fn serialized_form_is_stable() {
    let list = vec![
        LocaleEntry::with_label("en-GB", "English"),
        LocaleEntry::with_label("cy-GB", "Welsh"),
    ];
    assert_eq!(locale::serialize(&list), "en-GB:English,cy-GB:Welsh");

    let promoted = locale::promote(&list, "cy-GB").unwrap();
    assert_eq!(locale::serialize(&promoted), "cy-GB:Welsh,en-GB:English");
}

#[test]
fn round_trip_preserves_lists() {
    let lists = [
        vec![LocaleEntry::new("en")],
        vec![LocaleEntry::with_label("en-GB", "English")],
        vec![
            LocaleEntry::with_label("cy-GB", "Welsh"),
            LocaleEntry::new("en-GB"),
            LocaleEntry::with_label("fr-FR", "Français"),
        ],
    ];
    for list in lists {
        let wire = locale::serialize(&list);
        assert_eq!(locale::parse(&wire).unwrap(), list, "wire={}", wire);
    }
}

#[test]
fn parse_accepts_hand_written_specs() {
    let parsed = locale::parse("cy-GB,en-GB:English").unwrap();
    assert_eq!(
        parsed,
        vec![
            LocaleEntry::new("cy-GB"),
            LocaleEntry::with_label("en-GB", "English"),
        ]
    );
}

#[test]
fn malformed_specs_surface_the_offending_segment() {
    assert_eq!(
        locale::parse("").unwrap_err(),
        LocaleError::Malformed { segment: 0 }
    );
    assert_eq!(
        locale::parse("en-GB,:Welsh,fr-FR").unwrap_err(),
        LocaleError::Malformed { segment: 1 }
    );
}

#[test]
fn promote_then_serialize_then_parse_keeps_order() {
    let configured = vec![
        LocaleEntry::with_label("en-GB", "English"),
        LocaleEntry::with_label("cy-GB", "Welsh"),
        LocaleEntry::with_label("gd-GB", "Gaelic"),
    ];
    let wire = locale::serialize(&locale::promote(&configured, "gd-GB").unwrap());
    let names: Vec<String> = locale::parse(&wire)
        .unwrap()
        .into_iter()
        .map(|l| l.name)
        .collect();
    assert_eq!(names, ["gd-GB", "en-GB", "cy-GB"]);
}
