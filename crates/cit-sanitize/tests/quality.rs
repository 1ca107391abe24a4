//! Tests for name and date quality classification.

use cit_sanitize::{DateQuality, NameQuality, author_name_quality, date_quality};

#[test]
fn name_with_spelled_given_name_is_full() {
    assert_eq!(
        author_name_quality("Silva, João Carlos"),
        Some(NameQuality::FullName)
    );
    assert_eq!(
        author_name_quality("D'Ávila, Maria C"),
        Some(NameQuality::FullName)
    );
}

#[test]
fn name_with_initials_only() {
    assert_eq!(author_name_quality("Silva, J"), Some(NameQuality::Initials));
    assert_eq!(author_name_quality("Silva, J. C"), Some(NameQuality::Initials));
    assert_eq!(author_name_quality("Silva, JC"), Some(NameQuality::Initials));
}

#[test]
fn name_without_split_is_single_component() {
    assert_eq!(
        author_name_quality("Organização Mundial da Saúde"),
        Some(NameQuality::SingleComponent)
    );
    assert_eq!(
        author_name_quality("Silva,"),
        Some(NameQuality::SingleComponent)
    );
}

#[test]
fn unusable_names_have_no_level() {
    assert_eq!(author_name_quality(""), None);
    assert_eq!(author_name_quality("Anon"), None);
    assert_eq!(author_name_quality("et al"), None);
    assert_eq!(author_name_quality("Silva, J, Souza, M"), None);
    assert_eq!(author_name_quality("Silva 2001"), None);
    assert_eq!(author_name_quality("Silva (org)"), None);
    assert_eq!(author_name_quality(", ."), None);
}

#[test]
fn name_quality_displays_level() {
    assert_eq!(NameQuality::Initials.to_string(), "2");
    assert_eq!(NameQuality::FullName.level(), 1);
}

#[test]
fn complete_dates() {
    assert_eq!(date_quality("2020-02-29"), Some(DateQuality::Complete));
    assert_eq!(date_quality("19981231"), Some(DateQuality::Complete));
}

#[test]
fn partial_dates() {
    assert_eq!(date_quality("1998-12"), Some(DateQuality::YearMonth));
    assert_eq!(date_quality("199812"), Some(DateQuality::YearMonth));
    assert_eq!(date_quality("19981200"), Some(DateQuality::YearMonth));
    assert_eq!(date_quality("1998"), Some(DateQuality::Year));
    assert_eq!(date_quality("19980000"), Some(DateQuality::Year));
}

#[test]
fn embedded_years() {
    assert_eq!(date_quality("jan. 1998"), Some(DateQuality::EmbeddedYear));
    assert_eq!(date_quality("1998a"), Some(DateQuality::EmbeddedYear));
    assert_eq!(date_quality("2019-02-30"), Some(DateQuality::EmbeddedYear));
}

#[test]
fn dates_without_plausible_year() {
    assert_eq!(date_quality(""), None);
    assert_eq!(date_quality("s.d."), None);
    assert_eq!(date_quality("0998"), None);
    assert_eq!(date_quality("19981"), None);
}

#[test]
fn date_quality_displays_level() {
    assert_eq!(DateQuality::EmbeddedYear.to_string(), "4");
}
