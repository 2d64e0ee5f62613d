use super::*;

fn split(word: &str) -> Option<(&str, &str)> {
    parse_dimension(word).map(|d| (d.number, d.unit))
}

#[test]
fn integer_with_unit() {
    assert_eq!(split("10px"), Some(("10", "px")));
    assert_eq!(split("100%"), Some(("100", "%")));
}

#[test]
fn bare_number_has_empty_unit() {
    assert_eq!(split("0"), Some(("0", "")));
    assert_eq!(split("1.5"), Some(("1.5", "")));
}

#[test]
fn signs_and_fractions() {
    assert_eq!(split("-.5em"), Some(("-.5", "em")));
    assert_eq!(split("+2.25rem"), Some(("+2.25", "rem")));
    assert_eq!(split("3.pixels"), Some(("3", ".pixels")));
}

#[test]
fn exponent_requires_digits() {
    assert_eq!(split("1e3"), Some(("1e3", "")));
    assert_eq!(split("1E-3s"), Some(("1E-3", "s")));
    assert_eq!(split("1em"), Some(("1", "em")));
    assert_eq!(split("2e+x"), Some(("2", "e+x")));
    assert_eq!(split("4e"), Some(("4", "e")));
}

#[test]
fn non_numeric_words() {
    for word in ["", "auto", "#1e3", "-webkit-box", "-", ".", "+.", "px10", "$gap"] {
        assert_eq!(split(word), None, "{word:?}");
    }
}

#[test]
fn non_ascii_unit() {
    assert_eq!(split("10é"), Some(("10", "é")));
}
