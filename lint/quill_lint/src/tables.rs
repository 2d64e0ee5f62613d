//! Classification tables shared by the rules.
//!
//! Built once on first use and read-only afterwards, so parallel lint runs
//! share them without locking. Every lookup is total: a name that is not
//! in a table is simply not a member.

use std::sync::LazyLock;

use rustc_hash::FxHashSet;

/// Canonical (lowercase) unit names.
const UNITS: &[&str] = &[
    // Relative lengths
    "em", "ex", "ch", "rem", "rex", "rch", "cap", "rcap", "ic", "ric", "lh", "rlh",
    // Viewport lengths
    "vw", "vh", "vi", "vb", "vmin", "vmax",
    "svw", "svh", "svi", "svb", "svmin", "svmax",
    "lvw", "lvh", "lvi", "lvb", "lvmin", "lvmax",
    "dvw", "dvh", "dvi", "dvb", "dvmin", "dvmax",
    // Container query lengths
    "cqw", "cqh", "cqi", "cqb", "cqmin", "cqmax",
    // Absolute lengths
    "px", "mm", "q", "cm", "in", "pt", "pc",
    // Angles
    "deg", "grad", "rad", "turn",
    // Time
    "ms", "s",
    // Frequency
    "hz", "khz",
    // Resolution
    "dpi", "dpcm", "dppx", "x",
    // Flex
    "fr",
    // Percentage
    "%",
];

/// Pseudo-elements from CSS2 that may be written with one colon.
const LEGACY_PSEUDO_ELEMENTS: &[&str] = &["before", "after", "first-line", "first-letter"];

/// Pseudo-elements that are only valid with two colons.
const DOUBLE_COLON_PSEUDO_ELEMENTS: &[&str] = &[
    "backdrop",
    "cue",
    "cue-region",
    "file-selector-button",
    "grammar-error",
    "highlight",
    "marker",
    "part",
    "placeholder",
    "selection",
    "slotted",
    "spelling-error",
    "target-text",
    "view-transition",
    "view-transition-group",
    "view-transition-image-pair",
    "view-transition-new",
    "view-transition-old",
];

static KNOWN_UNITS: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| UNITS.iter().copied().collect());

static DOUBLE_COLON_ONLY: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| DOUBLE_COLON_PSEUDO_ELEMENTS.iter().copied().collect());

/// Look `name` up in `set`, ignoring ASCII case.
fn contains_ignore_case(set: &FxHashSet<&'static str>, name: &str) -> bool {
    if name.bytes().any(|b| b.is_ascii_uppercase()) {
        set.contains(name.to_ascii_lowercase().as_str())
    } else {
        set.contains(name)
    }
}

/// Check if `unit` is a known CSS unit (ASCII case-insensitive).
pub fn is_known_unit(unit: &str) -> bool {
    contains_ignore_case(&KNOWN_UNITS, unit)
}

/// Check if a value word is a variable placeholder whose resolved value is
/// unknown at lint time: `$sass`, `@less`, `--custom` or `#{$interpolation}`.
///
/// `var(--x)` is a function token; its `--x` argument is the word that
/// matches here.
pub fn is_variable_reference(word: &str) -> bool {
    word.starts_with('$')
        || word.starts_with('@')
        || word.starts_with("--")
        || word.starts_with("#{")
}

/// Check if a pseudo-element may be written with a single colon
/// (`:before`). Only the four CSS2 pseudo-elements qualify.
pub fn pseudo_element_accepts_single(name: &str) -> bool {
    LEGACY_PSEUDO_ELEMENTS
        .iter()
        .any(|legacy| legacy.eq_ignore_ascii_case(name))
}

/// Check if a pseudo-element is only valid with two colons
/// (`::selection`).
pub fn pseudo_element_requires_double(name: &str) -> bool {
    contains_ignore_case(&DOUBLE_COLON_ONLY, name)
}
