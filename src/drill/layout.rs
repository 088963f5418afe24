use std::collections::BTreeSet;

/// Label of the space bar, and the target sentinel that a literal `' '` matches.
pub const SPACE: &str = "Space";

/// Static QWERTY layout, top row first.
pub const KEYBOARD_ROWS: [&[&str]; 5] = [
    &["1", "2", "3", "4", "5", "6", "7", "8", "9", "0"],
    &["Q", "W", "E", "R", "T", "Y", "U", "I", "O", "P"],
    &["A", "S", "D", "F", "G", "H", "J", "K", "L", ";"],
    &["Z", "X", "C", "V", "B", "N", "M"],
    &[SPACE],
];

/// Home-row anchor keys, drawn with a distinct style.
pub const HOME_ROW_KEYS: [&str; 8] = ["A", "S", "D", "F", "J", "K", "L", ";"];

/// Whether `label` is a key on the layout.
pub fn has_key(label: &str) -> bool {
    KEYBOARD_ROWS.iter().any(|row| row.contains(&label))
}

pub fn is_home_row(label: &str) -> bool {
    HOME_ROW_KEYS.contains(&label)
}

/// Layout keys to highlight for a target.
///
/// `"Space"` lights the space bar alone. Anything else lights each of its
/// characters (uppercased) that exists on the layout; unknown characters are
/// skipped.
pub fn highlight_keys(target: &str) -> BTreeSet<String> {
    if target == SPACE {
        return BTreeSet::from([SPACE.to_string()]);
    }

    target
        .chars()
        .flat_map(char::to_uppercase)
        .map(String::from)
        .filter(|label| has_key(label))
        .collect()
}

/// Layout label for a raw key-press label, used for the press flash.
///
/// A literal space maps to the space bar; other labels are uppercased.
/// Returns `None` when the key is not on the layout.
pub fn layout_label(input: &str) -> Option<String> {
    if input == " " {
        return Some(SPACE.to_string());
    }
    let upper = input.to_uppercase();
    has_key(&upper).then_some(upper)
}
