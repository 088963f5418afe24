use crate::error::DrillError;

/// A named, ordered list of target keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PracticeMode {
    pub name: &'static str,
    pub keys: &'static [&'static str],
    pub description: &'static str,
}

/// The fixed practice-mode table. Every key list is non-empty.
pub static PRACTICE_MODES: [PracticeMode; 5] = [
    PracticeMode {
        name: "基础指法",
        keys: &["A", "S", "D", "F", "J", "K", "L", ";"],
        description: "训练基础指法键位",
    },
    PracticeMode {
        name: "左手训练",
        keys: &["Q", "W", "E", "R", "T", "A", "S", "D", "F", "G"],
        description: "训练左手灵活性",
    },
    PracticeMode {
        name: "右手训练",
        keys: &["Y", "U", "I", "O", "P", "H", "J", "K", "L", ";"],
        description: "训练右手灵活性",
    },
    PracticeMode {
        name: "小指训练",
        keys: &["Q", "P", "Z", "M"],
        description: "训练小指按键技能",
    },
    PracticeMode {
        name: "数字键训练",
        keys: &["1", "2", "3", "4", "5", "6", "7", "8", "9", "0", "1", "2", "3"],
        description: "训练数字键指法",
    },
];

impl PracticeMode {
    /// Key label at `cursor`, wrapping around the end of the list.
    pub fn key_at(&self, cursor: usize) -> &'static str {
        self.keys[cursor % self.keys.len()]
    }
}

/// Number of practice modes.
pub fn mode_count() -> usize {
    PRACTICE_MODES.len()
}

/// The `--list-modes` listing: one numbered entry per mode with its keys.
pub fn list_modes() -> String {
    PRACTICE_MODES
        .iter()
        .enumerate()
        .map(|(i, m)| {
            format!(
                "{}. {} - {}\n   {}\n",
                i + 1,
                m.name,
                m.description,
                m.keys.join(" ")
            )
        })
        .collect()
}

/// Resolve a user-facing mode selector to a table index.
///
/// Accepts a 1-based index (`"3"`) or an exact mode name (`"小指训练"`).
pub fn resolve_mode(selector: &str) -> Result<usize, DrillError> {
    let selector = selector.trim();
    if let Ok(n) = selector.parse::<usize>() {
        if n == 0 || n > mode_count() {
            return Err(DrillError::ModeIndexOutOfRange {
                index: n,
                count: mode_count(),
            });
        }
        return Ok(n - 1);
    }

    PRACTICE_MODES
        .iter()
        .position(|m| m.name == selector)
        .ok_or_else(|| DrillError::UnknownMode(selector.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_modes_have_keys() {
        assert_eq!(mode_count(), 5);
        for m in &PRACTICE_MODES {
            assert!(!m.keys.is_empty(), "{} has no keys", m.name);
        }
    }

    #[test]
    fn test_key_at_wraps() {
        let digits = &PRACTICE_MODES[4];
        assert_eq!(digits.keys.len(), 13);
        assert_eq!(digits.key_at(12), "3");
        assert_eq!(digits.key_at(13), "1");
        assert_eq!(digits.key_at(26), "1");
    }

    #[test]
    fn test_resolve_by_index_and_name() {
        assert_eq!(resolve_mode("1"), Ok(0));
        assert_eq!(resolve_mode(" 5 "), Ok(4));
        assert_eq!(resolve_mode("小指训练"), Ok(3));
    }

    #[test]
    fn test_resolve_errors() {
        assert_eq!(
            resolve_mode("0"),
            Err(DrillError::ModeIndexOutOfRange { index: 0, count: 5 })
        );
        assert_eq!(
            resolve_mode("6"),
            Err(DrillError::ModeIndexOutOfRange { index: 6, count: 5 })
        );
        assert_eq!(
            resolve_mode("dvorak"),
            Err(DrillError::UnknownMode("dvorak".into()))
        );
    }

    #[test]
    fn test_list_modes() {
        let listing = list_modes();
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines.len(), 2 * mode_count());
        assert_eq!(lines[0], "1. 基础指法 - 训练基础指法键位");
        assert_eq!(lines[1], "   A S D F J K L ;");
        assert_eq!(lines[6], "4. 小指训练 - 训练小指按键技能");
        assert_eq!(lines[7], "   Q P Z M");
    }
}
