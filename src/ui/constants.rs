// ui/constants.rs

pub const TITLE: &str = r#" ___ _    ___  ___ _  _   ___  ___ ___  _   _ _____
| __| |  |   \| __| \| | / __|/ __/ _ \| | | |_   _|
| _|| |__| |) | _|| .` | \__ \ (_| (_) | |_| | | |
|___|____|___/|___|_|\_| |___/\___\___/ \___/  |_|
"#;

pub const TAGLINE: &str = "Know your foe before you face it.";

pub const LANDING_HINTS: &str = "Enter: search · Tab/Shift-Tab: NG level · Esc: quit";
pub const LIST_HINTS: &str = "↑↓/jk: move · Enter: open · Esc: back · Tab/Shift-Tab: NG level";
pub const REGION_HINTS: &str = "↑↓/jk or 1-2: choose · Enter: confirm · Esc: back";
pub const DETAIL_HINTS: &str =
    "←→/hl: location · Enter: load location · ↑↓/jk: scroll strategy · Esc: back · \
     Tab/Shift-Tab: NG level";
pub const NO_RESULTS_HINTS: &str = "Enter/Esc: back to search";
