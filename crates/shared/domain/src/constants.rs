//! Reserved feature keys of the package schema and the boolean lexicon.
//!
//! The feature bag itself is schema-less, but every package carries these
//! seven entitlement keys. Their order here is the display order of the
//! package editor, so keep it stable.

pub const MODULES_ENABLED: &str = "modules_enabled";
pub const MAX_STAFF: &str = "max_staff";
pub const MAX_SCHOOLS: &str = "max_schools";
pub const MAX_STUDENTS: &str = "max_students";
pub const MAX_TEACHERS: &str = "max_teachers";
pub const MAX_STORAGE_GB: &str = "max_storage_gb";
pub const MAX_BRANCHES_PER_SCHOOL: &str = "max_branches_per_school";

/// Reserved keys in their fixed display order. `modules_enabled` leads.
pub const PRIORITY_FEATURE_KEYS: &[&str] = &[
    MODULES_ENABLED,
    MAX_STAFF,
    MAX_SCHOOLS,
    MAX_STUDENTS,
    MAX_TEACHERS,
    MAX_STORAGE_GB,
    MAX_BRANCHES_PER_SCHOOL,
];

/// Words (lower-case, trimmed) coerced to `true`.
pub const TRUTHY_WORDS: &[&str] = &["true", "1", "yes", "y", "on", "enabled"];

/// Words (lower-case, trimmed) coerced to `false`.
pub const FALSY_WORDS: &[&str] = &["false", "0", "no", "n", "off", "disabled"];

/// Words that classify a free-text value as boolean. Narrower than the
/// coercion lexicon: `"1"` and `"0"` stay numeric, `"y"`/`"n"` stay text.
pub const BOOLEAN_WORDS: &[&str] =
    &["true", "false", "yes", "no", "on", "off", "enabled", "disabled"];
