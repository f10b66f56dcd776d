/// Default first heading level included in the table of contents (h2)
pub fn default_start_level() -> i32 {
    2
}

/// Default last heading level included in the table of contents (h3)
pub fn default_end_level() -> i32 {
    3
}

/// Unordered lists by default
pub fn default_ordered() -> bool {
    false
}
