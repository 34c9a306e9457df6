//! # Slugs
//!
//! Filesystem-safe names derived from quest titles.

/// Lower-cased, underscore-joined form of `title`.
///
/// Alphanumerics, spaces and underscores are kept, any other character
/// becomes an underscore, then spaces become underscores.
///
/// # Examples
///
/// ```
/// use questsmith::slugify;
///
/// assert_eq!(slugify("Hunt: Rathalos!"), "hunt__rathalos_");
/// assert_eq!(slugify("Multi-Monster Hunt"), "multi_monster_hunt");
/// ```
pub fn slugify(title: &str) -> String {
    title
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect::<String>()
        .to_lowercase()
}
