//! Name variations probed by the registry, store and install-dir lookups.

/// Extension appended to produce the executable form of a name.
pub const EXE_EXTENSION: &str = ".exe";

/// Prefix some store-installed apps use for their execution aliases.
pub const STORE_ALIAS_PREFIX: &str = "ms-";

/// Canonical variations of an application name, in probe order.
///
/// Verbatim forms come before lower-cased forms so that an exact match wins
/// a tie within any single strategy. Duplicates are kept when the input is
/// already lower-case; probing the same path twice is harmless.
pub fn name_variations(name: &str) -> [String; 4] {
    let lower = name.to_lowercase();
    let lower_exe = format!("{}{}", lower, EXE_EXTENSION);
    [
        name.to_string(),
        format!("{}{}", name, EXE_EXTENSION),
        lower,
        lower_exe,
    ]
}

/// Variations probed inside the store alias directory.
///
/// The canonical four, then the vendor-prefixed alias, then the plain
/// lower-case executable name again.
pub fn store_variations(name: &str) -> Vec<String> {
    let lower = name.to_lowercase();
    let mut variations: Vec<String> = name_variations(name).into_iter().collect();
    variations.push(format!("{}{}{}", STORE_ALIAS_PREFIX, lower, EXE_EXTENSION));
    variations.push(format!("{}{}", lower, EXE_EXTENSION));
    variations
}
