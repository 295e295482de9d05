use rand_core::{OsRng, RngCore};

pub const SLUG_MIN_LEN: usize = 3;
pub const SLUG_MAX_LEN: usize = 50;

/// Slugs that collide with routing or look official.
const RESERVED_SLUGS: &[&str] = &[
    "admin", "api", "app", "assets", "auth", "billing", "blog", "cdn",
    "dashboard", "docs", "help", "login", "logout", "mail", "new", "settings",
    "signup", "static", "status", "support", "www",
];

/// Validate a caller-supplied slug. Rules run in order and the first failure
/// is the message the caller sees.
pub fn validate_slug(slug: &str) -> Result<(), String> {
    if slug.len() < SLUG_MIN_LEN || slug.len() > SLUG_MAX_LEN {
        return Err(format!(
            "Slug must be between {SLUG_MIN_LEN} and {SLUG_MAX_LEN} characters."
        ));
    }
    if !slug.chars().next().is_some_and(|c| c.is_ascii_lowercase()) {
        return Err("Slug must start with a lowercase letter.".to_string());
    }
    if !slug
        .chars()
        .last()
        .is_some_and(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
    {
        return Err("Slug must end with a letter or a digit.".to_string());
    }
    if slug.contains("--") {
        return Err("Slug cannot contain consecutive hyphens.".to_string());
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err("Slug can only contain lowercase letters, digits and hyphens.".to_string());
    }
    if RESERVED_SLUGS.contains(&slug) {
        return Err("This slug is reserved.".to_string());
    }
    Ok(())
}

/// Derive a slug candidate from a display name. The output still has to pass
/// [`validate_slug`]; short or exotic names can produce something too short.
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();
    let cleaned: String = lowered
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == ' ' || *c == '-')
        .collect();
    let joined = cleaned.split_whitespace().collect::<Vec<_>>().join("-");

    let mut out = String::with_capacity(joined.len());
    let mut prev_hyphen = false;
    for c in joined.chars() {
        if c == '-' {
            if !prev_hyphen {
                out.push('-');
            }
            prev_hyphen = true;
        } else {
            out.push(c);
            prev_hyphen = false;
        }
    }
    out.trim_matches('-').to_string()
}

const SUFFIX_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Random lowercase-alphanumeric suffix for collision retries.
pub fn random_suffix(len: usize) -> String {
    let mut buf = vec![0u8; len];
    let mut rng = OsRng;
    rng.fill_bytes(&mut buf);
    buf.iter()
        .map(|b| SUFFIX_CHARSET[*b as usize % SUFFIX_CHARSET.len()] as char)
        .collect()
}
