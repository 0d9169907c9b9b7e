use once_cell::sync::Lazy;
use rand::distributions::Alphanumeric;
use rand::Rng;
use regex::Regex;

const RANDOM_SLUG_LEN: usize = 10;

static WHITESPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));
static NON_SLUG_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9-]+").expect("valid regex"));
static HYPHEN_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"-{2,}").expect("valid regex"));

/// Reduce arbitrary user text to a URL-safe slug: lowercase, whitespace
/// runs collapsed to single hyphens, everything outside `[a-z0-9-]`
/// stripped, hyphen runs collapsed, edge hyphens trimmed. May return an
/// empty string; callers fall back to another candidate when it does.
pub fn sanitize_slug(input: &str) -> String {
    let lowered = input.trim().to_lowercase();
    let hyphened = WHITESPACE_RUNS.replace_all(&lowered, "-");
    let stripped = NON_SLUG_CHARS.replace_all(&hyphened, "");
    let collapsed = HYPHEN_RUNS.replace_all(&stripped, "-");
    collapsed.trim_matches('-').to_string()
}

/// Random fallback token for documents whose name sanitizes to nothing.
pub fn random_slug() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(RANDOM_SLUG_LEN)
        .map(char::from)
        .collect::<String>()
        .to_lowercase()
}
