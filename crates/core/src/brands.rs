//! Brand classifier.
//!
//! Maps a free-text project name ("Full Correction — Porsche 911 GT3",
//! "Track Day Prep (BMW)", "M340i Paint Enhancement") to zero or one known
//! vehicle brand label. Pure function of the name string; absence of a match
//! is a valid outcome, never an error.

use std::sync::LazyLock;

use regex::Regex;

/// A registry entry: canonical display label plus the lowercased spelling
/// variants that match it.
struct Brand {
    label: &'static str,
    patterns: &'static [&'static str],
}

/// Fixed brand registry.
///
/// Iteration order is load-bearing: when a name could contain more than one
/// brand substring, the first entry in this list wins. "Range Rover" sits
/// before "Land Rover" so composite names resolve to the more specific
/// label. Preserve the order when adding entries.
const BRAND_REGISTRY: &[Brand] = &[
    Brand { label: "Rolls Royce", patterns: &["rolls royce", "rolls-royce"] },
    Brand { label: "Range Rover", patterns: &["range rover"] },
    Brand { label: "Land Rover", patterns: &["land rover"] },
    Brand { label: "Aston Martin", patterns: &["aston martin"] },
    Brand { label: "Alfa Romeo", patterns: &["alfa romeo"] },
    Brand { label: "Mercedes", patterns: &["mercedes"] },
    Brand { label: "BMW", patterns: &["bmw"] },
    Brand { label: "Audi", patterns: &["audi"] },
    Brand { label: "Porsche", patterns: &["porsche"] },
    Brand { label: "Ferrari", patterns: &["ferrari"] },
    Brand { label: "Lamborghini", patterns: &["lamborghini"] },
    Brand { label: "McLaren", patterns: &["mclaren"] },
    Brand { label: "Bentley", patterns: &["bentley"] },
    Brand { label: "Maserati", patterns: &["maserati"] },
    Brand { label: "Jaguar", patterns: &["jaguar"] },
    Brand { label: "Tesla", patterns: &["tesla"] },
    Brand { label: "Lotus", patterns: &["lotus"] },
    Brand { label: "Mini", patterns: &["mini"] },
    Brand { label: "Volkswagen", patterns: &["volkswagen", "vw "] },
    Brand { label: "Ford", patterns: &["ford"] },
    Brand { label: "Nissan", patterns: &["nissan"] },
    Brand { label: "Toyota", patterns: &["toyota"] },
    Brand { label: "Honda", patterns: &["honda"] },
];

/// Parenthetical hint, e.g. `"Track Day Prep (BMW)"`.
static PAREN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^)]+)\)").expect("valid regex"));

/// BMW model code anywhere in the name: `M` + 3-4 digits + optional trailing
/// letter, e.g. `M340i`, `M550d`.
static M_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bM\d{3,4}[A-Za-z]?\b").expect("valid regex"));

/// BMW M series at the start of the name: `M3`, `M5 Competition`.
static M_SERIES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^M[1-9]\b").expect("valid regex"));

/// Classify a project name against the brand registry.
///
/// Priority order:
/// 1. A parenthetical hint matched against the registry (substring in either
///    direction, case-insensitive) wins over everything else in the name.
/// 2. A BMW model-code pattern classifies as BMW even when "BMW" is absent.
/// 3. First registry entry contained in the full name, in registry order.
///
/// A raw "Land Rover" match is promoted to "Range Rover" when the name also
/// contains "Range Rover".
pub fn classify(name: &str) -> Option<&'static str> {
    if let Some(caps) = PAREN_RE.captures(name) {
        let hint = caps[1].trim().to_lowercase();
        if !hint.is_empty() {
            if let Some(label) = match_registry(&hint, true) {
                return Some(promote_land_rover(label, name));
            }
        }
    }

    if M_CODE_RE.is_match(name) || M_SERIES_RE.is_match(name) {
        return Some("BMW");
    }

    match_registry(&name.to_lowercase(), false).map(|label| promote_land_rover(label, name))
}

/// Scan the registry in order for the first matching entry.
///
/// `bidirectional` additionally accepts the text being contained in the
/// pattern, so a truncated hint like `(Rolls)` still resolves.
fn match_registry(text: &str, bidirectional: bool) -> Option<&'static str> {
    for brand in BRAND_REGISTRY {
        for pattern in brand.patterns {
            if text.contains(pattern) || (bidirectional && pattern.contains(text)) {
                return Some(brand.label);
            }
        }
    }
    None
}

fn promote_land_rover(label: &'static str, name: &str) -> &'static str {
    if label == "Land Rover" && name.to_lowercase().contains("range rover") {
        "Range Rover"
    } else {
        label
    }
}

/// Canonical labels in registry order, for callers that need the full set.
pub fn registry_labels() -> impl Iterator<Item = &'static str> {
    BRAND_REGISTRY.iter().map(|b| b.label)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
