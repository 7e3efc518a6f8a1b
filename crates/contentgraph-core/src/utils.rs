//! Case conversion and English inflection for generated names.
//!
//! Input words are split on `_`, `-`, `.`, whitespace, and camel-case
//! boundaries, so `blog_post`, `blog-post`, `blogPost` and `BlogPost` all
//! produce the same output.

/// Byte spans of the words in `s`.
fn word_spans(s: &str) -> Vec<(usize, usize)> {
    let chars: Vec<(usize, char)> = s.char_indices().collect();
    let mut spans = Vec::new();
    let mut start: Option<usize> = None;

    for (i, &(idx, c)) in chars.iter().enumerate() {
        if !c.is_ascii_alphanumeric() {
            if let Some(begin) = start.take() {
                spans.push((begin, idx));
            }
            continue;
        }

        let Some(begin) = start else {
            start = Some(idx);
            continue;
        };

        let prev = chars[i - 1].1;
        let next = chars.get(i + 1).map(|&(_, n)| n);
        // fooBar | foo2Bar | HTMLParser
        let boundary = c.is_ascii_uppercase()
            && (prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next.is_some_and(|n| n.is_ascii_lowercase())));
        if boundary {
            spans.push((begin, idx));
            start = Some(idx);
        }
    }

    if let Some(begin) = start {
        spans.push((begin, s.len()));
    }
    spans
}

fn words(s: &str) -> impl Iterator<Item = &str> {
    word_spans(s).into_iter().map(move |(a, b)| &s[a..b])
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(word.len());
            out.push(first.to_ascii_uppercase());
            out.extend(chars.map(|c| c.to_ascii_lowercase()));
            out
        }
        None => String::new(),
    }
}

/// Convert any supported casing to PascalCase.
///
/// # Examples
/// ```
/// use contentgraph_core::utils::to_pascal_case;
/// assert_eq!(to_pascal_case("blog_post"), "BlogPost");
/// assert_eq!(to_pascal_case("relatedArticles"), "RelatedArticles");
/// assert_eq!(to_pascal_case("home-page"), "HomePage");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    words(s).map(capitalize).collect()
}

/// Convert any supported casing to camelCase.
///
/// # Examples
/// ```
/// use contentgraph_core::utils::to_camel_case;
/// assert_eq!(to_camel_case("Blog Post"), "blogPost");
/// assert_eq!(to_camel_case("home-page"), "homePage");
/// ```
pub fn to_camel_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for (i, word) in words(s).enumerate() {
        if i == 0 {
            out.push_str(&word.to_ascii_lowercase());
        } else {
            out.push_str(&capitalize(word));
        }
    }
    out
}

/// Convert any supported casing to snake_case.
pub fn to_snake_case(s: &str) -> String {
    words(s)
        .map(|w| w.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// Convert any supported casing to UPPER_SNAKE_CASE.
///
/// # Examples
/// ```
/// use contentgraph_core::utils::to_upper_snake_case;
/// assert_eq!(to_upper_snake_case("blogPost"), "BLOG_POST");
/// ```
pub fn to_upper_snake_case(s: &str) -> String {
    words(s)
        .map(|w| w.to_ascii_uppercase())
        .collect::<Vec<_>>()
        .join("_")
}

// ============================================================================
// Inflection
// ============================================================================

const UNCOUNTABLE: &[&str] = &[
    "data",
    "equipment",
    "information",
    "media",
    "metadata",
    "money",
    "news",
    "rice",
    "series",
    "seo",
    "sheep",
    "species",
];

/// (singular, plural)
const IRREGULAR: &[(&str, &str)] = &[
    ("child", "children"),
    ("foot", "feet"),
    ("goose", "geese"),
    ("man", "men"),
    ("mouse", "mice"),
    ("movie", "movies"),
    ("ox", "oxen"),
    ("person", "people"),
    ("tooth", "teeth"),
    ("woman", "women"),
];

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Apply the case shape of `original` to lowercase `inflected`.
fn match_case(original: &str, inflected: &str) -> String {
    let has_lower = original.chars().any(|c| c.is_ascii_lowercase());
    if !has_lower && original.len() > 1 {
        return inflected.to_ascii_uppercase();
    }
    if original.starts_with(|c: char| c.is_ascii_uppercase()) {
        return capitalize(inflected);
    }
    inflected.to_string()
}

/// Inflect the last word of `s`, keeping the prefix and trailing text as-is.
fn inflect_last_word(s: &str, inflect: fn(&str) -> String) -> String {
    let Some(&(a, b)) = word_spans(s).last() else {
        return s.to_string();
    };
    let word = &s[a..b];
    let inflected = inflect(&word.to_ascii_lowercase());
    format!("{}{}{}", &s[..a], match_case(word, &inflected), &s[b..])
}

fn singular_word(word: &str) -> String {
    if UNCOUNTABLE.contains(&word) {
        return word.to_string();
    }
    if let Some((singular, _)) = IRREGULAR.iter().find(|(_, plural)| *plural == word) {
        return singular.to_string();
    }
    if let Some(stem) = word.strip_suffix("ies")
        && !stem.is_empty()
    {
        return format!("{stem}y");
    }
    for suffix in ["sses", "shes", "ches", "xes", "zzes", "uses"] {
        if word.ends_with(suffix) {
            return word[..word.len() - 2].to_string();
        }
    }
    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return word.to_string();
    }
    match word.strip_suffix('s') {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => word.to_string(),
    }
}

fn plural_word(word: &str) -> String {
    if UNCOUNTABLE.contains(&word) {
        return word.to_string();
    }
    if let Some((_, plural)) = IRREGULAR.iter().find(|(singular, _)| *singular == word) {
        return plural.to_string();
    }
    if let Some(stem) = word.strip_suffix('y')
        && stem.chars().last().is_some_and(|c| !is_vowel(c))
    {
        return format!("{stem}ies");
    }
    let sibilant = ["s", "x", "z", "ch", "sh"]
        .iter()
        .any(|suffix| word.ends_with(suffix));
    if sibilant {
        return format!("{word}es");
    }
    format!("{word}s")
}

/// Rule-based English singular of the last word.
///
/// # Examples
/// ```
/// use contentgraph_core::utils::singularize;
/// assert_eq!(singularize("categories"), "category");
/// assert_eq!(singularize("blog_posts"), "blog_post");
/// assert_eq!(singularize("status"), "status");
/// ```
pub fn singularize(s: &str) -> String {
    inflect_last_word(s, singular_word)
}

/// Rule-based English plural of the last word.
///
/// # Examples
/// ```
/// use contentgraph_core::utils::pluralize;
/// assert_eq!(pluralize("category"), "categories");
/// assert_eq!(pluralize("homePage"), "homePages");
/// assert_eq!(pluralize("address"), "addresses");
/// ```
pub fn pluralize(s: &str) -> String {
    inflect_last_word(s, plural_word)
}
