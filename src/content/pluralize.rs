//! English noun pluralization
//!
//! Rule-based: uncountables pass through, irregular singulars map to their
//! plurals, everything else goes through an ordered suffix rule list where
//! the last matching rule wins. The result keeps the casing of the input.

use regex::{Captures, Regex};
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

/// Suffix rules, lowest priority first
const PLURAL_RULES: &[(&str, &str)] = &[
    (r"(?i)s?$", "s"),
    (r"(?i)[^\x00-\x7F]$", "$0"),
    (r"(?i)([^aeiou]ese)$", "${1}"),
    (r"(?i)(ax|test)is$", "${1}es"),
    (r"(?i)(alias|[^aou]us|t[lm]as|gas|ris)$", "${1}es"),
    (r"(?i)(e[mn]u)s?$", "${1}s"),
    (r"(?i)([^l]ias|[aeiou]las|[ejzr]as|[iu]am)$", "${1}"),
    (
        r"(?i)(alumn|syllab|vir|radi|nucle|fung|cact|stimul|termin|bacill|foc|uter|loc|strat)(?:us|i)$",
        "${1}i",
    ),
    (r"(?i)(alumn|alg|vertebr)(?:a|ae)$", "${1}ae"),
    (r"(?i)(seraph|cherub)(?:im)?$", "${1}im"),
    (r"(?i)(her|at|gr)o$", "${1}oes"),
    (
        r"(?i)(agend|addend|millenni|dat|extrem|bacteri|desiderat|strat|candelabr|errat|ov|symposi|curricul|automat|quor)(?:a|um)$",
        "${1}a",
    ),
    (
        r"(?i)(apheli|hyperbat|periheli|asyndet|noumen|phenomen|criteri|organ|prolegomen|hedr|automat)(?:a|on)$",
        "${1}a",
    ),
    (r"(?i)sis$", "ses"),
    (r"(?i)(?:(kni|wi|li)fe|(ar|l|ea|eo|oa|hoo)f)$", "${1}${2}ves"),
    (r"(?i)([^aeiouy]|qu)y$", "${1}ies"),
    (r"(?i)([^ch][ieo][ln])ey$", "${1}ies"),
    (r"(?i)(x|ch|ss|sh|zz)$", "${1}es"),
    (r"(?i)(matr|cod|mur|sil|vert|ind|append)(?:ix|ex)$", "${1}ices"),
    (r"(?i)\b((?:tit)?m|l)(?:ice|ouse)$", "${1}ice"),
    (r"(?i)(pe)(?:rson|ople)$", "${1}ople"),
    (r"(?i)(child)(?:ren)?$", "${1}ren"),
    (r"(?i)eaux$", "$0"),
    (r"(?i)m[ae]n$", "men"),
    (r"(?i)^thou$", "you"),
    // uncountable suffixes
    (r"(?i)pok[eé]mon$", "$0"),
    (r"(?i)[^aeiou]ese$", "$0"),
    (r"(?i)deer$", "$0"),
    (r"(?i)fish$", "$0"),
    (r"(?i)measles$", "$0"),
    (r"(?i)o[iu]s$", "$0"),
    (r"(?i)pox$", "$0"),
    (r"(?i)sheep$", "$0"),
];

const IRREGULARS: &[(&str, &str)] = &[
    ("i", "we"),
    ("me", "us"),
    ("he", "they"),
    ("she", "they"),
    ("them", "them"),
    ("myself", "ourselves"),
    ("yourself", "yourselves"),
    ("itself", "themselves"),
    ("herself", "themselves"),
    ("himself", "themselves"),
    ("themself", "themselves"),
    ("is", "are"),
    ("was", "were"),
    ("has", "have"),
    ("this", "these"),
    ("that", "those"),
    ("echo", "echoes"),
    ("dingo", "dingoes"),
    ("volcano", "volcanoes"),
    ("tornado", "tornadoes"),
    ("torpedo", "torpedoes"),
    ("genus", "genera"),
    ("viscus", "viscera"),
    ("stigma", "stigmata"),
    ("stoma", "stomata"),
    ("dogma", "dogmata"),
    ("lemma", "lemmata"),
    ("schema", "schemata"),
    ("anathema", "anathemata"),
    ("ox", "oxen"),
    ("axe", "axes"),
    ("die", "dice"),
    ("yes", "yeses"),
    ("foot", "feet"),
    ("eave", "eaves"),
    ("goose", "geese"),
    ("tooth", "teeth"),
    ("quiz", "quizzes"),
    ("human", "humans"),
    ("proof", "proofs"),
    ("carve", "carves"),
    ("valve", "valves"),
    ("looey", "looies"),
    ("thief", "thieves"),
    ("groove", "grooves"),
    ("pickaxe", "pickaxes"),
    ("passerby", "passersby"),
];

const UNCOUNTABLES: &[&str] = &[
    "adulthood", "advice", "agenda", "aid", "aircraft", "alcohol", "ammo", "analytics", "anime",
    "athletics", "audio", "bison", "blood", "bream", "buffalo", "butter", "carp", "cash",
    "chassis", "chess", "clothing", "cod", "commerce", "cooperation", "corps", "debris",
    "diabetes", "digestion", "elk", "energy", "equipment", "excretion", "expertise", "firmware",
    "flounder", "fun", "gallows", "garbage", "graffiti", "hardware", "headquarters", "health",
    "herpes", "highjinks", "homework", "housework", "information", "jeans", "justice", "kudos",
    "labour", "literature", "machinery", "mackerel", "mail", "media", "mews", "moose", "music",
    "mud", "manga", "news", "only", "personnel", "pike", "plankton", "pliers", "police",
    "pollution", "premises", "rain", "research", "rice", "salmon", "scissors", "series",
    "sewage", "shambles", "shrimp", "software", "staff", "swine", "tennis", "traffic",
    "transportation", "trout", "tuna", "wealth", "welfare", "whiting", "wildebeest",
    "wildlife", "you",
];

static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    PLURAL_RULES
        .iter()
        .map(|(pattern, replacement)| Rule {
            pattern: Regex::new(pattern).expect("hardcoded plural rule is valid"),
            replacement,
        })
        .collect()
});

static SINGULAR_TO_PLURAL: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| IRREGULARS.iter().copied().collect());

static KNOWN_PLURALS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| IRREGULARS.iter().map(|(_, plural)| *plural).collect());

static UNCOUNTABLE: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| UNCOUNTABLES.iter().copied().collect());

/// Pluralize an English noun, keeping the input's casing
///
/// ```
/// use ost_admin::content::pluralize;
///
/// assert_eq!(pluralize("Post"), "Posts");
/// assert_eq!(pluralize("Docs"), "Docs");
/// assert_eq!(pluralize("category"), "categories");
/// ```
pub fn pluralize(word: &str) -> String {
    let token = word.to_lowercase();

    if KNOWN_PLURALS.contains(token.as_str()) {
        return restore_case(word, &token);
    }
    if let Some(plural) = SINGULAR_TO_PLURAL.get(token.as_str()) {
        return restore_case(word, plural);
    }
    if token.is_empty() || UNCOUNTABLE.contains(token.as_str()) {
        return word.to_string();
    }

    RULES
        .iter()
        .rev()
        .find(|rule| rule.pattern.is_match(word))
        .map_or_else(|| word.to_string(), |rule| apply_rule(word, rule))
}

fn apply_rule(word: &str, rule: &Rule) -> String {
    rule.pattern
        .replacen(word, 1, |caps: &Captures<'_>| {
            let mut expanded = String::new();
            caps.expand(rule.replacement, &mut expanded);

            let matched = &caps[0];
            if matched.is_empty() {
                // Empty suffix match: take the casing from the preceding char
                let start = caps.get(0).map_or(0, |m| m.start());
                let previous = word[..start].chars().last().map(String::from);
                return restore_case(previous.as_deref().unwrap_or_default(), &expanded);
            }
            restore_case(matched, &expanded)
        })
        .into_owned()
}

fn restore_case(word: &str, token: &str) -> String {
    if word == token {
        return token.to_string();
    }
    if word == word.to_lowercase() {
        return token.to_lowercase();
    }
    if word == word.to_uppercase() {
        return token.to_uppercase();
    }

    if word.chars().next().is_some_and(char::is_uppercase) {
        let mut token_chars = token.chars();
        return token_chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().chain(token_chars.as_str().to_lowercase().chars()).collect()
        });
    }
    token.to_lowercase()
}
