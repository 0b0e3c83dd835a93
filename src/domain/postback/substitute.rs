//! Textual macro substitution over postback URL templates.

use std::collections::BTreeMap;
use std::collections::HashSet;

use crate::domain::entities::Token;
use crate::domain::postback::PostbackMacro;

/// Rewrites an advertiser-supplied URL template.
///
/// Every recognized `{name}` placeholder is replaced: built-in macros from
/// `macros`, then custom-token names from `tokens` (first match wins when a
/// token name repeats). A placeholder matching neither is left verbatim so
/// unrelated template syntax survives unchanged; an unresolved macro is
/// never an error.
///
/// Substitution is purely textual; nested or overlapping placeholders are
/// not interpreted.
pub fn substitute(
    template: &str,
    macros: &BTreeMap<PostbackMacro, String>,
    tokens: &[Token],
) -> String {
    let mut result = template.to_string();

    for (name, value) in macros {
        result = result.replace(name.placeholder(), value);
    }

    let mut seen = HashSet::new();
    for token in tokens {
        if !seen.insert(token.name.as_str()) {
            continue;
        }
        let placeholder = format!("{{{}}}", token.name);
        result = result.replace(&placeholder, &token.value);
    }

    result
}
