/// Convert `snake_case`, `kebab-case` or spaced identifiers to `lowerCamelCase`.
///
/// Already camel-cased input is returned as is, apart from lowering the first
/// character.
pub fn camelize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut upper_next = false;
    for ch in s.chars() {
        if ch == '_' || ch == '-' || ch.is_whitespace() {
            upper_next = !out.is_empty();
            continue;
        }
        if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else if out.is_empty() {
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camelize() {
        assert_eq!(camelize("item_types"), "itemTypes");
        assert_eq!(camelize("deployment-environments"), "deploymentEnvironments");
        assert_eq!(camelize("uploadable_bytes"), "uploadableBytes");
        assert_eq!(camelize("apiCalls"), "apiCalls");
        assert_eq!(camelize("Users"), "users");
        assert_eq!(camelize("_leading"), "leading");
        assert_eq!(camelize("a__b"), "aB");
    }
}
