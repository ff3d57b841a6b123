//! Container definition parsing.
//!
//! Parses the parameter text after an opening marker run:
//! `[tag.]class[#id] [extra-classes] [style-decls]`.

use crate::style::compile_style_shorthand;

/// Parsed parameters of a container opening line.
///
/// At least one of `class`, `id` and `style` is always present; a parameter
/// string providing none of them is rejected and the opening line falls
/// through to ordinary block handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerDefinition {
    /// Element tag name (`div` unless the primary selector carries one).
    pub tag: String,
    /// Space-joined class list from the selector region.
    pub class: Option<String>,
    /// Element id from the `#id` suffix of the primary selector.
    pub id: Option<String>,
    /// CSS text from the style region.
    pub style: Option<String>,
}

/// Parse a container parameter string.
///
/// The input splits on whitespace into a selector region and a style region,
/// divided at the first token containing a colon. The style region is taken
/// verbatim when it contains a literal semicolon anywhere (this is what
/// allows colon-bearing values such as URLs); otherwise the whole region is
/// compiled with [`compile_style_shorthand`]. The toggle is all-or-nothing:
/// mixing both styles in one region is not detected or corrected.
///
/// Returns `None` when the first token already carries a colon (style
/// without a class) or when class, id and style all come up empty.
#[must_use]
pub fn parse_container_definition(input: &str, default_tag: &str) -> Option<ContainerDefinition> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }

    let split = tokens.iter().position(|token| token.contains(':'));
    if split == Some(0) {
        return None;
    }
    let (selector, style_region) = match split {
        Some(at) => tokens.split_at(at),
        None => (tokens.as_slice(), &[] as &[&str]),
    };

    let style = if style_region.is_empty() {
        None
    } else {
        let joined = style_region.join(" ");
        if joined.contains(';') {
            Some(joined)
        } else {
            let compiled = compile_style_shorthand(&joined);
            (!compiled.is_empty()).then_some(compiled)
        }
    };

    let (tag, mut classes, id) = parse_selector(selector[0], default_tag);
    for extra in &selector[1..] {
        classes.push((*extra).to_owned());
    }
    classes.retain(|class| !class.is_empty());
    let class = (!classes.is_empty()).then(|| classes.join(" "));

    if class.is_none() && id.is_none() && style.is_none() {
        return None;
    }

    Some(ContainerDefinition {
        tag,
        class,
        id,
        style,
    })
}

/// Split the primary selector `[tag.]class[#id]` into its parts.
///
/// The `#id` suffix is extracted first; the remainder splits on the first
/// `.` into tag and class, defaulting the tag when there is no dot.
fn parse_selector(primary: &str, default_tag: &str) -> (String, Vec<String>, Option<String>) {
    let (rest, id) = match primary.find('#') {
        Some(hash) => {
            let id = &primary[hash + 1..];
            (&primary[..hash], (!id.is_empty()).then(|| id.to_owned()))
        }
        None => (primary, None),
    };

    let (tag, class) = match rest.find('.') {
        Some(dot) => (&rest[..dot], &rest[dot + 1..]),
        None => (default_tag, rest),
    };
    let tag = if tag.is_empty() { default_tag } else { tag };

    let mut classes = Vec::new();
    if !class.is_empty() {
        classes.push(class.to_owned());
    }
    (tag.to_owned(), classes, id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(input: &str) -> Option<ContainerDefinition> {
        parse_container_definition(input, "div")
    }

    #[test]
    fn test_class_only() {
        let def = parse(" note").unwrap();
        assert_eq!(def.tag, "div");
        assert_eq!(def.class.as_deref(), Some("note"));
        assert_eq!(def.id, None);
        assert_eq!(def.style, None);
    }

    #[test]
    fn test_tag_and_class() {
        let def = parse(" span.highlight").unwrap();
        assert_eq!(def.tag, "span");
        assert_eq!(def.class.as_deref(), Some("highlight"));
        assert_eq!(def.id, None);
        assert_eq!(def.style, None);
    }

    #[test]
    fn test_id_suffix() {
        let def = parse("box#intro").unwrap();
        assert_eq!(def.tag, "div");
        assert_eq!(def.class.as_deref(), Some("box"));
        assert_eq!(def.id.as_deref(), Some("intro"));
    }

    #[test]
    fn test_tag_class_and_id() {
        let def = parse("section.slide#first").unwrap();
        assert_eq!(def.tag, "section");
        assert_eq!(def.class.as_deref(), Some("slide"));
        assert_eq!(def.id.as_deref(), Some("first"));
    }

    #[test]
    fn test_extra_classes_appended() {
        let def = parse("box wide shaded").unwrap();
        assert_eq!(def.class.as_deref(), Some("box wide shaded"));
    }

    #[test]
    fn test_shorthand_style_region() {
        let def = parse("box left:240px top:90px").unwrap();
        assert_eq!(def.class.as_deref(), Some("box"));
        assert_eq!(def.style.as_deref(), Some("left: 240px; top: 90px"));
    }

    #[test]
    fn test_semicolon_region_kept_verbatim() {
        let def = parse(" box background:url(https://x/y.png);").unwrap();
        assert_eq!(def.class.as_deref(), Some("box"));
        assert_eq!(def.style.as_deref(), Some("background:url(https://x/y.png);"));
    }

    #[test]
    fn test_style_without_class_rejected() {
        assert_eq!(parse("left:240px"), None);
    }

    #[test]
    fn test_empty_input_rejected() {
        assert_eq!(parse(""), None);
        assert_eq!(parse("   "), None);
    }

    #[test]
    fn test_id_only_selector() {
        let def = parse("#intro").unwrap();
        assert_eq!(def.tag, "div");
        assert_eq!(def.class, None);
        assert_eq!(def.id.as_deref(), Some("intro"));
    }

    #[test]
    fn test_bare_dot_rejected() {
        // "." yields neither tag nor class nor id nor style.
        assert_eq!(parse("."), None);
    }

    #[test]
    fn test_multi_word_shorthand_value() {
        let def = parse("box border:1px solid red").unwrap();
        assert_eq!(def.style.as_deref(), Some("border: 1px solid red"));
    }
}
