//! Style shorthand compiler.
//!
//! Turns a space-separated `prop:value` sequence (no semicolons) into
//! semicolon-joined CSS text: `left:240px top:90px` becomes
//! `left: 240px; top: 90px`.

/// Compile a space-separated style shorthand into CSS declaration text.
///
/// Every colon is padded with spaces and the input is split on whitespace.
/// A bare colon token is the sole signal of a property boundary: the token
/// immediately preceding it becomes the property name. When a property is
/// already open, the last accumulated value token is reclassified as the
/// next property's name and the remaining tokens finish the open property.
/// This positional look-back is what allows multi-word values such as
/// `border:1px solid red` without an explicit terminator.
///
/// A leading colon captures no property; a trailing property that is never
/// followed by a colon is dropped silently. Blank input yields `""`.
#[must_use]
pub fn compile_style_shorthand(input: &str) -> String {
    let padded = input.replace(':', " : ");
    let mut declarations: Vec<String> = Vec::new();
    let mut property: Option<String> = None;
    let mut values: Vec<&str> = Vec::new();

    for token in padded.split_whitespace() {
        if token == ":" {
            if property.is_none() {
                // The token just before the colon is the first property name.
                property = values.pop().map(str::to_owned);
                values.clear();
            } else if let Some(next_property) = values.pop() {
                if let Some(finished) = property.take()
                    && !values.is_empty()
                {
                    declarations.push(format!("{finished}: {}", values.join(" ")));
                }
                property = Some(next_property.to_owned());
                values.clear();
            }
            // A colon with an open property and no accumulated value is noise.
        } else {
            values.push(token);
        }
    }

    if let Some(property) = property
        && !values.is_empty()
    {
        declarations.push(format!("{property}: {}", values.join(" ")));
    }

    declarations.join("; ")
}
