use crate::{
    error::{Error, ParseError},
    interpreter::evaluator::core::PropertyStore,
};

/// Expands every `${...}` placeholder in a piece of text.
///
/// Each region's inner text is evaluated as a property expression and the
/// resulting value, in its canonical string form, is spliced back in place
/// of the placeholder. Literal text outside placeholders is preserved
/// verbatim. A region ends at the first `}` after its `${`.
///
/// # Parameters
/// - `text`: The surrounding text, e.g. the value of a build-file attribute.
/// - `properties`: The property store expressions may reference.
///
/// # Returns
/// The text with all placeholders replaced.
///
/// # Errors
/// Any lexical, structural or evaluation error inside a placeholder aborts
/// the whole expansion, as does a `${` without a closing `}`. Offsets inside
/// an expression error are relative to that expression's text.
///
/// # Example
/// ```
/// use std::collections::HashMap;
///
/// use propex::expand;
///
/// let mut properties = HashMap::new();
/// properties.insert("project-name".to_string(), "propex".to_string());
///
/// let expanded = expand("building ${project-name} rev ${4*10+2}", &properties).unwrap();
/// assert_eq!(expanded, "building propex rev 42");
/// ```
pub fn expand(text: &str, properties: &dyn PropertyStore) -> Result<String, Error> {
    let mut output = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find("${") {
        output.push_str(&rest[..start]);

        let inner = &rest[start + 2..];
        let Some(end) = inner.find('}') else {
            let offset = text.len() - rest.len() + start;
            return Err(ParseError::UnterminatedPlaceholder { offset }.into());
        };

        let expression = &inner[..end];
        let value = crate::evaluate(expression, properties)?;
        log::debug!("expanded '{expression}' to '{value}'");

        output.push_str(&value.to_string());
        rest = &inner[end + 1..];
    }

    output.push_str(rest);
    Ok(output)
}
