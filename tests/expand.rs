use std::collections::HashMap;

use propex::{Error, ParseError, expand};

fn properties() -> HashMap<String, String> {
    let mut properties = HashMap::new();
    properties.insert("name".to_string(), "propex".to_string());
    properties
}

#[test]
fn literal_text_is_preserved_verbatim() {
    let properties = properties();

    assert_eq!(expand("no placeholders here", &properties).unwrap(), "no placeholders here");
    assert_eq!(expand("", &properties).unwrap(), "");
    assert_eq!(expand("a lone $ is fine", &properties).unwrap(), "a lone $ is fine");
    assert_eq!(expand("} too", &properties).unwrap(), "} too");
}

#[test]
fn placeholders_are_replaced_in_place() {
    let properties = properties();

    assert_eq!(expand("hello ${name}!", &properties).unwrap(), "hello propex!");
    assert_eq!(expand("${1+1} and ${2*2}", &properties).unwrap(), "2 and 4");
    assert_eq!(expand("${'--'}${name}${'--'}", &properties).unwrap(), "--propex--");
}

#[test]
fn values_substitute_in_canonical_form() {
    let properties = properties();

    assert_eq!(expand("${1 = 1}", &properties).unwrap(), "True");
    assert_eq!(expand("${5.0/(2+8)}", &properties).unwrap(), "0.5");
    assert_eq!(expand("${convert::to-datetime('12/31/1999 01:23:34')}", &properties).unwrap(),
               "12/31/1999 01:23:34");
}

#[test]
fn unterminated_placeholder_is_an_error() {
    let properties = properties();

    let result = expand("text ${1+2", &properties);
    assert!(matches!(result,
                     Err(Error::Parse(ParseError::UnterminatedPlaceholder { offset: 5 }))));
}

#[test]
fn errors_inside_a_placeholder_abort_the_expansion() {
    let properties = properties();

    assert!(expand("ok so far ${5/0}", &properties).is_err());
    assert!(expand("${missing-prop}", &properties).is_err());
    assert!(expand("${1+}", &properties).is_err());
}

#[test]
fn empty_placeholder_is_an_error() {
    let properties = properties();

    assert!(expand("${}", &properties).is_err());
}
