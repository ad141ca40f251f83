use std::collections::HashMap;

use propex::{check_syntax, expand};

fn properties() -> HashMap<String, String> {
    let mut properties = HashMap::new();
    properties.insert("prop1".to_string(), "asdf".to_string());
    properties
}

/// Evaluates `expression` through `${...}` expansion, the way the embedding
/// build system does, and compares the canonical string result.
fn assert_expression(expression: &str, expected: &str) {
    let properties = properties();
    match expand(&format!("${{{expression}}}"), &properties) {
        Ok(value) => assert_eq!(value, expected, "{expression}"),
        Err(e) => panic!("'{expression}' failed: {e}"),
    }
}

fn assert_failure(expression: &str) {
    let properties = properties();
    if let Ok(value) = expand(&format!("${{{expression}}}"), &properties) {
        panic!("'{expression}' succeeded but was expected to fail. The returned value was '{value}'");
    }
}

#[test]
fn core_operations() {
    assert_expression("1+2", "3");
    assert_expression("1+2+3", "6");
    assert_expression("1+2*3", "7");
    assert_expression("2*1*3", "6");
    assert_expression("1/2+3", "3");
    assert_expression("5.0/(2+8)", "0.5");
    assert_expression("((((1))))", "1");
    assert_expression("((((1+2))))", "3");
    assert_expression("((((1+2)+(2+1))))", "6");
    assert_expression("((((1+2)/(2+1))))", "1");
    assert_expression("-1", "-1");
    assert_expression("--1", "1");
    assert_expression("10 % 3", "1");
    assert_expression("10 % 3 % 5", "1");
    assert_expression("-1 = 1-2", "True");
    assert_expression("--1.0 = 1.0", "True");
    assert_expression("1 <> 1", "False");
    assert_expression("1 = 2", "False");
    assert_expression("10.0 - 1.0 >= 8.9", "True");
    assert_expression("10.0 + 1 <= 11.1", "True");
    assert_expression("1 * 1.0 = 1.0", "True");
    assert_failure("1.aaaa"); // fractional part expected
    assert_failure("(1 1)");
    assert_failure("aaaa::1");
    assert_failure("aaaa::bbbb 1");
}

#[test]
fn core_operation_failures() {
    assert_failure("1+aaaa");
    assert_failure("1+");
    assert_failure("*3");
    assert_failure("2*/1*3");
    assert_failure("1//2+3");
    assert_failure("convert::todouble(5)/(2+8)");
    assert_failure("convert::to-double(1/2+3");
    assert_failure("-'aaa'");
    assert_failure("true + true");
    assert_failure("true - true");
    assert_failure("true * true");
    assert_failure("true / true");
    assert_failure("true % true");
    assert_failure("((((1)))");
    assert_failure("((1+2))))");
    assert_failure("((((1+2)+(2+1)))");
    assert_failure("5/0");
    assert_failure("5%0");
    assert_failure("5.0/0");
    assert_failure("5.0%0.0");
}

#[test]
fn integer_division_truncates_toward_zero() {
    assert_expression("7/2", "3");
    assert_expression("-7/2", "-3");
    assert_expression("7/2*2 + 7%2", "7");
    assert_expression("-7/2*2 + -7%2", "-7");
}

#[test]
fn integer_overflow_is_an_error() {
    assert_expression("9223372036854775807", "9223372036854775807");
    assert_failure("9223372036854775807+1");
    assert_failure("9223372036854775808"); // too large to even lex
    assert_failure("-(-9223372036854775807-1)");
}

#[test]
fn relational_operators() {
    assert_expression("'a' = 'a'", "True");
    assert_expression("'a' = 'b'", "False");
    assert_expression("'a' <> 'a'", "False");
    assert_expression("'a' <> 'b'", "True");
    assert_expression("'a' + 'b' = 'ab'", "True");
    assert_expression("1 = 1", "True");
    assert_expression("1 < 2", "True");
    assert_expression("1 > 2", "False");
    assert_expression("2 < 1", "False");
    assert_expression("2 > 1", "True");
    assert_expression("2 <= 1", "False");
    assert_expression("2 >= 1", "True");
    assert_expression("1 <> 2", "True");
    assert_expression("1.0 = 1.0", "True");
    assert_expression("1.0 <> 1.0", "False");
    assert_expression("true", "True");
    assert_expression("false", "False");
    assert_expression("true==true", "True");
    assert_expression("true==false", "False");
    assert_expression("true<>false", "True");
    assert_expression("true<>true", "False");
    assert_expression("'a' < 'b'", "True");
    assert_expression("'ab' >= 'aa'", "True");
}

#[test]
fn cross_kind_comparisons_fail() {
    assert_failure("'1' = 1");
    assert_failure("true = 1");
    assert_failure("true > false");
    assert_failure("'a' < 1");
}

#[test]
fn logical_operators() {
    assert_expression("true or false or false", "True");
    assert_expression("false or false or false", "False");
    assert_expression("false or true", "True");
    assert_expression("true and false", "False");
    assert_expression("true and true and false", "False");
    assert_expression("true and true and true", "True");
    assert_expression("false and true and true", "False");
    assert_expression("not true", "False");
    assert_expression("not false", "True");
    assert_expression("not (1=1)", "False");
    assert_expression("true or not (1=1)", "True");
    assert_expression("true or not (--1=1)", "True");
    assert_failure("1 and true");
    assert_failure("not 5");
}

#[test]
fn and_or_do_not_short_circuit() {
    // The language is side-effect free, so the only observable difference is
    // error propagation from the second operand.
    assert_failure("false and (1/0 = 1)");
    assert_failure("true or (1/0 = 1)");
}

#[test]
fn conversion_functions() {
    assert_expression("convert::to-double(5)/(2+8)", "0.5");
    assert_expression("convert::to-double(1)/2+3", "3.5");
    assert_expression("convert::to-datetime('12/31/1999 01:23:34')", "12/31/1999 01:23:34");
    assert_expression("convert::to-datetime(convert::to-datetime('12/31/1999 01:23:34'))",
                      "12/31/1999 01:23:34");
    assert_failure("convert::to-int(datetime::now())");
    assert_failure("convert::to-double('aaaaaaaaa')");
    assert_failure("convert::to-datetime(1)");
    assert_failure("convert::to-boolean(1)");
    assert_expression("convert::to-boolean('True')", "True");
    assert_expression("convert::to-boolean('true')", "True");
    assert_expression("convert::to-boolean('False')", "False");
    assert_expression("convert::to-boolean('false')", "False");
    assert_failure("convert::to-boolean('aaafalse')");
    assert_expression("convert::to-string(false)", "False");
    assert_expression("convert::to-string(1)", "1");
    assert_expression("convert::to-int('123'+'45')", "12345");
    assert_failure("convert::to-int(1.5)");
    assert_expression("convert::to-int(2.0)", "2");
}

#[test]
fn string_functions() {
    assert_expression("string::get-length('')", "0");
    assert_expression("string::get-length('')=0", "True");
    assert_expression("string::get-length('')=1", "False");
    assert_expression("string::get-length('test')", "4");
    assert_expression("string::get-length('test')=4", "True");
    assert_expression("string::get-length('test')=5", "False");
    assert_expression("string::get-length(prop1)", "4");
    assert_expression("string::get-length('d''Artagnan')", "10");
    assert_expression("string::get-length('d''Artagnan')=10", "True");
    assert_expression("string::get-length('d''Artagnan')=11", "False");
    assert_expression("string::substring('abcde',1,2)='bc'", "True");
    assert_expression("string::trim('  ab  ')='ab'", "True");
    assert_expression("string::trim-start('  ab  ')='ab  '", "True");
    assert_expression("string::trim-end('  ab  ')='  ab'", "True");
    assert_expression("string::pad-left('ab',5,'.')='...ab'", "True");
    assert_expression("string::pad-right('ab',5,'.')='ab...'", "True");
    assert_expression("string::pad-left('ab',1,'.')", "ab");
    assert_expression("string::index-of('abc','c')=2", "True");
    assert_expression("string::index-of('abc','d')=-1", "True");
    assert_failure("string::substring('abcde',4,2)");
    assert_failure("string::substring('abcde',-1,2)");
    assert_failure("string::pad-left('ab',5,'..')");
    assert_failure("string::trim(datetime::now())");
}

#[test]
fn string_concatenation_is_associative() {
    assert_expression("('a'+'b')+'c' = 'a'+('b'+'c')", "True");
    assert_expression("'a'+'b'+'c'", "abc");
}

#[test]
fn datetime_functions() {
    assert_failure("datetime::now(111)");
    assert_failure("datetime::add()");
    assert_failure("datetime::now(");
    assert_expression("datetime::add(convert::to-datetime('12/31/1999 23:59:59'), 1)",
                      "01/01/2000 00:00:00");
    assert_expression("convert::to-datetime('01/01/2000') < datetime::now()", "True");
    assert_expression("convert::to-datetime('01/01/2000') = convert::to-datetime('2000-01-01')",
                      "True");
}

#[test]
fn math_functions() {
    assert_expression("math::round(0.1)", "0");
    assert_expression("math::round(0.7)", "1");
    assert_expression("math::floor(0.1)", "0");
    assert_expression("math::floor(0.7)", "0");
    assert_expression("math::ceiling(0.1)", "1");
    assert_expression("math::ceiling(0.7)", "1");
    assert_expression("math::abs(1)", "1");
    assert_expression("math::abs(-1)", "1");
    assert_failure("math::abs('a')");
    assert_failure("math::round()");
}

#[test]
fn conditional() {
    assert_expression("if(true,1,2)", "1");
    assert_expression("if(true,'a','b')", "a");
    assert_expression("if(false,'a','b')", "b");
    assert_failure("if(1,2,3)");
    assert_failure("if(true 2,3)");
    assert_failure("if(true,2,3 3");
    assert_failure("if(true,2 2,3)");
    assert_failure("if [ true, 1, 0 ]");
    assert_failure("if(true,1)");
    assert_failure("if(true,1,2,3)");
}

#[test]
fn conditional_branches_are_lazy() {
    assert_expression("if(true, 1, 1/0)", "1");
    assert_expression("if(false, 1/0, 2)", "2");
}

#[test]
fn file_functions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("present.txt");
    std::fs::write(&path, "contents").unwrap();

    let present = path.display().to_string();
    let missing = dir.path().join("i_am_not_there.txt").display().to_string();

    assert_expression(&format!("file::exists('{present}')"), "True");
    assert_expression(&format!("file::exists('{missing}')"), "False");
    assert_expression(&format!("file::get-last-write-time('{present}') <= datetime::now()"),
                      "True");
    assert_failure(&format!("file::get-last-write-time('{missing}')"));
}

#[test]
fn directory_functions() {
    let dir = tempfile::tempdir().unwrap();
    let present = dir.path().display().to_string();
    let missing = dir.path().join("i_am_not_there").display().to_string();

    assert_expression(&format!("directory::exists('{present}')"), "True");
    assert_expression(&format!("directory::exists('{missing}')"), "False");
}

#[test]
fn property_functions() {
    assert_expression("property::get-value('prop1')", "asdf");
    assert_expression("property::exists('prop1')", "True");
    assert_expression("property::exists('prop1a')", "False");
    assert_expression("prop1", "asdf");
    assert_expression("prop1 + '!'", "asdf!");
    assert_failure("no-such-prop");
    assert_failure("property::get-value('no-such-prop')");
}

#[test]
fn properties_are_strings_until_converted() {
    // Raw property text never becomes a number on its own.
    let mut properties = properties();
    properties.insert("count".to_string(), "3".to_string());

    assert!(expand("${count + 1}", &properties).is_err());
    assert_eq!(expand("${convert::to-int(count) + 1}", &properties).unwrap(), "4");
}

#[test]
fn syntax_check_without_evaluation() {
    assert!(check_syntax("1+2*3").is_ok());
    assert!(check_syntax("5/0").is_ok());
    assert!(check_syntax("no-such-prop = 'x'").is_ok());
    assert!(check_syntax("convert::to-boolean('aaafalse')").is_ok());
    assert!(check_syntax("1+2*3 1").is_err());
    assert!(check_syntax("1+2*datetime::now(").is_err());
    assert!(check_syntax("1 1").is_err());
    assert!(check_syntax("datetime::now(111)").is_err());
    assert!(check_syntax("aaaa::bbbb(1)").is_err());
}
