//! printf-style template rendering.
//!
//! A directive is `%[flags][width][.precision]verb`. Every verb consumes one
//! value:
//! - `f`, `F`, `g`: numeric values are formatted with the precision
//!   (default 6 for `f`/`F`); anything else falls back to its `Display` form
//! - `q`: the `Display` form wrapped in double quotes
//! - any other verb (`s`, `v`, `d`, ..): the `Display` form, truncated to
//!   the precision if one is given
//!
//! Flags: `-` left-aligns within the width, `0` zero-pads numbers, `+`
//! forces a sign on numbers. `#` and space are accepted and ignored.
//!
//! Mismatches are rendered inline rather than reported as errors:
//! - missing value: `%!s(MISSING)`
//! - unused values: `%!(EXTRA a, b)`
//! - trailing `%` or directive without a verb: `%!(NOVERB)`

use std::fmt::{Display, Write};
use std::iter::Peekable;
use std::str::Chars;

/// A parsed `%...` directive.
#[derive(Debug, Default, PartialEq, Eq)]
struct Directive {
    left: bool,
    plus: bool,
    zero: bool,
    width: Option<usize>,
    precision: Option<usize>,
    verb: char,
}

/// Render `template` with `values` substituted for its verbs.
pub fn render(template: &str, values: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(template.len() + values.len() * 8);
    let mut remaining = values.iter();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        if chars.peek() == Some(&'%') {
            chars.next();
            out.push('%');
            continue;
        }

        let Some(directive) = parse_directive(&mut chars) else {
            out.push_str("%!(NOVERB)");
            continue;
        };

        match remaining.next() {
            Some(value) => out.push_str(&format_value(&directive, *value)),
            None => {
                let _ = write!(out, "%!{}(MISSING)", directive.verb);
            }
        }
    }

    let extra: Vec<String> = remaining.map(|v| v.to_string()).collect();
    if !extra.is_empty() {
        let _ = write!(out, "%!(EXTRA {})", extra.join(", "));
    }

    out
}

/// Concatenate values by their `Display` forms.
///
/// No separator is inserted between values, whatever their type; a prefix
/// such as `"[svc] "` carries its own trailing space. Callers wanting
/// `1 2` rather than `12` pass the space as a value or use a template.
pub fn concat(values: &[&dyn Display]) -> String {
    let mut out = String::new();
    for value in values {
        let _ = write!(out, "{}", value);
    }
    out
}

fn parse_directive(chars: &mut Peekable<Chars<'_>>) -> Option<Directive> {
    let mut directive = Directive::default();

    while let Some(&c) = chars.peek() {
        match c {
            '-' => directive.left = true,
            '+' => directive.plus = true,
            '0' => directive.zero = true,
            '#' | ' ' => {}
            _ => break,
        }
        chars.next();
    }

    directive.width = parse_number(chars);

    if chars.peek() == Some(&'.') {
        chars.next();
        directive.precision = Some(parse_number(chars).unwrap_or(0));
    }

    directive.verb = chars.next()?;
    Some(directive)
}

fn parse_number(chars: &mut Peekable<Chars<'_>>) -> Option<usize> {
    let mut number: Option<usize> = None;
    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
        chars.next();
        number = Some(number.unwrap_or(0).saturating_mul(10).saturating_add(digit as usize));
    }
    number
}

fn format_value(directive: &Directive, value: &dyn Display) -> String {
    let raw = value.to_string();
    let numeric = raw.parse::<f64>().ok();

    let mut body = match (directive.verb, numeric) {
        ('f' | 'F', Some(n)) => format!("{:.*}", directive.precision.unwrap_or(6), n),
        ('g', Some(n)) => match directive.precision {
            Some(p) => format!("{:.*}", p, n),
            None => raw,
        },
        (_, _) => match directive.precision {
            Some(p) => raw.chars().take(p).collect(),
            None => raw,
        },
    };

    if directive.verb == 'q' {
        body = format!("\"{}\"", body);
    }

    if directive.plus && numeric.is_some() && !body.starts_with(['-', '+']) {
        body.insert(0, '+');
    }

    pad(directive, body, numeric.is_some())
}

fn pad(directive: &Directive, body: String, numeric: bool) -> String {
    let width = directive.width.unwrap_or(0);
    let len = body.chars().count();
    if len >= width {
        return body;
    }

    let fill = width - len;
    if directive.left {
        format!("{}{}", body, " ".repeat(fill))
    } else if directive.zero && numeric {
        let sign_len = if body.starts_with(['-', '+']) { 1 } else { 0 };
        let (sign, digits) = body.split_at(sign_len);
        format!("{}{}{}", sign, "0".repeat(fill), digits)
    } else {
        format!("{}{}", " ".repeat(fill), body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_in_order() {
        let rendered = render("user %s has %d items", &[&"ana", &3]);
        assert_eq!(rendered, "user ana has 3 items");
    }

    #[test]
    fn test_render_quote_and_percent() {
        assert_eq!(render("%q", &[&"x"]), "\"x\"");
        assert_eq!(render("100%%", &[]), "100%");
    }

    #[test]
    fn test_render_mismatches() {
        assert_eq!(render("%s and %v", &[&1]), "1 and %!v(MISSING)");
        assert_eq!(render("only %s", &[&1, &2, &"three"]), "only 1%!(EXTRA 2, three)");
        assert_eq!(render("dangling %", &[]), "dangling %!(NOVERB)");
        assert_eq!(render("dangling %-5", &[&1]), "dangling %!(NOVERB)%!(EXTRA 1)");
    }

    #[test]
    fn test_render_precision() {
        assert_eq!(render("took %.2f ms", &[&3.14159]), "took 3.14 ms");
        assert_eq!(render("%f", &[&1.5]), "1.500000");
        assert_eq!(render("%.0f", &[&2.6]), "3");
        assert_eq!(render("%.3s", &[&"abcdef"]), "abc");
        assert_eq!(render("%.2f", &[&"n/a"]), "n/");
    }

    #[test]
    fn test_render_width_and_flags() {
        assert_eq!(render("[%-5s]", &[&"ab"]), "[ab   ]");
        assert_eq!(render("[%5s]", &[&"ab"]), "[   ab]");
        assert_eq!(render("[%05d]", &[&-42]), "[-0042]");
        assert_eq!(render("[%05s]", &[&"ab"]), "[   ab]");
        assert_eq!(render("[%8.3f]", &[&2.5]), "[   2.500]");
        assert_eq!(render("[%2s]", &[&"long"]), "[long]");
    }

    #[test]
    fn test_render_plus_flag() {
        assert_eq!(render("%+v|%s", &[&1, &"x"]), "+1|x");
        assert_eq!(render("%+d", &[&-3]), "-3");
        assert_eq!(render("%+s", &[&"word"]), "word");
    }

    #[test]
    fn test_render_prefixed_template() {
        assert_eq!(render("[P]%s", &[&"a"]), "[P]a");
    }

    #[test]
    fn test_concat() {
        assert_eq!(concat(&[&"[svc] ", &"started on port ", &8080]), "[svc] started on port 8080");
        assert_eq!(concat(&[]), "");
    }

    #[test]
    fn test_concat_inserts_no_separator() {
        assert_eq!(concat(&[&"[P] ", &1, &2]), "[P] 12");
        assert_eq!(concat(&[&"[P] ", &1, &" ", &2]), "[P] 1 2");
    }
}
