use crate::term::Term;

/// Render `term` in the notation accepted by [`crate::parse_term`].
///
/// Only finite numbers and identifier-shaped symbols read back. Non-finite numbers print as
/// `#inf`, `#-inf` and `#nan`, which the parser rejects; symbols are printed verbatim, so a
/// name such as `x-1` does not parse back either.
pub fn pretty(term: &Term) -> String {
    fn pp(out: &mut String, term: &Term) {
        match term {
            Term::Number(value) => out.push_str(&show_number(*value)),
            Term::Variable(symbol) => out.push_str(symbol.name()),
            Term::Composite(c) => {
                out.push('(');
                out.push_str(c.op().symbol());
                for operand in c.operands() {
                    out.push(' ');
                    pp(out, operand);
                }
                out.push(')');
            }
            Term::Wrapper(items) => {
                out.push('{');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push(' ');
                    }
                    pp(out, item);
                }
                out.push('}');
            }
        }
    }

    let mut out = String::new();
    pp(&mut out, term);
    out
}

fn show_number(value: f64) -> String {
    if value.is_nan() {
        "#nan".to_string()
    } else if value == f64::INFINITY {
        "#inf".to_string()
    } else if value == f64::NEG_INFINITY {
        "#-inf".to_string()
    } else {
        value.to_string()
    }
}
