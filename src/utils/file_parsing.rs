#[inline]
pub fn strip_surrounding_quotes(s: &str) -> &str {
    let b = s.as_bytes();
    if b.len() >= 2 {
        let first = b[0];
        let last = b[b.len() - 1];
        if (first == b'\'' && last == b'\'') || (first == b'"' && last == b'"') {
            return &s[1..s.len() - 1];
        }
    }
    s
}

pub fn split_csv_preserving_quotes(line: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut cur = String::new();
    let mut in_quotes: Option<char> = None;

    for ch in line.chars() {
        match in_quotes {
            Some(q) => {
                if ch == q {
                    in_quotes = None;
                }
                cur.push(ch);
            }
            None => {
                if ch == '"' || ch == '\'' {
                    in_quotes = Some(ch);
                    cur.push(ch);
                } else if ch == ',' {
                    out.push(cur.trim().to_string());
                    cur.clear();
                } else {
                    cur.push(ch);
                }
            }
        }
    }
    if !cur.trim().is_empty() || !out.is_empty() {
        out.push(cur.trim().to_string());
    }
    out
}

/// Drops an ARFF `%` comment, ignoring `%` inside quotes.
pub fn strip_comment(line: &str) -> &str {
    let mut in_quotes: Option<char> = None;
    for (i, ch) in line.char_indices() {
        match in_quotes {
            Some(q) if ch == q => in_quotes = None,
            Some(_) => {}
            None if ch == '"' || ch == '\'' => in_quotes = Some(ch),
            None if ch == '%' => return &line[..i],
            None => {}
        }
    }
    line
}

/// Type part of an `@attribute` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArffAttributeType {
    Nominal(Vec<String>),
    /// `numeric`, `real`, `string`, `date`...; kept verbatim for diagnostics.
    Other(String),
}

/// Parses `@attribute <name> <type>`. The keyword is matched
/// case-insensitively and the name may be quoted. Returns `None` when the
/// line is not an attribute declaration or is malformed.
pub fn parse_attribute_declaration(line: &str) -> Option<(String, ArffAttributeType)> {
    let line = line.trim();
    let keyword = line.get(..10)?;
    if !keyword.eq_ignore_ascii_case("@attribute") {
        return None;
    }
    let rest = line[10..].trim_start();
    if rest.is_empty() {
        return None;
    }

    let (name, tail) = match rest.chars().next()? {
        q @ ('\'' | '"') => {
            let end = rest[1..].find(q)? + 1;
            (&rest[1..end], &rest[end + 1..])
        }
        _ => {
            let end = rest
                .find(|c: char| c.is_whitespace() || c == '{')
                .unwrap_or(rest.len());
            (&rest[..end], &rest[end..])
        }
    };

    let tail = tail.trim();
    if tail.is_empty() {
        return None;
    }

    if let Some(body) = tail.strip_prefix('{') {
        let body = body.strip_suffix('}')?;
        let values = split_csv_preserving_quotes(body)
            .iter()
            .map(|v| strip_surrounding_quotes(v).to_string())
            .collect();
        Some((name.to_string(), ArffAttributeType::Nominal(values)))
    } else {
        Some((name.to_string(), ArffAttributeType::Other(tail.to_string())))
    }
}
