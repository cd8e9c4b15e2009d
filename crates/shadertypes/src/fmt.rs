//! Small pretty-printing helpers shared by the engines and the declaration
//! renderer. Everything here produces syntactically exact TypeScript
//! fragments; callers only compose.

/// `(a, b, c)`
pub(crate) fn paren_inline(items: &[String]) -> String {
    format!("({})", items.join(", "))
}

/// `{ a, b, c }`
pub(crate) fn curly_inline(items: &[String]) -> String {
    format!("{{ {} }}", items.join(", "))
}

/// A brace block with every item on its own indented line:
///
/// ```text
/// {
///     a<sep>
///     b
/// }
/// ```
///
/// Multi-line items are shifted uniformly so nested blocks stay aligned.
pub(crate) fn curly_pad(items: &[String], sep: &str) -> String {
    let body = items
        .iter()
        .map(|item| indent(item, 1))
        .collect::<Vec<_>>()
        .join(&format!("{sep}\n"));
    format!("{{\n{body}\n}}")
}

/// Indents every line of `text` by `level` four-space steps.
pub(crate) fn indent(text: &str, level: usize) -> String {
    let pad = "    ".repeat(level);
    text.lines()
        .map(|line| format!("{pad}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A fixed-length tuple type: `tuple_of(3, "number")` is
/// `[number, number, number]`.
pub(crate) fn tuple_of(len: usize, elem: &str) -> String {
    format!("[{}]", vec![elem; len].join(", "))
}

/// The nested row-major matrix tuple: `[[number, ...], ...]`.
pub(crate) fn matrix_of(order: usize) -> String {
    let row = tuple_of(order, "number");
    tuple_of(order, &row)
}

/// An open-ended array type, parenthesizing unions: `[number, number][]`
/// but `(boolean | number)[]`.
pub(crate) fn array_of(elem: &str) -> String {
    if elem.contains(" | ") {
        format!("({elem})[]")
    } else {
        format!("{elem}[]")
    }
}

pub(crate) fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// The identifier a module is exported under: the final path segment up to
/// its first `.` (`@shaders/colorize.frag` becomes `colorize`).
pub(crate) fn display_name(module_id: &str) -> &str {
    let base = module_id
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(module_id);
    base.split('.').next().unwrap_or(base)
}
