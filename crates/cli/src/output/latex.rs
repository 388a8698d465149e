/// Escape LaTeX special characters in a label.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                out.push('\\');
                out.push(ch);
            }
            '~' => out.push_str(r"\textasciitilde{}"),
            '^' => out.push_str(r"\^{}"),
            '\\' => out.push_str(r"\textbackslash{}"),
            _ => out.push(ch),
        }
    }
    out
}

/// `\rotcol` helper definition for rotated column headers.
///
/// Requires `\usepackage{adjustbox}` and `\usepackage{array}` in the document.
pub fn rotcol_definition(angle: f64) -> String {
    let mut out = String::new();
    out.push_str("\\newcolumntype{R}[2]{%\n");
    out.push_str("    >{\\adjustbox{angle=#1,lap=\\width-(#2)}\\bgroup}%\n");
    out.push_str("    l%\n");
    out.push_str("    <{\\egroup}%\n");
    out.push_str("}\n");
    out.push_str(&format!(
        "\\newcommand*\\rotcol{{\\multicolumn{{1}}{{R{{{angle:.0}}}{{1em}}}}}}%\n"
    ));
    out
}

/// Header label, wrapped in `\rotcol` when headers are rotated.
pub fn header(label: &str, angle: Option<f64>) -> String {
    match angle {
        Some(_) => format!("\\rotcol{{{}}}", escape(label)),
        None => escape(label),
    }
}

/// Coloured cell: `\cellcolor[HTML]{HEX}{value}`.
pub fn colored_cell(hex: &str, value: &str) -> String {
    format!("\\cellcolor[HTML]{{{hex}}}{{{value}}}")
}
