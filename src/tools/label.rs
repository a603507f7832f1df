//! Display labels derived from snake_case tool names.

/// Acronym and brand corrections applied, in order, after title-casing.
///
/// Later entries see the output of earlier ones. A fragment is only replaced
/// where it spans whole words: it must start a word and end at a space or the
/// end of the label. The trailing space on `Uc ` keeps it from firing at the
/// end of a label.
pub const ACRONYM_FIXES: &[(&str, &str)] = &[
    ("Uc ", "UC "),
    ("Dbfs", "DBFS"),
    ("Mlflow", "MLflow"),
    ("Dlt", "DLT"),
    ("Sql", "SQL"),
    ("Api", "API"),
    ("Ip", "IP"),
    ("Acl", "ACL"),
];

/// Turn a tool name into a display title.
///
/// `list_dbfs_files` becomes `List DBFS Files`. Total over all inputs: empty
/// tokens (from leading, trailing or doubled underscores) are kept as empty
/// words, and the empty string maps to itself.
pub fn format_label(name: &str) -> String {
    let title = name
        .split('_')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ");
    ACRONYM_FIXES
        .iter()
        .fold(title, |label, (from, to)| replace_words(&label, from, to))
}

/// Replace every occurrence of `from` that sits on word boundaries.
fn replace_words(label: &str, from: &str, to: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut last = 0;
    for (start, _) in label.match_indices(from) {
        let end = start + from.len();
        let starts_word = label[..start].is_empty() || label[..start].ends_with(' ');
        let ends_word =
            from.ends_with(' ') || label[end..].is_empty() || label[end..].starts_with(' ');
        if starts_word && ends_word {
            out.push_str(&label[last..start]);
            out.push_str(to);
            last = end;
        }
    }
    out.push_str(&label[last..]);
    out
}

/// Uppercase the first character, leaving the rest untouched.
fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Cosmetic `/<namespace>:<tool>` reference shown next to a tool.
pub fn display_reference(namespace: &str, tool_name: &str) -> String {
    format!("/{}:{}", namespace, tool_name)
}
