//! Form field widgets

use super::escape;
use crate::forms::FieldErrors;

fn field_class(name: &str, errors: &FieldErrors) -> &'static str {
    if errors.get(name).is_some() {
        "field has-error"
    } else {
        "field"
    }
}

fn error_note(name: &str, errors: &FieldErrors) -> String {
    errors
        .get(name)
        .map(|msg| format!(r#"<p class="field-error">{}</p>"#, escape(msg)))
        .unwrap_or_default()
}

/// Single-line input
pub fn input(
    input_type: &str,
    name: &str,
    label: &str,
    value: &str,
    placeholder: &str,
    errors: &FieldErrors,
) -> String {
    format!(
        r#"        <div class="{class}">
            <label for="{name}">{label}</label>
            <input type="{input_type}" id="{name}" name="{name}" value="{value}" placeholder="{placeholder}">
            {error}
        </div>
"#,
        class = field_class(name, errors),
        name = name,
        label = escape(label),
        input_type = input_type,
        value = escape(value),
        placeholder = escape(placeholder),
        error = error_note(name, errors),
    )
}

/// Single-choice select; `options` are (value, label) pairs
pub fn select(
    name: &str,
    label: &str,
    options: &[(String, String)],
    selected: &str,
    errors: &FieldErrors,
) -> String {
    let mut rendered = String::from(r#"<option value="">Select...</option>"#);
    for (value, text) in options {
        let marker = if value == selected { " selected" } else { "" };
        rendered.push_str(&format!(
            r#"<option value="{}"{}>{}</option>"#,
            escape(value),
            marker,
            escape(text)
        ));
    }

    format!(
        r#"        <div class="{class}">
            <label for="{name}">{label}</label>
            <select id="{name}" name="{name}">{options}</select>
            {error}
        </div>
"#,
        class = field_class(name, errors),
        name = name,
        label = escape(label),
        options = rendered,
        error = error_note(name, errors),
    )
}

/// Multi-choice select submitting one pair per chosen value
pub fn multi_select(
    name: &str,
    label: &str,
    choices: &[&str],
    selected: &[String],
    errors: &FieldErrors,
) -> String {
    let rendered: String = choices
        .iter()
        .map(|choice| {
            let marker = if selected.iter().any(|s| s == choice) {
                " selected"
            } else {
                ""
            };
            format!(
                r#"<option value="{0}"{1}>{0}</option>"#,
                escape(choice),
                marker
            )
        })
        .collect();

    format!(
        r#"        <div class="{class}">
            <label for="{name}">{label}</label>
            <select id="{name}" name="{name}" multiple size="6">{options}</select>
            {error}
        </div>
"#,
        class = field_class(name, errors),
        name = name,
        label = escape(label),
        options = rendered,
        error = error_note(name, errors),
    )
}

/// Checkbox submitting `y` when checked
pub fn checkbox(name: &str, label: &str, checked: bool) -> String {
    format!(
        r#"        <div class="field checkbox">
            <input type="checkbox" id="{name}" name="{name}" value="y"{checked}>
            <label for="{name}">{label}</label>
        </div>
"#,
        name = name,
        label = escape(label),
        checked = if checked { " checked" } else { "" },
    )
}

/// `<option>` pairs from static choices
pub fn choice_options(choices: &[&str]) -> Vec<(String, String)> {
    choices
        .iter()
        .map(|c| (c.to_string(), c.to_string()))
        .collect()
}
