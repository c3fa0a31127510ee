//! String template rendering utilities.

/// Replace every `{{key}}` placeholder with its value.
///
/// Variables are applied in the order given, so a value that itself contains
/// `{{...}}` text is only re-expanded by variables listed after it.
pub fn render(template: &str, variables: &[(&str, &str)]) -> String {
    let mut result = template.to_string();

    for (key, value) in variables {
        let placeholder = format!("{{{{{}}}}}", key);
        result = result.replace(&placeholder, value);
    }

    result
}
