//! Placeholder resolution for user-supplied bucket names.

use gantry_core::AccountContext;

/// Replace every `<account_id>` and `<region>` token in `template` with the
/// corresponding account context value.
///
/// No other tokens are recognized; text that matches neither passes through
/// untouched.
#[must_use]
pub fn apply_name_template(template: &str, account: &AccountContext) -> String {
    template
        .replace("<account_id>", account.account_id.as_str())
        .replace("<region>", account.region.as_str())
}
