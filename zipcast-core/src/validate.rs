use regex::Regex;
use std::sync::LazyLock;

/// Shown in the error region when the entered postal code is rejected.
pub const INVALID_POSTAL_CODE_MESSAGE: &str =
    "Invalid zipcode\nMust be 5 digits, optionally followed by a dash and 4 digits";

static POSTAL_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[0-9]{5}|[0-9]{5}-[0-9]{4})$").expect("postal code pattern is valid")
});

/// Accepts `12345` and ZIP+4 `12345-6789`. No trimming and no range check.
pub fn is_valid_postal_code(input: &str) -> bool {
    POSTAL_CODE.is_match(input)
}
