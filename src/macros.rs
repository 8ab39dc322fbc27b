// src/macros.rs

/// `String` shorthand.
///
/// `s!()` is an empty `String`; `s!(x)` is `String::from(x)`.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}
