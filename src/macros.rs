/// Compile a regex literal once and hand out a `&'static Regex`.
///
/// The pattern is a literal, so a compile failure is a programming error and
/// surfaces on first use.
#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}
