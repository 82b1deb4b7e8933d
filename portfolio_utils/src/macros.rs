/// Asserts that an expression matches a pattern, optionally followed by an
/// `if` guard.
///
/// ```
/// # use portfolio_utils::assert_matches;
/// assert_matches!("42".parse::<u8>(), Ok(x) if x > 40);
/// ```
#[macro_export]
macro_rules! assert_matches {
    ($expr:expr, $($pat:pat_param)|+ $(if $guard:expr)? $(,)?) => {
        match $expr {
            $($pat)|+ $(if $guard)? => {}
            ref other => ::core::panic!(
                "`{}` is {:?}, which does not match `{}`",
                ::core::stringify!($expr),
                other,
                ::core::stringify!($($pat)|+ $(if $guard)?),
            ),
        }
    };
}
