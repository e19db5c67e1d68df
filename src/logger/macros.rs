//! Convenience macros over [`Kemba`](crate::Kemba).
//!
//! Both macros expand to a method call, so a disabled logger still skips all
//! rendering: `format_args!` only captures its arguments.

/// Write a formatted message through a logger.
///
/// # Examples
/// ```
/// use kemba::{kemba_printf, Kemba, LoggerConfig};
///
/// let k = Kemba::with_config("example:tag", LoggerConfig::new("example:*"));
/// kemba_printf!(k, "key: {} value: {}", "test", 1337);
/// kemba_printf!(k, "{:#?}", vec![(1, 2), (3, 4)]);
/// ```
#[macro_export]
macro_rules! kemba_printf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.printf(::std::format_args!($($arg)+))
    };
}

/// Write each value in expanded form, one emission per value.
///
/// # Examples
/// ```
/// use kemba::{kemba_log, Kemba, LoggerConfig};
///
/// let k = Kemba::with_config("example:tag", LoggerConfig::new("example:*"));
/// kemba_log!(k, "a string", 12, true);
/// ```
#[macro_export]
macro_rules! kemba_log {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $logger.log(&[$(&$value as &dyn ::std::fmt::Debug),*])
    };
}
