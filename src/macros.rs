//! Declarative macros for throwing.

/// Throw an error or a formatted message.
///
/// - `throw!(err)` throws any `impl Into<thrower::Error>`
/// - `throw!("fmt", args...)` throws a message-only error
///
/// ```
/// use thrower::{recover, throw};
///
/// let id = 7;
/// let err = recover(|| -> u32 { throw!("no user {}", id) }).unwrap_err();
/// assert_eq!(err.to_string(), "no user 7");
/// ```
#[macro_export]
macro_rules! throw {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::throw_msg(::std::format!($fmt $(, $arg)*))
    };
    ($err:expr $(,)?) => {
        $crate::throw($err)
    };
}

/// Throw unless a condition holds.
///
/// ```
/// use thrower::{ensure, recover};
///
/// fn withdraw(balance: u32, amount: u32) -> u32 {
///     ensure!(amount <= balance, "insufficient funds: {} > {}", amount, balance);
///     balance - amount
/// }
///
/// assert_eq!(recover(|| withdraw(10, 3)).unwrap(), 7);
/// assert_eq!(recover(|| withdraw(1, 3)).unwrap_err().to_string(), "insufficient funds: 3 > 1");
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($rest:tt)+) => {
        if !$cond {
            $crate::throw!($($rest)+)
        }
    };
}
