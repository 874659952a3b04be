//! Core State trait for state machine states.
//!
//! States are opaque identifiers. The engine only compares and hashes
//! them; `name` exists for diagnostics and error messages.

use std::borrow::Cow;
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// # Required Traits
///
/// - `Clone`: states are copied into history and error values
/// - `Eq` + `Hash`: states key the hook tables
/// - `Debug`: states must be debuggable for diagnostics
/// - `Send` + `Sync`: machines may be shared across threads
///
/// Integer primitives, `char`, `bool`, `&'static str` and `String`
/// implement `State` out of the box. Enums usually get it from
/// [`state_enum!`](crate::state_enum).
///
/// # Example
///
/// ```rust
/// use stateful::core::State;
/// use std::borrow::Cow;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum DoorState {
///     Open,
///     Closed,
/// }
///
/// impl State for DoorState {
///     fn name(&self) -> Cow<'_, str> {
///         match self {
///             Self::Open => Cow::Borrowed("Open"),
///             Self::Closed => Cow::Borrowed("Closed"),
///         }
///     }
/// }
///
/// assert_eq!(DoorState::Open.name(), "Open");
/// assert_eq!(3u32.name(), "3");
/// ```
pub trait State: Clone + Eq + Hash + Debug + Send + Sync {
    /// Get the state's name for display/logging.
    fn name(&self) -> Cow<'_, str>;
}

macro_rules! impl_state_for_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl State for $ty {
                fn name(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )*
    };
}

impl_state_for_display!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, char, bool);

impl State for &'static str {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl State for String {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}
