//! Macros for ergonomic state declarations.

/// Declare a fieldless enum usable as a machine state.
///
/// Derives `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash` and `Debug`, and
/// implements [`State`](crate::core::State) with each variant's name.
///
/// # Example
///
/// ```
/// use stateful::core::State;
/// use stateful::state_enum;
///
/// state_enum! {
///     pub enum WorkflowState {
///         Start,
///         Processing,
///         Done,
///     }
/// }
///
/// assert_eq!(WorkflowState::Processing.name(), "Processing");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> ::std::borrow::Cow<'_, str> {
                match self {
                    $(Self::$variant => ::std::borrow::Cow::Borrowed(stringify!($variant))),*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::State;
    use std::collections::HashSet;

    state_enum! {
        enum TestState {
            Initial,
            Processing,
            Complete,
        }
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(TestState::Initial.name(), "Initial");
        assert_eq!(TestState::Processing.name(), "Processing");
        assert_eq!(TestState::Complete.name(), "Complete");
    }

    #[test]
    fn state_enum_supports_visibility_and_attributes() {
        state_enum! {
            /// Public states.
            #[allow(dead_code)]
            pub enum PublicState {
                A,
                #[doc = "second"]
                B,
            }
        }

        assert_eq!(PublicState::B.name(), "B");
    }

    #[test]
    fn state_enum_is_hashable_and_copy() {
        let state = TestState::Processing;
        let copied = state;

        let set: HashSet<TestState> = [state, copied, TestState::Complete].into_iter().collect();
        assert_eq!(set.len(), 2);
    }
}
