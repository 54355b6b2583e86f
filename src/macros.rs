//! Node accessor and command-shorthand macros
//!
//! These macros eliminate repetitive match code on [`crate::node::Node`] and
//! give the generic command factory a call-site-friendly form. Accessor
//! generation uses `paste` internally for identifier concatenation.

// =============================================================================
// Node accessor generation
// =============================================================================

/// Generate is_xxx, as_xxx, as_xxx_mut methods for the `Node` enum
///
/// # Generated methods per variant:
/// - `is_xxx(&self) -> bool` - type check
/// - `as_xxx(&self) -> Option<&Xxx>` - immutable accessor
/// - `as_xxx_mut(&mut self) -> Option<&mut Xxx>` - mutable accessor
#[macro_export]
macro_rules! impl_node_accessors {
    ($($variant:ident),* $(,)?) => {
        ::paste::paste! {
            $(
                #[doc = "Check if this is a " $variant " node"]
                pub fn [<is_ $variant:lower>](&self) -> bool {
                    matches!(self, Self::$variant(_))
                }

                #[doc = "Try to get as " $variant " reference"]
                pub fn [<as_ $variant:lower>](&self) -> Option<&$variant> {
                    match self { Self::$variant(v) => Some(v), _ => None }
                }

                #[doc = "Try to get as mutable " $variant " reference"]
                pub fn [<as_ $variant:lower _mut>](&mut self) -> Option<&mut $variant> {
                    match self { Self::$variant(v) => Some(v), _ => None }
                }
            )*
        }
    };
}

// =============================================================================
// Command shorthand
// =============================================================================

/// Build a [`crate::node::Command`] from a macro name and its arguments.
///
/// This is the ergonomic layer over [`crate::node::Command::new`] for the
/// long tail of LaTeX macros the crate does not wrap explicitly.
///
/// # Example
/// ```
/// use texdom::cmd;
///
/// assert_eq!(cmd!(frac, "x", "y").render(), r"\frac{x}{y}");
/// assert_eq!(cmd!(partial, "t").render(), r"\partial{t}");
/// ```
#[macro_export]
macro_rules! cmd {
    ($name:ident) => {
        $crate::node::Command::new(stringify!($name))
    };
    ($name:ident, $($arg:expr),+ $(,)?) => {{
        let mut command = $crate::node::Command::new(stringify!($name));
        $(command = command.arg($arg);)+
        command
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_cmd_no_arguments() {
        assert_eq!(cmd!(partial).render(), r"\partial");
    }

    #[test]
    fn test_cmd_with_arguments() {
        assert_eq!(cmd!(frac, "x", "y").render(), r"\frac{x}{y}");
        assert_eq!(cmd!(mathrm, "d").render(), r"\mathrm{d}");
    }
}
