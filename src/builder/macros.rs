//! Macros for declaring protocol vocabularies.

/// Declare a fieldless enum whose variants carry their protocol names.
///
/// Generates `ALL`, `name()`, `from_name()`, a `Display` impl that prints the
/// protocol name, and serde renames so values serialize as that name too.
///
/// # Example
///
/// ```
/// use tcp_fsm::named_enum;
///
/// named_enum! {
///     pub enum Light {
///         Red => "RED",
///         Green => "GREEN",
///     }
/// }
///
/// assert_eq!(Light::ALL.len(), 2);
/// assert_eq!(Light::Red.name(), "RED");
/// assert_eq!(Light::from_name("GREEN"), Some(Light::Green));
/// assert_eq!(Light::from_name("green"), None);
/// ```
#[macro_export]
macro_rules! named_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $label:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            Debug,
            $crate::__serde::Serialize,
            $crate::__serde::Deserialize,
        )]
        #[serde(crate = "tcp_fsm::__serde")]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $label)]
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$(Self::$variant),*];

            /// The protocol name of this variant.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),*
                }
            }

            /// Look up a variant by its exact protocol name.
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($label => Some(Self::$variant),)*
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}
