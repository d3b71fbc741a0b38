//! Helper macro for declaring driven-port error enums.
//!
//! Each generated enum derives `thiserror::Error`, gains one snake_case
//! constructor per variant (fields accept `impl Into<T>`), and exposes
//! `kind()` so adapters and services can log the variant name as a
//! structured field without formatting the whole error.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (
        @ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*)
        $field:ident : $ty:ty, $($rest:tt)*
    ) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*

            /// Name of the variant, suitable for a structured log field.
            pub fn kind(&self) -> &'static str {
                match self {
                    $(
                        Self::$variant $( { $( $field: _ ),* } )? => stringify!($variant),
                    )*
                }
            }
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use rstest::rstest;

    define_port_error! {
        pub enum DockingPortError {
            Offline => "docking port offline",
            Occupied { bay: u32 } => "bay {bay} is occupied",
            Rejected { operation: String, message: String } => "{operation} rejected: {message}",
        }
    }

    #[rstest]
    fn unit_variants_get_zero_argument_constructors() {
        let err = DockingPortError::offline();
        assert_eq!(err.to_string(), "docking port offline");
    }

    #[rstest]
    fn constructors_preserve_non_string_types() {
        let err = DockingPortError::occupied(7_u32);
        assert_eq!(err.to_string(), "bay 7 is occupied");
    }

    #[rstest]
    fn constructors_accept_str_for_string_fields() {
        let err = DockingPortError::rejected("dock", "shields up");
        assert_eq!(err.to_string(), "dock rejected: shields up");
    }

    #[rstest]
    #[case(DockingPortError::offline(), "Offline")]
    #[case(DockingPortError::occupied(1_u32), "Occupied")]
    #[case(DockingPortError::rejected("dock", "no"), "Rejected")]
    fn kind_names_the_variant(#[case] err: DockingPortError, #[case] expected: &str) {
        assert_eq!(err.kind(), expected);
    }
}
