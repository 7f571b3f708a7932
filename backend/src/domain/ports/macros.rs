//! `define_port_error!` generates port error enums with `thiserror` messages
//! and snake-case constructors taking `impl Into<_>` arguments.

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

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
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
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Regression coverage for generated port errors.
    define_port_error! {
        pub enum ExamplePortError {
            Unavailable { message: String } => "storage unavailable: {message}",
            Missing { id: i32 } => "record {id} not found",
            Rejected { message: String, id: i32 } => "record {id} rejected: {message}",
        }
    }

    #[test]
    fn constructors_accept_str_for_string_fields() {
        let err = ExamplePortError::unavailable("pool exhausted");
        assert_eq!(err.to_string(), "storage unavailable: pool exhausted");
    }

    #[test]
    fn constructors_preserve_non_string_types() {
        let err = ExamplePortError::missing(7);
        assert_eq!(err, ExamplePortError::Missing { id: 7 });
        assert_eq!(err.to_string(), "record 7 not found");
    }

    #[test]
    fn constructors_support_mixed_fields() {
        let err = ExamplePortError::rejected("bad row", 3);
        assert_eq!(err.to_string(), "record 3 rejected: bad row");
    }
}
