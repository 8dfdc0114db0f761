/// Wraps foreign error types into `WarrenError::Unhandled`
#[macro_export]
macro_rules! from_external_error {
    () => {};
    ($head:path) => {
        impl From<$head> for $crate::error::WarrenError {
            fn from(err: $head) -> Self { $crate::error::WarrenError::Unhandled(Box::new(err)) }
        }
    };
    ($head:path $(, $tail:path)*) => {
        from_external_error!($head);
        from_external_error!($($tail),*);
    };
}
