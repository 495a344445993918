#[macro_export]
macro_rules! error_code {
    ($($(#[doc=$doc:literal])* $vis:vis $ident:ident($status:ident, $code:literal));* $(;)*) => { $(
        $(#[doc=$doc])*
        #[derive(Debug, Clone, Copy, Default)]
        $vis struct $ident;

        impl $crate::errors::ApiErrorCode for $ident {
            const CODE: &'static str = $code;
            const STATUS_CODE: ::axum::http::StatusCode = ::axum::http::StatusCode::$status;
        }
    )* };
}
