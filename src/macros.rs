// THROW

/// Unwrap an `Ok`, or print the error and return from the enclosing fn.
/// Returns `Default::default()`, or the given expression.
#[macro_export]
macro_rules! get_or_print {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => {
                $crate::bog::Bogger::bog(&$crate::caught::Caught::new(e));
                return Default::default();
            }
        }
    };

    ($expr:expr, $return:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => {
                $crate::bog::Bogger::bog(&$crate::caught::Caught::new(e));
                return $return;
            }
        }
    };
}

/// Unwrap an `Ok`, or discard the error and return from the enclosing fn
#[macro_export]
macro_rules! get_or_silent {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(_) => return Default::default(),
        }
    };

    ($expr:expr, $return:expr) => {
        match $expr {
            Ok(v) => v,
            Err(_) => return $return,
        }
    };
}
