/// Splits a slice into consecutive mutable sub-slices of given lengths.
#[macro_export]
macro_rules! splitm_mut {
    ($slice:expr, $( ($var:ident; $len:expr) ),+ ) => {
        let _splitm_rest: &mut [_] = &mut $slice[..];
        $(
            let ($var, _splitm_rest) = _splitm_rest.split_at_mut($len);
        )*
        let _ = _splitm_rest;
    };
}
