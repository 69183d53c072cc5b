// Float helpers that work with and without `std`.

pub(crate) fn sin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sin();

    #[cfg(not(feature = "std"))]
    return libm::sin(x);
}

pub(crate) fn cos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.cos();

    #[cfg(not(feature = "std"))]
    return libm::cos(x);
}

pub(crate) fn hypot(x: f64, y: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.hypot(y);

    #[cfg(not(feature = "std"))]
    return libm::hypot(x, y);
}

#[cfg(test)]
#[path = "math_tests.rs"]
mod tests;
