/// Assert that the floating point numbers are equal within the given epsilon.
#[cfg(test)]
macro_rules! assert_f32_eq {
    ($a:expr, $b:expr, $eps:expr) => {{
        // Make variables to avoid evaluating expressions multiple times.
        let a: f32 = $a;
        let b: f32 = $b;
        let eps: f32 = $eps;
        let error = (a - b).abs();
        assert!(
            error <= eps,
            "Assertion failed: |({}) - ({})| = {:e} <= {:e}",
            a,
            b,
            error,
            eps
        );
    }};
    ($a:expr, $b:expr) => {
        $crate::macros::assert_f32_eq!($a, $b, f32::EPSILON)
    };
}

/// Assert that two points are equal, coordinate by coordinate, within the
/// given epsilon.
#[cfg(test)]
macro_rules! assert_vec3_eq {
    ($a:expr, $b:expr, $eps:expr) => {{
        let a: glam::Vec3 = $a;
        let b: glam::Vec3 = $b;
        for i in 0..3 {
            $crate::macros::assert_f32_eq!(a[i], b[i], $eps);
        }
    }};
    ($a:expr, $b:expr) => {
        $crate::macros::assert_vec3_eq!($a, $b, 1e-6)
    };
}

#[cfg(test)]
pub(crate) use assert_f32_eq;
#[cfg(test)]
pub(crate) use assert_vec3_eq;
