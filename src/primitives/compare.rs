//! Ordering comparisons between `left` and `right`.

use core::convert::Infallible;

use crate::predicate::BiPredicate;

/// Define a comparison predicate plus its snake_case constructor.
macro_rules! define_comparison {
    ($(#[$meta:meta])* $Name:ident, $op:tt) => {
        paste::paste! {
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
            pub struct $Name;

            impl BiPredicate for $Name {
                type Error = Infallible;

                #[inline(always)]
                fn evaluate(&self, left: i64, right: i64) -> Result<bool, Infallible> {
                    Ok(left $op right)
                }
            }

            #[doc = "Shorthand for [`" $Name "`]."]
            #[inline(always)]
            pub const fn [<$Name:snake>]() -> $Name {
                $Name
            }
        }
    };
}

define_comparison!(
    /// `left < right`
    Less, <
);
define_comparison!(
    /// `left <= right`
    LessOrEqual, <=
);
define_comparison!(
    /// `left > right`
    Greater, >
);
define_comparison!(
    /// `left >= right`
    GreaterOrEqual, >=
);
define_comparison!(
    /// `left == right`
    Equal, ==
);
define_comparison!(
    /// `left != right`
    NotEqual, !=
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InfallibleBiPredicate;

    const GRID: [i64; 7] = [i64::MIN, i64::MIN + 1, -1, 0, 1, i64::MAX - 1, i64::MAX];

    #[test]
    fn test_comparisons_match_operators() {
        for l in GRID {
            for r in GRID {
                assert_eq!(less().test(l, r), l < r);
                assert_eq!(less_or_equal().test(l, r), l <= r);
                assert_eq!(greater().test(l, r), l > r);
                assert_eq!(greater_or_equal().test(l, r), l >= r);
                assert_eq!(equal().test(l, r), l == r);
                assert_eq!(not_equal().test(l, r), l != r);
            }
        }
    }

    #[test]
    fn test_complements() {
        for l in GRID {
            for r in GRID {
                assert_eq!(Less.negate().test(l, r), GreaterOrEqual.test(l, r));
                assert_eq!(Equal.negate().test(l, r), NotEqual.test(l, r));
                assert_eq!(Less.or(Equal).test(l, r), LessOrEqual.test(l, r));
            }
        }
    }
}
