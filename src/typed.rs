//! Ready-made ascending sets for primitive and string elements.
//!
//! Each function is shorthand for [`SortedSet::ascending`] with a fixed
//! element type.
//!
//! ```rust
//! let set = sortedset::new_u16();
//! set.add_all([300, 7, 42]);
//! assert_eq!(set.elements(), vec![7, 42, 300]);
//! ```

use paste::paste;

use crate::SortedSet;

macro_rules! ascending_constructors {
    ($($element:ident),* $(,)?) => {
        paste! {
            $(
                #[doc = concat!("Creates an empty set of `", stringify!($element), "` in ascending order.")]
                #[must_use]
                pub fn [<new_ $element:snake>]() -> SortedSet<$element> {
                    SortedSet::ascending()
                }
            )*
        }
    };
}

ascending_constructors!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char, String,
);

#[cfg(all(test, not(loom)))]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_new_i64_sorts_ascending() {
        let set = new_i64();
        set.add_all([i64::MAX, -1, 0, i64::MIN]);
        assert_eq!(set.elements(), vec![i64::MIN, -1, 0, i64::MAX]);
    }

    #[rstest]
    fn test_new_u8_deduplicates() {
        let set = new_u8();
        set.add_all([3, 3, 1]);
        assert_eq!(set.elements(), vec![1, 3]);
    }

    #[rstest]
    fn test_new_char_sorts_by_code_point() {
        let set = new_char();
        set.add_all(['b', 'A', 'a']);
        assert_eq!(set.elements(), vec!['A', 'a', 'b']);
    }

    #[rstest]
    fn test_new_string_supports_str_lookup() {
        let set = new_string();
        set.add("beta".to_string());
        set.add("alpha".to_string());
        assert!(set.contains("alpha"));
        assert_eq!(set.first().as_deref(), Some("alpha"));
    }
}
