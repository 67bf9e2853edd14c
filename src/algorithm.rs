use std::fmt;
use std::str::FromStr;

use crate::SortError;

/// Selects the implementation used by [`ArraySorter::sort`](crate::ArraySorter::sort).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortAlgorithm {
    #[default]
    Insertion,
    Bubble,
    Selection,
    Merge,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 4] = [
        SortAlgorithm::Insertion,
        SortAlgorithm::Bubble,
        SortAlgorithm::Selection,
        SortAlgorithm::Merge,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            SortAlgorithm::Insertion => "insertion",
            SortAlgorithm::Bubble => "bubble",
            SortAlgorithm::Selection => "selection",
            SortAlgorithm::Merge => "merge",
        }
    }

    /// Returns `true` if elements that compare equal keep their relative input order.
    ///
    /// Selection sort swaps the minimum into place, which can move an element past others equal
    /// to it.
    pub const fn is_stable(self) -> bool {
        !matches!(self, SortAlgorithm::Selection)
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortAlgorithm {
    type Err = SortError;

    /// Accepts the plain names as well as forms like `MERGESORT`, `merge_sort` or `Merge-Sort`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let base = match lowered.strip_suffix("sort") {
            Some(prefix) => prefix.trim_end_matches(['_', '-', ' ']),
            None => lowered.as_str(),
        };

        SortAlgorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == base)
            .ok_or_else(|| SortError::UnsupportedAlgorithm(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_insertion() {
        assert_eq!(SortAlgorithm::default(), SortAlgorithm::Insertion);
    }

    #[test]
    fn parse_names() {
        for algorithm in SortAlgorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<SortAlgorithm>(), Ok(algorithm));
        }

        assert_eq!("MERGESORT".parse(), Ok(SortAlgorithm::Merge));
        assert_eq!(" insertion_sort ".parse(), Ok(SortAlgorithm::Insertion));
        assert_eq!("Bubble-Sort".parse(), Ok(SortAlgorithm::Bubble));
        assert_eq!("selectionsort".parse(), Ok(SortAlgorithm::Selection));
    }

    #[test]
    fn parse_unknown() {
        assert_eq!(
            "quick".parse::<SortAlgorithm>(),
            Err(SortError::UnsupportedAlgorithm("quick".into()))
        );
        assert!("sort".parse::<SortAlgorithm>().is_err());
        assert!("".parse::<SortAlgorithm>().is_err());
    }

    #[test]
    fn stability() {
        assert!(SortAlgorithm::Insertion.is_stable());
        assert!(SortAlgorithm::Bubble.is_stable());
        assert!(SortAlgorithm::Merge.is_stable());
        assert!(!SortAlgorithm::Selection.is_stable());
    }
}
