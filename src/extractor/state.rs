//! Relaxation state for the retry loop.
//!
//! A run whose visible text is shorter than `retry_length` is repeated with
//! one heuristic switched off, in a fixed order. The level is derived from
//! the option flags so a caller who pre-disables a heuristic simply starts
//! further down the ladder.

use crate::options::Options;

/// How far the heuristics have been relaxed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RelaxationLevel {
    /// Unlikely-candidate removal, class weighting and conditional cleaning.
    Strict,
    /// Unlikely-candidate removal off.
    RelaxUnlikely,
    /// Class weighting off as well.
    RelaxWeight,
    /// Conditional cleaning off as well. Nothing left to relax.
    RelaxConditional,
}

impl RelaxationLevel {
    /// Level implied by the first heuristic still enabled.
    #[must_use]
    pub fn of(options: &Options) -> Self {
        if options.remove_unlikely_candidates {
            Self::Strict
        } else if options.weight_classes {
            Self::RelaxUnlikely
        } else if options.clean_conditionally {
            Self::RelaxWeight
        } else {
            Self::RelaxConditional
        }
    }
}

impl std::fmt::Display for RelaxationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Strict => "strict",
            Self::RelaxUnlikely => "unlikely candidates kept",
            Self::RelaxWeight => "class weights ignored",
            Self::RelaxConditional => "conditional cleaning off",
        };
        f.write_str(name)
    }
}

/// Switch off the first enabled heuristic, in the order unlikely removal,
/// class weighting, conditional cleaning.
///
/// Returns the new level, or `None` when every heuristic is already off.
pub fn relax(options: &mut Options) -> Option<RelaxationLevel> {
    if options.remove_unlikely_candidates {
        options.remove_unlikely_candidates = false;
    } else if options.weight_classes {
        options.weight_classes = false;
    } else if options.clean_conditionally {
        options.clean_conditionally = false;
    } else {
        return None;
    }

    Some(RelaxationLevel::of(options))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ladder_order() {
        let mut options = Options::default();
        assert_eq!(RelaxationLevel::of(&options), RelaxationLevel::Strict);

        assert_eq!(relax(&mut options), Some(RelaxationLevel::RelaxUnlikely));
        assert!(!options.remove_unlikely_candidates);
        assert!(options.weight_classes);

        assert_eq!(relax(&mut options), Some(RelaxationLevel::RelaxWeight));
        assert!(!options.weight_classes);
        assert!(options.clean_conditionally);

        assert_eq!(relax(&mut options), Some(RelaxationLevel::RelaxConditional));
        assert!(!options.clean_conditionally);

        assert_eq!(relax(&mut options), None);
    }

    #[test]
    fn test_pre_disabled_flag_skips_a_step() {
        let mut options = Options {
            weight_classes: false,
            ..Options::default()
        };
        assert_eq!(relax(&mut options), Some(RelaxationLevel::RelaxWeight));
        assert_eq!(relax(&mut options), Some(RelaxationLevel::RelaxConditional));
        assert_eq!(relax(&mut options), None);
    }

    #[test]
    fn test_at_most_three_relaxations() {
        let mut options = Options::default();
        let steps = std::iter::from_fn(|| relax(&mut options)).count();
        assert_eq!(steps, 3);
    }
}
