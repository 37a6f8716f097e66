use thiserror::Error;

/// The reason a [`CascadeConfig`](crate::CascadeConfig) was rejected.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error("invalid `{field}`: {reason}")]
pub struct InvalidConfig {
    /// The name of the offending configuration field.
    pub field: &'static str,
    /// What constraint the field violated.
    pub reason: String,
}

impl InvalidConfig {
    pub(crate) fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }

    pub(crate) fn ray_count_overflow(level: u32) -> Self {
        Self::new(
            "max_level",
            format!("rays per probe overflow u32 at level {}", level),
        )
    }
}

/// The expected failure modes of [`Cascade::query_interval`](crate::Cascade::query_interval).
///
/// Both variants are ordinary outcomes for samples near the cascade bounds, not bugs; callers
/// branch on them to fall back to an ambient value or clamp the sample.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum QueryError {
    /// The sample lies beyond the outermost level's interval.
    #[error("radius {radius} is past the outermost interval, which ends at {outer_limit}")]
    OutOfRange { radius: f64, outer_limit: f64 },

    /// The sample lies inside the region claimed by levels below `min_level`, which were not
    /// generated.
    #[error("radius {radius} is inside the ungenerated region below {inner_limit}")]
    UnclaimedRegion { radius: f64, inner_limit: f64 },
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn messages_name_the_field_and_bound() {
        let err = InvalidConfig::new("base_probe_radius", "must be finite and positive");
        assert_eq!(
            err.to_string(),
            "invalid `base_probe_radius`: must be finite and positive"
        );

        let err = QueryError::OutOfRange {
            radius: 130.0,
            outer_limit: 128.0,
        };
        assert!(err.to_string().contains("130"));
        assert!(err.to_string().contains("128"));
    }
}
