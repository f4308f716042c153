//! Resolution outcome kinds and the per-pair output record.

use std::fmt;

use strum_macros::EnumIter;

use crate::input::InputPair;

/// Terminal classification of one input pair.
///
/// Exactly one of these is produced per pair, by exactly one of: the
/// precondition-failure path, the timeout path, the hop-limit path, the
/// terminal success/failure path, or the exhausted-retries path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum ResolutionStatus {
    /// The destination URL was not a well-formed absolute URL; the pair was
    /// rejected before any navigation.
    UrlFormatIncorrect,
    /// The chain terminated on the destination host with status 200.
    Success,
    /// The chain terminated somewhere else.
    Failure,
    /// The attempt deadline elapsed before the chain terminated.
    SkippedTimeout,
    /// The chain exceeded the hop limit before the deadline.
    SkippedMultipleRedirects,
    /// Every attempt raised a transient navigator error.
    Unprocessed,
}

impl fmt::Display for ResolutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ResolutionStatus::UrlFormatIncorrect => "URL format incorrect",
            ResolutionStatus::Success => "Success",
            ResolutionStatus::Failure => "Failure",
            ResolutionStatus::SkippedTimeout => "Skipped Timeout",
            ResolutionStatus::SkippedMultipleRedirects => "Skipped Multiple Redirects",
            ResolutionStatus::Unprocessed => "Unprocessed",
        };
        f.write_str(s)
    }
}

/// The output record for one input pair.
///
/// Created once, written to the report exactly once, then discarded: no
/// further mutation after it is handed to the report writer. Fields that a
/// given outcome does not reach (e.g. `final_url` on a timeout) stay empty.
#[derive(Debug, Clone)]
pub struct ResolutionResult {
    /// 1-based position of the pair in the input file.
    pub index: usize,
    /// The redirection URL as given in the input.
    pub redirection_url: String,
    /// The destination URL as given in the input.
    pub destination_url: String,
    /// Host derived from the destination URL; empty if it failed to parse.
    pub destination_domain: String,
    /// Host of the last observed hop.
    pub final_domain: String,
    /// Terminal classification.
    pub status: ResolutionStatus,
    /// Status code of the last observed hop, as a string; empty if the
    /// chain never terminated.
    pub status_code: String,
    /// URL of the last observed hop.
    pub final_url: String,
    /// The hop sequence serialized as `url|status` pairs joined by `|`.
    pub redirects_trace: String,
}

impl ResolutionResult {
    /// Starts a record for one pair. The status begins as `Unprocessed` and
    /// stays there only if every resolution attempt fails.
    pub(crate) fn new(index: usize, pair: &InputPair) -> Self {
        ResolutionResult {
            index,
            redirection_url: pair.redirection_url.clone(),
            destination_url: pair.destination_url.clone(),
            destination_domain: String::new(),
            final_domain: String::new(),
            status: ResolutionStatus::Unprocessed,
            status_code: String::new(),
            final_url: String::new(),
            redirects_trace: String::new(),
        }
    }
}
