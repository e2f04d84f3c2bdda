/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made at a few points of interest in the library, under the targets below.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [the parser](crate::parser).
    pub const PARSER: &str = "parser";

    /// Logs related to [the combinators](crate::procedures::algebra).
    pub const ALGEBRA: &str = "algebra";

    /// Logs related to [canonicalization](crate::procedures::optimize).
    pub const OPTIMIZE: &str = "optimize";

    /// Logs related to [decomposition](crate::procedures::decompose) and [assumption](crate::procedures::assume).
    pub const ANALYSIS: &str = "analysis";
}
