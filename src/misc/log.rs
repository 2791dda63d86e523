/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided by the library.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [reading a problem](crate::builder)
    pub const PARSE: &str = "parse";

    /// Logs related to the [clause database](crate::db::clause), and in particular admission
    pub const CLAUSE_DB: &str = "clause_db";

    /// Logs related to [resolution](crate::procedures::resolution)
    pub const RESOLUTION: &str = "resolution";

    /// Logs related to [saturation](crate::procedures::saturate)
    pub const SATURATION: &str = "saturation";
}
