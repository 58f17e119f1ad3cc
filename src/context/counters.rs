/// Counts for various things which count, roughly.
#[derive(Clone, Debug, Default)]
pub struct Counters {
    /// A count of every statement processed by the context.
    ///
    /// This is also the index given to the next statement processed.
    pub statements: usize,

    /// A count of statements which failed.
    pub failures: usize,

    /// A count of evaluate statements which succeeded.
    pub evaluations: usize,

    /// A count of adequate statements which succeeded.
    pub adequacy_checks: usize,
}
