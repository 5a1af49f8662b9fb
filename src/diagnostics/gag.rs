//! Speculative analysis: error gagging with rollback.
//!
//! Semantic analysis frequently tries several candidate interpretations of
//! an ambiguous construct (competing overloads, alternative implicit
//! conversions, tentative compile-time evaluation) and keeps only the one
//! that works. Diagnostics raised by the discarded attempts must not reach
//! the user or count toward the totals the driver judges the compilation
//! by, yet each attempt still has to answer "did this fail". Gagging is
//! that mechanism: while the depth is non-zero, errors are counted but not
//! printed, and a discarding exit rolls them back out of the error total.

use crate::diagnostics::context::DiagnosticContext;

/// What to do with a speculative attempt's errors on exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speculation {
    /// The attempt is being thrown away; remove its errors from the error
    /// total. The common case.
    Discard,
    /// The attempt's result is kept despite its errors; the counts stand.
    /// Rare, used for best-effort recovery.
    Keep,
}

/// State captured by [`DiagnosticContext::start_gagging`], to be handed
/// back exactly once to the matching
/// [`end_gagging`](DiagnosticContext::end_gagging).
///
/// Deliberately neither `Copy` nor `Clone`: move semantics make it
/// impossible to end the same scope twice. Nesting order itself stays
/// caller-disciplined; use [`DiagnosticContext::speculate`] when the
/// attempt fits in a closure and the pairing should be automatic.
#[derive(Debug)]
pub struct GagSnapshot {
    pub(super) depth: u32,
    pub(super) gagged_at_enter: u32,
    pub(super) rolled_back_at_enter: u32,
}

/// Outcome of a [`DiagnosticContext::speculate`] attempt.
#[derive(Debug)]
pub struct SpeculationResult<T> {
    /// Whatever the attempt closure returned.
    pub value: T,
    /// True when the attempt reported at least one error.
    pub failed: bool,
}

impl DiagnosticContext {
    /// Enters a speculative scope: diagnostics reported until the matching
    /// exit are counted but not printed.
    ///
    /// Scopes nest; each snapshot remembers the depth it restores.
    pub fn start_gagging(&mut self) -> GagSnapshot {
        let snapshot = GagSnapshot {
            depth: self.gag_depth,
            gagged_at_enter: self.gagged_errors,
            rolled_back_at_enter: self.rolled_back,
        };
        self.gag_depth += 1;
        snapshot
    }

    /// Exits the speculative scope `snapshot` belongs to and reports
    /// whether the attempt failed.
    ///
    /// Returns true iff at least one error was reported since the matching
    /// [`start_gagging`](Self::start_gagging), including errors from
    /// scopes nested inside this one, whatever their own exits decided.
    /// Warnings never influence the result.
    ///
    /// On [`Speculation::Discard`], the scope's gagged errors are removed
    /// from the error total. Inner discards are accounted for, so nested
    /// discarding never rolls the same error back twice. On
    /// [`Speculation::Keep`], the counts stand; suppressed diagnostics are
    /// resurfaced in aggregate only, never replayed verbatim.
    ///
    /// # Panics
    ///
    /// Panics when called with no speculative scope open. That is an
    /// internal consistency fault in the caller, not a reportable
    /// condition.
    pub fn end_gagging(&mut self, snapshot: GagSnapshot, outcome: Speculation) -> bool {
        assert!(
            self.gag_depth > 0,
            "internal error: end_gagging without a matching start_gagging"
        );
        self.gag_depth = snapshot.depth;

        let occurred = self.gagged_errors > snapshot.gagged_at_enter;
        if let Speculation::Discard = outcome {
            let in_scope = self.gagged_errors - snapshot.gagged_at_enter;
            let already_rolled_back = self.rolled_back - snapshot.rolled_back_at_enter;
            let to_roll_back = in_scope - already_rolled_back;
            self.errors -= to_roll_back;
            self.rolled_back += to_roll_back;
        }
        occurred
    }

    /// Runs `attempt` inside a gag scope that is guaranteed to close on
    /// every exit path of the closure, discarding the attempt's errors.
    ///
    /// Callers that want to keep a failed attempt's result use the raw
    /// [`start_gagging`](Self::start_gagging) /
    /// [`end_gagging`](Self::end_gagging) pair with [`Speculation::Keep`].
    pub fn speculate<T>(
        &mut self,
        attempt: impl FnOnce(&mut DiagnosticContext) -> T,
    ) -> SpeculationResult<T> {
        let snapshot = self.start_gagging();
        let value = attempt(self);
        let failed = self.end_gagging(snapshot, Speculation::Discard);
        SpeculationResult { value, failed }
    }
}
