use std::fmt;

use crate::error::TestutilError;

/// Where test helpers send their failures.
///
/// `fatalf` may unwind (as [`PanicReporter`] does) or return. Helpers stop
/// work for the current call as soon as they have reported, so whatever they
/// return afterwards is a placeholder and must not be relied on.
pub trait Reporter {
    /// Marks the caller as test infrastructure.
    fn helper(&mut self);

    fn fatalf(&mut self, args: fmt::Arguments<'_>);
}

/// Reports through the standard test harness: `fatalf` panics with the
/// message and so fails the running `#[test]`.
///
/// Helpers are `#[track_caller]`, so the panic location is the line in the
/// test that called them and `helper` has nothing left to do.
#[derive(Debug, Default, Clone, Copy)]
pub struct PanicReporter;

impl Reporter for PanicReporter {
    fn helper(&mut self) {}

    #[track_caller]
    fn fatalf(&mut self, args: fmt::Arguments<'_>) {
        panic!("{}", args)
    }
}

#[track_caller]
pub(crate) fn report<T>(t: &mut T, error: TestutilError) where T: Reporter + ?Sized {
    t.fatalf(format_args!("{}", error))
}
