use mica::diagnostics::{
    CollectingEmitter, DiagnosticContext, SourceLocation, Speculation,
};

fn loc(ctx: &mut DiagnosticContext, line: u32, column: u32) -> SourceLocation {
    let file = ctx.intern_file("resolve.mi");
    SourceLocation::new(file, line, column)
}

#[test]
fn balanced_nesting_restores_depth() {
    let mut ctx = DiagnosticContext::new();
    assert_eq!(ctx.gag_depth(), 0);

    let outer = ctx.start_gagging();
    assert_eq!(ctx.gag_depth(), 1);
    let inner = ctx.start_gagging();
    assert_eq!(ctx.gag_depth(), 2);

    ctx.end_gagging(inner, Speculation::Discard);
    assert_eq!(ctx.gag_depth(), 1);
    ctx.end_gagging(outer, Speculation::Discard);
    assert_eq!(ctx.gag_depth(), 0);
}

#[test]
fn exit_reports_failure_iff_an_error_was_reported() {
    let mut ctx = DiagnosticContext::new();
    let at = loc(&mut ctx, 1, 1);

    let clean = ctx.start_gagging();
    assert!(!ctx.end_gagging(clean, Speculation::Discard));

    let failing = ctx.start_gagging();
    ctx.report_error(at, "no viable candidate").unwrap();
    assert!(ctx.end_gagging(failing, Speculation::Discard));

    // Warnings never influence the verdict.
    let warned = ctx.start_gagging();
    ctx.report_warning(at, "suspicious shadowing").unwrap();
    assert!(!ctx.end_gagging(warned, Speculation::Discard));
}

#[test]
fn discard_rolls_back_exactly_the_scope_errors() {
    let mut ctx = DiagnosticContext::new();
    let at = loc(&mut ctx, 2, 5);

    ctx.report_error(at, "outside the attempt").unwrap();
    assert_eq!(ctx.error_count(), 1);

    let snapshot = ctx.start_gagging();
    ctx.report_error(at, "first speculative failure").unwrap();
    ctx.report_error(at, "second speculative failure").unwrap();
    assert_eq!(ctx.error_count(), 3);

    assert!(ctx.end_gagging(snapshot, Speculation::Discard));
    assert_eq!(ctx.error_count(), 1);

    ctx.report_error(at, "outside again").unwrap();
    assert_eq!(ctx.error_count(), 2);
}

#[test]
fn discarded_attempt_emits_nothing() {
    let sink = CollectingEmitter::new();
    let mut ctx = DiagnosticContext::new().with_emitter(Box::new(sink.clone()));
    let at = loc(&mut ctx, 7, 3);

    let snapshot = ctx.start_gagging();
    assert_eq!(ctx.gag_depth(), 1);
    ctx.report_error(at, "candidate A does not apply").unwrap();
    ctx.report_error(at, "candidate B does not apply").unwrap();
    assert_eq!(ctx.error_count(), 2);
    assert!(sink.is_empty());

    assert!(ctx.end_gagging(snapshot, Speculation::Discard));
    assert_eq!(ctx.error_count(), 0);
    assert_eq!(ctx.gag_depth(), 0);
    assert!(sink.is_empty());
}

#[test]
fn nested_discards_never_roll_back_twice() {
    let mut ctx = DiagnosticContext::new();
    let at = loc(&mut ctx, 4, 9);

    let outer = ctx.start_gagging();
    ctx.report_error(at, "outer attempt failure").unwrap();

    let inner = ctx.start_gagging();
    ctx.report_error(at, "inner attempt failure").unwrap();
    assert_eq!(ctx.error_count(), 2);

    assert!(ctx.end_gagging(inner, Speculation::Discard));
    assert_eq!(ctx.error_count(), 1);

    assert!(ctx.end_gagging(outer, Speculation::Discard));
    assert_eq!(ctx.error_count(), 0);
}

#[test]
fn outer_scope_observes_inner_errors() {
    let mut ctx = DiagnosticContext::new();
    let at = loc(&mut ctx, 10, 1);

    let outer = ctx.start_gagging();
    let inner = ctx.start_gagging();
    ctx.report_error(at, "inner failure").unwrap();
    assert!(ctx.end_gagging(inner, Speculation::Discard));
    assert_eq!(ctx.gag_depth(), 1);

    // The inner attempt was discarded, but the outer attempt still failed.
    assert!(ctx.end_gagging(outer, Speculation::Discard));
    assert_eq!(ctx.error_count(), 0);
}

#[test]
fn keep_preserves_the_counts() {
    let mut ctx = DiagnosticContext::new();
    let at = loc(&mut ctx, 3, 2);

    let snapshot = ctx.start_gagging();
    ctx.report_error(at, "recoverable failure").unwrap();
    ctx.report_error(at, "second recoverable failure").unwrap();

    assert!(ctx.end_gagging(snapshot, Speculation::Keep));
    assert_eq!(ctx.error_count(), 2);
}

#[test]
fn kept_inner_attempt_still_discards_with_the_outer() {
    let mut ctx = DiagnosticContext::new();
    let at = loc(&mut ctx, 8, 8);

    let outer = ctx.start_gagging();
    let inner = ctx.start_gagging();
    ctx.report_error(at, "inner failure").unwrap();
    assert!(ctx.end_gagging(inner, Speculation::Keep));
    assert_eq!(ctx.error_count(), 1);

    assert!(ctx.end_gagging(outer, Speculation::Discard));
    assert_eq!(ctx.error_count(), 0);
}

#[test]
fn speculate_closes_the_scope_and_reports_failure() {
    let mut ctx = DiagnosticContext::new();
    let at = loc(&mut ctx, 5, 5);

    let attempt = ctx.speculate(|ctx| {
        ctx.report_error(at, "conversion not possible").unwrap();
        42
    });

    assert_eq!(attempt.value, 42);
    assert!(attempt.failed);
    assert_eq!(ctx.gag_depth(), 0);
    assert_eq!(ctx.error_count(), 0);
}

#[test]
fn speculate_succeeds_without_errors() {
    let mut ctx = DiagnosticContext::new();

    let attempt = ctx.speculate(|_ctx| "resolved");

    assert_eq!(attempt.value, "resolved");
    assert!(!attempt.failed);
    assert_eq!(ctx.gag_depth(), 0);
}

#[test]
fn increase_error_count_is_gag_aware() {
    let mut ctx = DiagnosticContext::new();

    let snapshot = ctx.start_gagging();
    ctx.increase_error_count();
    assert_eq!(ctx.error_count(), 1);

    assert!(ctx.end_gagging(snapshot, Speculation::Discard));
    assert_eq!(ctx.error_count(), 0);

    ctx.increase_error_count();
    assert_eq!(ctx.error_count(), 1);
}

#[test]
#[should_panic(expected = "end_gagging without a matching start_gagging")]
fn out_of_order_exit_is_an_internal_fault() {
    let mut ctx = DiagnosticContext::new();

    let first = ctx.start_gagging();
    let second = ctx.start_gagging();

    // Exiting the outer scope first restores depth 0; the leftover inner
    // snapshot no longer has a scope to close.
    ctx.end_gagging(first, Speculation::Discard);
    ctx.end_gagging(second, Speculation::Discard);
}
