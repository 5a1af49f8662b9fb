use mica::config::CompilationConfig;
use mica::diagnostics::{
    CollectingEmitter, Diagnostic, DiagnosticContext, Emitter, FileTable, SourceLocation,
    WriteEmitter, render_diagnostic, render_diagnostics, render_error_limit_notice, render_json,
    render_summary,
};

fn sample(files: &mut FileTable) -> Diagnostic {
    let file = files.intern("app.mi");
    Diagnostic::error("undefined identifier `x`").with_location(SourceLocation::new(file, 3, 14))
}

#[test]
fn renders_error_line() {
    let mut files = FileTable::new();
    let diagnostic = sample(&mut files);

    insta::assert_snapshot!(
        render_diagnostic(&diagnostic, &files, true),
        @"app.mi(3,14): error: undefined identifier `x`"
    );
}

#[test]
fn renders_warning_line_without_columns() {
    let mut files = FileTable::new();
    let file = files.intern("lib.mi");
    let diagnostic =
        Diagnostic::warning("implicit narrowing").with_location(SourceLocation::new(file, 9, 2));

    insta::assert_snapshot!(
        render_diagnostic(&diagnostic, &files, false),
        @"lib.mi(9): warning: implicit narrowing"
    );
}

#[test]
fn renders_unknown_location_bare() {
    let files = FileTable::new();
    let diagnostic = Diagnostic::error("out of memory");

    insta::assert_snapshot!(
        render_diagnostic(&diagnostic, &files, true),
        @"error: out of memory"
    );
}

#[test]
fn flags_shown_gagged_diagnostics_as_speculative() {
    let config = CompilationConfig {
        show_gagged_errors: true,
        ..CompilationConfig::default()
    };
    let sink = CollectingEmitter::new();
    let mut ctx = DiagnosticContext::with_config(&config).with_emitter(Box::new(sink.clone()));
    let file = ctx.intern_file("app.mi");

    let snapshot = ctx.start_gagging();
    ctx.report_error(SourceLocation::new(file, 5, 1), "candidate rejected")
        .unwrap();
    ctx.end_gagging(snapshot, mica::diagnostics::Speculation::Discard);

    let line = render_diagnostic(&sink.collected()[0], ctx.files(), true);
    insta::assert_snapshot!(line, @"app.mi(5,1): error: candidate rejected (speculative)");
}

#[test]
fn joins_multiple_diagnostics_one_per_line() {
    let mut files = FileTable::new();
    let file = files.intern("app.mi");
    let diagnostics = vec![
        Diagnostic::error("first").with_location(SourceLocation::new(file, 1, 1)),
        Diagnostic::warning("second").with_location(SourceLocation::new(file, 2, 1)),
    ];

    let rendered = render_diagnostics(&diagnostics, &files, true);
    assert_eq!(
        rendered,
        "app.mi(1,1): error: first\napp.mi(2,1): warning: second"
    );
}

#[test]
fn summary_stays_quiet_for_a_single_diagnostic() {
    assert_eq!(render_summary(0, 0), None);
    assert_eq!(render_summary(1, 0), None);
    assert_eq!(render_summary(0, 1), None);
}

#[test]
fn summary_counts_errors_and_warnings() {
    assert_eq!(render_summary(2, 0).as_deref(), Some("Found 2 errors."));
    assert_eq!(
        render_summary(1, 3).as_deref(),
        Some("Found 1 error and 3 warnings.")
    );
}

#[test]
fn error_limit_notice_names_the_limit() {
    assert_eq!(
        render_error_limit_notice(20),
        "stopped after 20 errors (use --max-errors to increase the limit)."
    );
    assert_eq!(
        render_error_limit_notice(1),
        "stopped after 1 error (use --max-errors to increase the limit)."
    );
}

#[test]
fn json_rendering_resolves_files_and_keeps_fields() {
    let mut files = FileTable::new();
    let file = files.intern("app.mi");
    let diagnostics = vec![
        Diagnostic::error("undefined identifier `x`")
            .with_location(SourceLocation::new(file, 3, 14)),
        Diagnostic::warning("unreachable statement"),
    ];

    let json = render_json(&diagnostics, &files);
    let rows: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(rows[0]["severity"], "error");
    assert_eq!(rows[0]["file"], "app.mi");
    assert_eq!(rows[0]["line"], 3);
    assert_eq!(rows[0]["column"], 14);
    assert_eq!(rows[0]["message"], "undefined identifier `x`");
    assert_eq!(rows[0]["gagged"], false);

    assert_eq!(rows[1]["severity"], "warning");
    assert_eq!(rows[1]["file"], serde_json::Value::Null);
    assert_eq!(rows[1]["line"], 0);
}

#[test]
fn write_emitter_renders_plain_lines_without_color() {
    let mut files = FileTable::new();
    let diagnostic = sample(&mut files);

    let mut out = Vec::new();
    {
        let mut emitter = WriteEmitter::new(&mut out).with_color(false);
        emitter.emit(&diagnostic, &files);
    }

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "app.mi(3,14): error: undefined identifier `x`\n"
    );
}

#[test]
fn write_emitter_colors_errors_when_asked() {
    let mut files = FileTable::new();
    let diagnostic = sample(&mut files);

    let mut out = Vec::new();
    {
        let mut emitter = WriteEmitter::new(&mut out).with_color(true);
        emitter.emit(&diagnostic, &files);
    }

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("\u{1b}[31m"));
    assert!(text.contains("app.mi(3,14): error: undefined identifier `x`"));
    assert!(text.contains("\u{1b}[0m"));
}
