use std::fs;

use nix::sys::signal::Signal;
use psush_core::Context;
use psush_exec::{ExecReport, Executor, ProcessStatus};

fn execute(line: &str, context: &mut Context) -> ExecReport {
    let pipeline = psush_parse::parse(line).expect("line should parse");
    Executor::default()
        .execute(&pipeline, context)
        .expect("pipeline should execute")
}

fn statuses(report: &ExecReport) -> Vec<ProcessStatus> {
    report.segments.iter().map(|segment| segment.status).collect()
}

#[test]
fn single_command_creates_no_pipe() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let mut context = Context::default();

    let report = execute(&format!("printf hi > {}", out.display()), &mut context);

    assert_eq!(report.pipes_created, 0);
    assert_eq!(statuses(&report), vec![ProcessStatus::Exited(0)]);
    assert_eq!(fs::read_to_string(out).unwrap(), "hi");
}

#[test]
fn pipes_preserve_content() {
    let dir = tempfile::tempdir().unwrap();
    let direct = dir.path().join("direct");
    let piped = dir.path().join("piped");
    let mut context = Context::default();

    execute(&format!("printf hi > {}", direct.display()), &mut context);
    let report = execute(&format!("printf hi | cat | cat > {}", piped.display()), &mut context);

    assert_eq!(report.pipes_created, 2);
    assert_eq!(report.segments.len(), 3);
    assert_eq!(
        fs::read(piped).unwrap(),
        fs::read(direct).unwrap(),
        "piping should neither lose nor duplicate bytes"
    );
}

#[test]
fn input_redirect_feeds_the_first_command() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in");
    let out = dir.path().join("out");
    fs::write(&input, "b\na\nc\n").unwrap();
    let mut context = Context::default();

    let report = execute(
        &format!("sort < {} | head -n 2 > {}", input.display(), out.display()),
        &mut context,
    );

    assert_eq!(statuses(&report), vec![ProcessStatus::Exited(0); 2]);
    assert_eq!(fs::read_to_string(out).unwrap(), "a\nb\n");
}

#[test]
fn large_output_does_not_deadlock() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let mut context = Context::default();

    execute(
        &format!("head -c 1000000 /dev/zero | wc -c > {}", out.display()),
        &mut context,
    );

    assert_eq!(fs::read_to_string(out).unwrap().trim(), "1000000");
}

#[test]
fn quoted_arguments_reach_the_program() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let mut context = Context::default();

    execute(&format!("printf %s%s%s a b 'c > {}", out.display()), &mut context);

    assert_eq!(fs::read_to_string(out).unwrap(), "abc");
}

#[test]
fn failed_output_redirect_exits_with_reserved_code() {
    let mut context = Context::default();

    let report = execute("ls > /no/such/dir/file", &mut context);

    assert_eq!(statuses(&report), vec![ProcessStatus::Exited(7)]);
    assert_eq!(context.last_exit(), 7);
}

#[test]
fn failed_input_redirect_does_not_stop_siblings() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let mut context = Context::default();

    let report = execute(
        &format!("cat < /no/such/file | printf ok > {}", out.display()),
        &mut context,
    );

    assert_eq!(
        statuses(&report),
        vec![ProcessStatus::Exited(7), ProcessStatus::Exited(0)]
    );
    assert_eq!(fs::read_to_string(out).unwrap(), "ok");
}

#[test]
fn writers_to_a_closed_pipe_die_by_sigpipe() {
    let mut context = Context::default();

    let report = execute("yes | head -n 1", &mut context);

    assert_eq!(
        statuses(&report),
        vec![ProcessStatus::Signaled(Signal::SIGPIPE), ProcessStatus::Exited(0)]
    );
}

#[test]
fn unknown_program_exits_with_reserved_code() {
    let mut context = Context::default();

    let report = execute("psush-test-no-such-program --flag", &mut context);

    assert_eq!(statuses(&report), vec![ProcessStatus::Exited(127)]);
}

#[test]
fn program_exit_codes_pass_through() {
    let mut context = Context::default();

    let report = execute("sh -c 'exit' | false", &mut context);

    assert_eq!(
        statuses(&report),
        vec![ProcessStatus::Exited(0), ProcessStatus::Exited(1)]
    );
    assert_eq!(report.exit_code(), Some(1));
}

#[test]
fn lone_pipe_launches_nothing() {
    let mut context = Context::default();

    let report = execute("|", &mut context);

    assert!(report.segments.is_empty());
    assert_eq!(report.pipes_created, 0);
}

#[test]
fn empty_segments_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let mut context = Context::default();

    let report = execute(&format!("printf hi | | cat > {}", out.display()), &mut context);

    assert_eq!(report.pipes_created, 1);
    let positions: Vec<_> = report.segments.iter().map(|s| s.position).collect();
    assert_eq!(positions, vec![0, 2]);
    assert_eq!(fs::read_to_string(out).unwrap(), "hi");
}

#[test]
fn builtins_in_longer_pipelines_are_launched_as_programs() {
    let mut context = Context::default();
    for builtin in psush_builtins::all_builtins() {
        context.register_builtin(builtin);
    }

    let report = execute("bye | cat", &mut context);

    assert_eq!(report.exit_request, None);
    assert_eq!(report.segments[0].status, ProcessStatus::Exited(127));
}

#[test]
fn single_builtins_run_in_process() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let mut context = Context::default();
    for builtin in psush_builtins::all_builtins() {
        context.register_builtin(builtin);
    }

    let report = execute(&format!("echo a b 'c > {}", out.display()), &mut context);
    assert!(report.segments.is_empty());
    assert_eq!(report.builtin_code, Some(0));
    assert_eq!(fs::read_to_string(out).unwrap(), "a b c\n");

    let report = execute("bye", &mut context);
    assert_eq!(report.exit_request, Some(0));
}
