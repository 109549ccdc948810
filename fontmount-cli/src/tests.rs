use super::*;
use clap::CommandFactory;
use std::fs;
use tempfile::tempdir;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).expect("parse cli")
}

#[test]
fn default_task_is_help() {
    let cli = parse(&["fontmount"]);
    assert_eq!(cli.task(), CliTask::Help);

    let cli = parse(&["fontmount", "stray.ttf"]);
    assert_eq!(cli.task(), CliTask::Help);
}

#[test]
fn last_task_flag_wins() {
    assert_eq!(parse(&["fontmount", "-a", "-r", "x.ttf"]).task(), CliTask::Remove);
    assert_eq!(parse(&["fontmount", "-r", "-a", "x.ttf"]).task(), CliTask::Add);
    assert_eq!(parse(&["fontmount", "-a", "-v"]).task(), CliTask::Version);
    assert_eq!(parse(&["fontmount", "-v", "-r", "x.ttf"]).task(), CliTask::Remove);
    assert_eq!(parse(&["fontmount", "--add", "--remove", "x.ttf"]).task(), CliTask::Remove);
}

#[test]
fn debug_flag_is_orthogonal_to_the_task() {
    let cli = parse(&["fontmount", "-d"]);
    assert_eq!(cli.task(), CliTask::Help);
    assert!(cli.debug);

    let cli = parse(&["fontmount", "-a", "-d", "x.ttf"]);
    assert_eq!(cli.task(), CliTask::Add);
    assert!(cli.debug);
}

#[test]
fn json_and_ndjson_conflict() {
    let parsed = Cli::try_parse_from(["fontmount", "-a", "--json", "--ndjson", "x.ttf"]);
    assert!(parsed.is_err());
}

#[test]
fn positionals_keep_their_order() {
    let cli = parse(&["fontmount", "-a", "b.ttf", "a.ttf", "m.pfm|o.pfb"]);
    assert_eq!(cli.fonts, vec!["b.ttf", "a.ttf", "m.pfm|o.pfb"]);
}

#[test]
fn help_text_lists_the_task_flags() {
    let help = Cli::command().render_long_help().to_string();
    assert!(help.contains("--add"));
    assert!(help.contains("--remove"));
    assert!(help.contains("--version"));
    assert!(help.contains("--debug"));
}

#[test]
fn write_plain_splits_successes_and_failures() {
    let reports = vec![
        RegistrationReport {
            spec: "good.ttf".to_string(),
            result: RegistrationResult::Registered,
            error: None,
        },
        RegistrationReport {
            spec: "bad.ttf".to_string(),
            result: RegistrationResult::OperationFailed,
            error: Some("no such file: bad.ttf".to_string()),
        },
    ];

    let mut out = Vec::new();
    let mut err = Vec::new();
    write_plain(&reports, Task::Add, &mut out, &mut err).expect("write");

    let out = String::from_utf8(out).expect("utf8");
    let err = String::from_utf8(err).expect("utf8");
    assert_eq!(out, "Added font good.ttf\n");
    assert_eq!(err, "Error adding bad.ttf: no such file: bad.ttf\n");
}

#[test]
fn write_plain_uses_remove_verbs() {
    let reports = vec![
        RegistrationReport {
            spec: "gone.ttf".to_string(),
            result: RegistrationResult::Unregistered,
            error: None,
        },
        RegistrationReport {
            spec: "stuck.ttf".to_string(),
            result: RegistrationResult::OperationFailed,
            error: Some("font manager refused to remove stuck.ttf".to_string()),
        },
    ];

    let mut out = Vec::new();
    let mut err = Vec::new();
    write_plain(&reports, Task::Remove, &mut out, &mut err).expect("write");

    assert_eq!(String::from_utf8(out).expect("utf8"), "Removed font gone.ttf\n");
    assert!(String::from_utf8(err).expect("utf8").starts_with("Error removing stuck.ttf"));
}

#[test]
fn expand_globs_expands_wildcard_patterns() {
    let tmp = tempdir().expect("tempdir");
    for name in ["one.ttf", "two.ttf", "skip.txt"] {
        fs::write(tmp.path().join(name), b"").expect("touch file");
    }

    let pattern = format!("{}/*.ttf", tmp.path().display());
    let fonts = expand_globs(&[pattern]);

    assert_eq!(fonts.len(), 2);
    assert!(fonts.iter().any(|f| f.ends_with("one.ttf")));
    assert!(fonts.iter().any(|f| f.ends_with("two.ttf")));
}

#[test]
fn expand_globs_keeps_pairs_and_dead_patterns_verbatim() {
    let pair = "a*.pfm|b.pfb".to_string();
    let dead = "/nonexistent/fontmount-test/*.ttf".to_string();
    let plain = "c.ttf".to_string();

    let fonts = expand_globs(&[pair.clone(), dead.clone(), plain.clone()]);
    assert_eq!(fonts, vec![pair, dead, plain]);
}
