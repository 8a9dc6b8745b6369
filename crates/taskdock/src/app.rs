use clap::{Arg, ArgAction, Command};
use clap_complete::Shell;

pub fn build_cli() -> Command {
    Command::new("taskdock")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Find installed applications and manage open desktop windows")
        .long_about("taskdock resolves application names to executable paths (search path, installed-application registry, store aliases, install directories) and lists, groups and focuses the desktop's top-level windows.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("resolve")
                .about("Resolve application names to executable paths")
                .arg(
                    Arg::new("names")
                        .help("Application names or paths (e.g. notepad, code.exe, C:\\Tools\\tool.exe)")
                        .required(true)
                        .num_args(1..)
                        .index(1)
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
                .arg(
                    Arg::new("stats")
                        .long("stats")
                        .help("Print resolution cache statistics after resolving")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("run")
                .about("Resolve an application and launch it detached")
                .arg(
                    Arg::new("name")
                        .help("Application name or path")
                        .required(true)
                        .index(1)
                )
                .arg(
                    Arg::new("args")
                        .help("Arguments passed to the application")
                        .num_args(0..)
                        .trailing_var_arg(true)
                        .allow_hyphen_values(true)
                        .index(2)
                )
        )
        .subcommand(
            Command::new("windows")
                .about("List open top-level windows")
                .arg(
                    Arg::new("grouped")
                        .long("grouped")
                        .short('g')
                        .help("Group windows by process name")
                        .action(ArgAction::SetTrue)
                )
                .arg(
                    Arg::new("apps")
                        .long("apps")
                        .help("List running applications only (no per-window detail)")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("grouped")
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("focus")
                .about("Bring a window to the foreground")
                .arg(
                    Arg::new("handle")
                        .help("Window handle as printed by 'taskdock windows'")
                        .required(true)
                        .allow_hyphen_values(true)
                        .index(1)
                )
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(
                    Arg::new("shell")
                        .help("Target shell")
                        .required(true)
                        .value_parser(clap::value_parser!(Shell))
                        .index(1)
                )
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_build() {
        let app = build_cli();
        assert_eq!(app.get_name(), "taskdock");
    }

    #[test]
    fn test_cli_resolve_multiple_names() {
        let app = build_cli();
        let matches = app
            .try_get_matches_from(vec!["taskdock", "resolve", "notepad", "code", "--json"])
            .unwrap();

        let resolve_matches = matches.subcommand_matches("resolve").unwrap();
        let names: Vec<&String> = resolve_matches.get_many::<String>("names").unwrap().collect();
        assert_eq!(names, ["notepad", "code"]);
        assert!(resolve_matches.get_flag("json"));
        assert!(!resolve_matches.get_flag("stats"));
    }

    #[test]
    fn test_cli_resolve_requires_name() {
        let app = build_cli();
        assert!(app.try_get_matches_from(vec!["taskdock", "resolve"]).is_err());
    }

    #[test]
    fn test_cli_run_with_trailing_args() {
        let app = build_cli();
        let matches = app
            .try_get_matches_from(vec!["taskdock", "run", "code", ".", "--new-window"])
            .unwrap();

        let run_matches = matches.subcommand_matches("run").unwrap();
        assert_eq!(run_matches.get_one::<String>("name").unwrap(), "code");
        let args: Vec<&String> = run_matches.get_many::<String>("args").unwrap().collect();
        assert_eq!(args, [".", "--new-window"]);
    }

    #[test]
    fn test_cli_windows_flags() {
        let app = build_cli();
        let matches = app
            .try_get_matches_from(vec!["taskdock", "windows", "--grouped", "--json"])
            .unwrap();

        let windows_matches = matches.subcommand_matches("windows").unwrap();
        assert!(windows_matches.get_flag("grouped"));
        assert!(windows_matches.get_flag("json"));
        assert!(!windows_matches.get_flag("apps"));
    }

    #[test]
    fn test_cli_windows_grouped_conflicts_with_apps() {
        let app = build_cli();
        let result = app.try_get_matches_from(vec!["taskdock", "windows", "--grouped", "--apps"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_focus_handle() {
        let app = build_cli();
        let matches = app
            .try_get_matches_from(vec!["taskdock", "focus", "132456"])
            .unwrap();

        let focus_matches = matches.subcommand_matches("focus").unwrap();
        assert_eq!(focus_matches.get_one::<String>("handle").unwrap(), "132456");
    }

    #[test]
    fn test_cli_completions_shell() {
        let app = build_cli();
        let matches = app
            .try_get_matches_from(vec!["taskdock", "completions", "bash"])
            .unwrap();

        let completions_matches = matches.subcommand_matches("completions").unwrap();
        assert_eq!(
            completions_matches.get_one::<Shell>("shell"),
            Some(&Shell::Bash)
        );
    }

    #[test]
    fn test_cli_completions_rejects_unknown_shell() {
        let app = build_cli();
        assert!(
            app.try_get_matches_from(vec!["taskdock", "completions", "tcsh"])
                .is_err()
        );
    }

    #[test]
    fn test_cli_verbose_is_global() {
        let app = build_cli();
        let matches = app
            .try_get_matches_from(vec!["taskdock", "windows", "-v"])
            .unwrap();
        assert!(matches.get_flag("verbose"));
    }
}
