/// Runs the compiled programs and checks their output and exit status.
mod programs {
    use std::process::{Command, Output};

    fn run(program: &str, args: &[&str]) -> Output {
        Command::new(program)
            .args(args)
            .output()
            .expect("could not start program")
    }

    fn stdout(output: &Output) -> String {
        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    fn stderr(output: &Output) -> String {
        String::from_utf8_lossy(&output.stderr).into_owned()
    }

    #[test]
    fn calc_adds() {
        let output = run(env!("CARGO_BIN_EXE_calc"), &["3", "+", "4"]);

        assert_eq!(output.status.code(), Some(0));
        assert_eq!(stdout(&output), "3 + 4 = 7\n");
    }

    #[test]
    fn calc_divides_in_floating_point() {
        let output = run(env!("CARGO_BIN_EXE_calc"), &["7", "/", "2"]);

        assert_eq!(output.status.code(), Some(0));
        assert_eq!(stdout(&output), "7 / 2 = 3.50\n");
    }

    #[test]
    fn calc_unknown_operator() {
        let output = run(env!("CARGO_BIN_EXE_calc"), &["3", "?", "4"]);

        assert_eq!(output.status.code(), Some(1));
        assert!(stdout(&output).is_empty());
        assert!(stderr(&output).contains("Operacao (?) desconhecida."));
    }

    #[test]
    fn calc_wrong_argument_count() {
        let output = run(env!("CARGO_BIN_EXE_calc"), &["3", "+"]);

        assert_eq!(output.status.code(), Some(1));
        assert!(stderr(&output).starts_with("Uso:"));
        assert!(stderr(&output).contains("(+, -, *, /)"));
    }

    #[test]
    fn flags_reports_each_flag() {
        let output = run(env!("CARGO_BIN_EXE_flags"), &["-a", "-C"]);

        assert_eq!(output.status.code(), Some(0));
        assert_eq!(
            stdout(&output),
            "A opcao a foi identificada\nA opcao C foi identificada\n"
        );
    }

    #[test]
    fn flags_rejects_unknown_flag() {
        let output = run(env!("CARGO_BIN_EXE_flags"), &["-a", "-z"]);

        assert_eq!(output.status.code(), Some(1));
        assert!(stderr(&output).contains("unrecognized option '-z'"));
        assert!(stderr(&output).contains("Usage: flags [-a] [-b] [-C] [operand ...]"));
        assert!(stderr(&output).contains("  -C  Identifica a opcao C\n"));
    }

    #[test]
    fn files_reports_values() {
        let output = run(env!("CARGO_BIN_EXE_files"), &["-a", "fileA", "-b", "fileB"]);

        assert_eq!(output.status.code(), Some(0));
        assert_eq!(
            stdout(&output),
            "A opcao a foi identificada.\n\
             Argumento da opcao a: fileA\n\
             A opcao b foi identificada.\n\
             Argumento da opcao b: fileB\n\
             Informacao indicada para a opcao A: fileA\n\
             Informacao indicada para a opcao B: fileB\n"
        );
    }

    #[test]
    fn files_marks_absent_values() {
        let output = run(env!("CARGO_BIN_EXE_files"), &["-bfileB"]);

        assert_eq!(output.status.code(), Some(0));
        assert!(stdout(&output).contains("Informacao indicada para a opcao A: (nao informada)\n"));
        assert!(stdout(&output).contains("Informacao indicada para a opcao B: fileB\n"));
    }

    #[test]
    fn files_missing_value() {
        let output = run(env!("CARGO_BIN_EXE_files"), &["-a"]);

        assert_eq!(output.status.code(), Some(1));
        assert!(stderr(&output).contains("missing required value for option '-a'"));
        assert!(stderr(&output).contains("  -a arg  Arquivo A\n"));
        assert!(stderr(&output).contains("  -b arg  Arquivo B\n"));
    }

    #[test]
    fn optscan_normalizes() {
        let output = run(
            env!("CARGO_BIN_EXE_optscan"),
            &["a:b:", "--", "pos", "-afileA", "-b", "fileB"],
        );

        assert_eq!(output.status.code(), Some(0));
        assert_eq!(stdout(&output), " -a 'fileA' -b 'fileB' -- 'pos'\n");
    }

    #[test]
    fn optscan_posix_ordering() {
        let output = run(
            env!("CARGO_BIN_EXE_optscan"),
            &["--posix", "--list", "v", "--", "-v", "pos", "-v"],
        );

        assert_eq!(output.status.code(), Some(0));
        assert_eq!(stdout(&output), "-v\n--\npos\n-v\n");
    }

    #[test]
    fn optscan_scan_error() {
        let output = run(env!("CARGO_BIN_EXE_optscan"), &["a:", "--", "-a"]);

        assert_eq!(output.status.code(), Some(1));
        assert!(stderr(&output).contains("missing required value for option '-a'"));
        assert!(stderr(&output).contains("Usage: optscan [-a arg] [operand ...]"));
        assert!(!stderr(&output).contains("<program>"));
    }

    #[test]
    fn optscan_bad_option_string() {
        let output = run(env!("CARGO_BIN_EXE_optscan"), &["aa"]);

        assert_eq!(output.status.code(), Some(2));
        assert!(stderr(&output).contains("declared more than once"));
    }
}
