use tacc::driver::{self, Options};
use tacc::lexer::TokenKind;
use tacc::{compile, CompileError};

const PROGRAM: &str = "
    let x = 10
    let y = 20
    let z = x + y
    print z
";

fn report(input: &str, options: &Options) -> (bool, String) {
    let mut out = Vec::new();
    let ok = driver::run(input, options, &mut out).unwrap();
    (ok, String::from_utf8(out).unwrap())
}

fn listing(code: &[tacc::ir::Instruction]) -> Vec<String> {
    code.iter().map(ToString::to_string).collect()
}

#[test]
fn reference_program() {
    let compilation = compile(PROGRAM).unwrap();

    assert_eq!(
        listing(compilation.context.code()),
        vec!["x = 10", "y = 20", "t1 = x + y", "z = t1", "print z"]
    );
    assert_eq!(
        listing(&compilation.optimized),
        vec!["x = 10", "y = 20", "z = x + y", "print z"]
    );
    assert_eq!(
        compilation.assembly.lines().collect::<Vec<_>>(),
        vec![
            "mov x, 10",
            "mov y, 20",
            "mov r0, x",
            "mov r1, y",
            "add r0, r1",
            "str r0, z",
            "print z"
        ]
    );
}

#[test]
fn semicolon_separated_program() {
    let compilation = compile("let x = 10; let y = 20; let z = x + y; print z").unwrap();
    assert_eq!(
        listing(&compilation.optimized),
        vec!["x = 10", "y = 20", "z = x + y", "print z"]
    );
    assert!(compilation.assembly.ends_with("add r0, r1\nstr r0, z\nprint z\n"));
}

#[test]
fn tokens_are_returned() {
    let compilation = compile("let x1 = 2 + 3").unwrap();
    let kinds: Vec<_> = compilation.tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Keyword,
            TokenKind::Identifier,
            TokenKind::Operator,
            TokenKind::Number,
            TokenKind::Operator,
            TokenKind::Number
        ]
    );
    assert_eq!(listing(&compilation.optimized), vec!["x1 = 5"]);
}

#[test]
fn negative_intermediate_stays_symbolic() {
    let compilation = compile("let a = 1 - 2 - 3\nprint a").unwrap();
    assert_eq!(listing(&compilation.optimized), vec!["a = 1 - -1", "print a"]);
    assert_eq!(
        compilation.assembly.lines().collect::<Vec<_>>(),
        vec!["mov a, 1 - -1", "print a"]
    );
}

#[test]
fn compile_error_stops_pipeline() {
    let err = compile("let x = 1 print y").unwrap_err();
    assert_eq!(err, CompileError::UndeclaredVariable { name: "y".into() });
}

#[test]
fn empty_program() {
    let compilation = compile("").unwrap();
    assert!(compilation.tokens.is_empty());
    assert!(compilation.optimized.is_empty());
    assert_eq!(compilation.assembly, "");
}

#[test]
fn repeated_compilations_are_independent() {
    let first = compile("let a = x + y").unwrap();
    let second = compile("let b = x + y").unwrap();
    assert_eq!(first.context.temp_count(), 1);
    assert_eq!(second.context.temp_count(), 1);
    assert_eq!(listing(second.context.code())[0], "t1 = x + y");
}

#[test]
fn driver_report() {
    let options = Options {
        show_tokens: false,
        ..Options::default()
    };
    let (ok, out) = report(PROGRAM, &options);

    assert!(ok);
    assert_eq!(
        out,
        "\nPerforming Lexical Analysis...\n\
         \nPerforming Syntax and Semantic Analysis...\n\
         Syntax and Semantic Analysis Passed: No Errors!\n\
         \nOptimized Intermediate Code:\n\
         x = 10\ny = 20\nz = x + y\nprint z\n\
         \nGenerated Assembly Code:\n\
         mov x, 10\nmov y, 20\nmov r0, x\nmov r1, y\nadd r0, r1\nstr r0, z\nprint z\n"
    );
}

#[test]
fn driver_lists_tokens() {
    let (ok, out) = report("print", &Options::default());

    assert!(!ok);
    assert!(out.contains("\nTokens:\nType: KEYWORD, Value: print\n"));
    assert!(out.ends_with("Syntax Error: Invalid print statement.\n"));
}

#[test]
fn driver_stops_on_error() {
    let (ok, out) = report("let x = 1\nprint y", &Options::default());

    assert!(!ok);
    assert!(out.contains("Semantic Error: Variable 'y' used before declaration in print."));
    assert!(!out.contains("Passed"));
    assert!(!out.contains("Optimized Intermediate Code"));
    assert!(!out.contains("Generated Assembly Code"));
}

#[test]
fn driver_without_optimization() {
    let options = Options {
        show_tokens: false,
        show_intermediate: false,
        optimize: false,
    };
    let (ok, out) = report("let z = x + y", &options);

    assert!(ok);
    assert!(out.contains("\nIntermediate Code:\nt1 = x + y\nz = t1\n"));
    assert!(!out.contains("Optimized Intermediate Code"));
    assert!(out.ends_with(
        "\nGenerated Assembly Code:\nmov r0, x\nmov r1, y\nadd r0, r1\nstr r0, t1\nmov z, t1\n"
    ));
}

#[test]
fn driver_shows_both_listings() {
    let options = Options {
        show_tokens: false,
        show_intermediate: true,
        optimize: true,
    };
    let (_, out) = report("let z = x + y", &options);

    let unoptimized = out.find("\nIntermediate Code:\nt1 = x + y\nz = t1\n").unwrap();
    let optimized = out.find("\nOptimized Intermediate Code:\nz = x + y\n").unwrap();
    assert!(unoptimized < optimized);
}
