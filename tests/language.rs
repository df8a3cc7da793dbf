use std::fs;

use indoscript::{
    Status,
    interpreter::{
        evaluator::core::Interpreter,
        lexer::{Token, TokenKind},
        value::core::Value,
    },
    needs_more_input, run,
};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

#[test]
fn sample_scripts_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "indos"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                              panic!("Failed to read \
                                                                      {expected_path:?}: {e}")
                                                          });

        count += 1;
        let (status, out, err) = execute(&source);
        assert_eq!(status, Status::Completed, "{path:?} failed:\n{err}");
        assert_eq!(out, expected, "{path:?} printed unexpected output");
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

fn execute(src: &str) -> (Status, String, String) {
    let mut interpreter = Interpreter::new(Vec::new(), Vec::new());
    let status = run(src, &mut interpreter);
    let (out, err) = interpreter.into_sinks();
    (status,
     String::from_utf8(out).expect("output is UTF-8"),
     String::from_utf8(err).expect("diagnostics are UTF-8"))
}

fn assert_output(src: &str, expected: &str) {
    let (status, out, err) = execute(src);
    assert_eq!(status, Status::Completed, "Script failed:\n{err}");
    assert_eq!(out, expected);
}

fn assert_runtime_error(src: &str, expected: &str) {
    let (status, _, err) = execute(src);
    assert_eq!(status, Status::RuntimeError);
    assert_eq!(err, format!("{expected}\n"));
}

fn assert_syntax_error(src: &str) -> Vec<String> {
    let (status, out, err) = execute(src);
    assert_eq!(status, Status::SyntaxError);
    assert_eq!(out, "", "a program with syntax errors must not run");
    err.lines().map(str::to_string).collect()
}

#[test]
fn precedence_and_associativity() {
    assert_output("cetak 1 + 2 * 3;", "7\n");
    assert_output("cetak 8 - 3 - 2;", "3\n");
    assert_output("cetak (1 + 2) * 3;", "9\n");
    assert_output("cetak 16 / 4 / 2;", "2\n");
    assert_output("cetak -2 * -3;", "6\n");
    assert_output("cetak 1 < 2 == 2 < 3;", "benar\n");
}

#[test]
fn numbers_print_in_shortest_form() {
    assert_output("cetak 10 / 4;", "2.5\n");
    assert_output("cetak 3.0;", "3\n");
    assert_output("cetak 0.1 + 0.2;", "0.30000000000000004\n");
}

#[test]
fn string_concatenation() {
    assert_output("cetak \"a\" + \"b\";", "ab\n");
    assert_runtime_error("cetak \"a\" + 1;",
                         "[line 1] Runtime error at '+': Operands of '+' must be two numbers or \
                          two strings, got string and number.");
}

#[test]
fn arithmetic_requires_numbers() {
    assert_runtime_error("cetak benar * 2;",
                         "[line 1] Runtime error at '*': Operands of '*' must be numbers, got \
                          boolean and number.");
    assert_runtime_error("\n\ncetak -kosong;",
                         "[line 3] Runtime error at '-': Operand of '-' must be a number, got \
                          nil.");
}

#[test]
fn block_scoping() {
    assert_runtime_error("{ misal a = 1; }\ncetak a;",
                         "[line 2] Runtime error at 'a': Undefined variable 'a'.");
    assert_output("misal a = 1; { { a = 2; } } cetak a;", "2\n");
    assert_output("misal a = 1; { misal a = 5; cetak a; } cetak a;", "5\n1\n");
}

#[test]
fn bare_assignment_declares_unbound_names() {
    assert_output("x = 1;\ncetak x;", "1\n");
    assert_output("x = 1; x = x + 1; cetak x;", "2\n");
    assert_runtime_error("{ y = 2; }\ncetak y;",
                         "[line 2] Runtime error at 'y': Undefined variable 'y'.");
}

#[test]
fn truthiness() {
    assert_output("jika 0 { cetak \"t\"; } lain { cetak \"f\"; }", "f\n");
    assert_output("jika \"\" { cetak \"t\"; } lain { cetak \"f\"; }", "f\n");
    assert_output("jika kosong { cetak \"t\"; } lain { cetak \"f\"; }", "f\n");
    assert_output("jika -1 { cetak \"t\"; } lain { cetak \"f\"; }", "t\n");
    assert_output("jika \"0\" { cetak \"t\"; } lain { cetak \"f\"; }", "t\n");
    assert_output("cetak !!\"x\";", "benar\n");
    assert_output("cetak !0;", "benar\n");
}

#[test]
fn equality_never_coerces() {
    assert_output("cetak 1 == \"1\";", "salah\n");
    assert_output("cetak kosong == kosong;", "benar\n");
    assert_output("cetak salah == kosong;", "salah\n");
    assert_output("cetak \"ab\" == \"a\" + \"b\";", "benar\n");
    assert_output("fungsi f() {} misal g = f; cetak f == g;", "benar\n");
}

#[test]
fn logical_operators_short_circuit() {
    let src = "fungsi efek() { cetak \"dipanggil\"; balikin benar; }\n\
               cetak salah dan efek();\n\
               cetak benar atau efek();\n\
               cetak kosong atau efek();";
    assert_output(src, "salah\nbenar\ndipanggil\nbenar\n");
}

#[test]
fn functions_return_values() {
    assert_output("fungsi tambah(a, b) { balikin a + b; } cetak tambah(2, 3);", "5\n");
    assert_output("fungsi f() { balikin; } cetak f();", "kosong\n");
    assert_output("fungsi f() { misal x = 1; } cetak f();", "kosong\n");
    assert_output("fungsi f() { balikin 1; cetak \"tidak\"; } cetak f();", "1\n");
    assert_output("fungsi halo() {} cetak halo;", "<fungsi halo>\n");
}

#[test]
fn calling_a_non_function_fails_at_the_call_site() {
    assert_runtime_error("misal x = 1;\nx();",
                         "[line 2] Runtime error at ')': Can only call functions.");
    assert_runtime_error("\"teks\"(1, 2);",
                         "[line 1] Runtime error at ')': Can only call functions.");
}

#[test]
fn argument_count_is_checked() {
    assert_runtime_error("fungsi f(a) {} f(1, 2);",
                         "[line 1] Runtime error at ')': Expected 1 arguments but got 2.");
    assert_runtime_error("fungsi f(a, b) {} f(1);",
                         "[line 1] Runtime error at ')': Expected 2 arguments but got 1.");
}

#[test]
fn closures_capture_their_declaring_scope() {
    let src = "fungsi luar() {\n\
                   misal rahasia = \"tertutup\";\n\
                   fungsi dalam() { balikin rahasia; }\n\
                   balikin dalam;\n\
               }\n\
               cetak luar()();";
    assert_output(src, "tertutup\n");
}

#[test]
fn loop_iterations_get_fresh_scopes() {
    let src = "misal i = 0;\n\
               misal jumlah = 0;\n\
               selama i < 3 {\n\
                   misal lokal = i * 2;\n\
                   jumlah = jumlah + lokal;\n\
                   i = i + 1;\n\
               }\n\
               cetak jumlah;";
    assert_output(src, "6\n");

    let src = "misal i = 0;\n\
               misal f = kosong;\n\
               misal g = kosong;\n\
               selama i < 2 {\n\
                   misal salinan = i;\n\
                   fungsi ambil() { balikin salinan; }\n\
                   jika i == 0 { f = ambil; } lain { g = ambil; }\n\
                   i = i + 1;\n\
               }\n\
               cetak f();\n\
               cetak g();";
    assert_output(src, "0\n1\n");

    assert_runtime_error("misal i = 0; selama i < 1 { misal lokal = 1; i = i + 1; } cetak lokal;",
                         "[line 1] Runtime error at 'lokal': Undefined variable 'lokal'.");
}

#[test]
fn runtime_errors_stop_execution_but_keep_earlier_output() {
    let (status, out, err) = execute("cetak 1;\ncetak y;\ncetak 2;");
    assert_eq!(status, Status::RuntimeError);
    assert_eq!(out, "1\n");
    assert_eq!(err, "[line 2] Runtime error at 'y': Undefined variable 'y'.\n");
}

#[test]
fn top_level_return_is_a_runtime_error() {
    assert_runtime_error("{ balikin 1; }",
                         "[line 1] Runtime error at 'balikin': Cannot return from top-level code.");
}

#[test]
fn parser_reports_every_independent_error() {
    let errors = assert_syntax_error("cetak 1 +;\ncetak (2;\ncetak 3;");
    assert_eq!(errors,
               vec!["[line 1] Error at ';': Expect expression.",
                    "[line 2] Error at ';': Expect ')' after expression."]);
}

#[test]
fn parser_reports_errors_at_the_end() {
    let errors = assert_syntax_error("jika benar {\n cetak 1;\n");
    assert_eq!(errors, vec!["[line 3] Error at end: Expect '}' after block."]);
}

#[test]
fn lexical_errors_prevent_execution() {
    let errors = assert_syntax_error("cetak 1;\ncetak @;\n");
    assert_eq!(errors[0], "[line 2] Error: Unexpected character '@'.");

    let errors = assert_syntax_error("cetak \"tidak selesai;");
    assert_eq!(errors[0], "[line 1] Error: Unterminated string.");
}

#[test]
fn globals_persist_across_runs() {
    let mut interpreter = Interpreter::new(Vec::new(), Vec::new());

    assert_eq!(run("misal x = 40;", &mut interpreter), Status::Completed);
    assert_eq!(run("fungsi tambah_dua(n) { balikin n + 2; }", &mut interpreter),
               Status::Completed);
    assert_eq!(run("cetak salah_ketik;", &mut interpreter), Status::RuntimeError);
    assert_eq!(run("cetak tambah_dua(x);", &mut interpreter), Status::Completed);

    let x = Token::new(TokenKind::Identifier, "x", 1);
    assert_eq!(interpreter.globals().borrow().get(&x).unwrap(), Value::Number(40.0));
    assert!(!interpreter.globals().borrow().binds("n"));

    let (out, err) = interpreter.into_sinks();
    assert_eq!(String::from_utf8_lossy(&out), "42\n");
    assert_eq!(String::from_utf8_lossy(&err),
               "[line 1] Runtime error at 'salah_ketik': Undefined variable 'salah_ketik'.\n");
}

#[test]
fn prompt_waits_for_unclosed_braces() {
    assert!(!needs_more_input("cetak 1;"));
    assert!(needs_more_input("fungsi f() {"));
    assert!(needs_more_input("fungsi f() {\n  jika benar {\n    balikin 1;\n  }"));
    assert!(!needs_more_input("fungsi f() {\n  balikin 1;\n}"));
    assert!(!needs_more_input("cetak \"{\";"));
    assert!(!needs_more_input("}"));
}

#[test]
fn exit_codes() {
    assert_eq!(Status::Completed.exit_code(), 0);
    assert_eq!(execute("cetak (;").0.exit_code(), 65);
    assert_eq!(execute("cetak -\"a\";").0.exit_code(), 70);
}
