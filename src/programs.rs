//! Built-in example programs run by the command-line driver.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Program {
    /// Short name used to select the program on the command line.
    pub key: &'static str,
    pub title: &'static str,
    pub source: &'static str,
}

pub const PROGRAMS: &[Program] = &[
    Program {
        key: "int",
        title: "Just an Int",
        source: "1",
    },
    Program {
        key: "bool",
        title: "Just a Bool",
        source: "true",
    },
    Program {
        key: "string",
        title: "Just a String",
        source: r#""Hello world!""#,
    },
    Program {
        key: "var",
        title: "Just a Var",
        source: "x",
    },
    Program {
        key: "let",
        title: "Simple let",
        source: "let x = 10 in\nx",
    },
    Program {
        key: "lambda",
        title: "Simple Lambda",
        source: r"\x -> x",
    },
    Program {
        key: "application",
        title: "Simple Application",
        source: r#"(\x -> x) "Hello""#,
    },
    Program {
        key: "huge-if",
        title: "Huge if true",
        source: r#"
if true then
  "HUGE"
else
  "smol"
"#,
    },
    Program {
        key: "ill-typed-if",
        title: "Ill-typed if",
        source: r#"
if false then
  "HUGE"
else
  20
"#,
    },
    Program {
        key: "let-apply",
        title: "Let & Application",
        source: r#"
let identity = \x -> x in
identity "Hello friends"
"#,
    },
    Program {
        key: "currying-1",
        title: "Currying 1",
        source: r"
let const = \x -> \y -> x in
const 10
",
    },
    Program {
        key: "currying-2",
        title: "Currying 2",
        source: r#"
let const = \x -> \y -> x in
const 10 "Hello friends"
"#,
    },
    Program {
        key: "higher-order",
        title: "Higher order programming",
        source: r#"
let flip = \f -> \x -> \y -> f y x in
let const = \x -> \y -> x in
flip const 10 "Hello friends"
"#,
    },
    Program {
        key: "fib",
        title: "Fibonacci",
        source: r"
let fib = \x ->
    if int_equals x 1 then
        1
    else if int_equals x 2 then
        1
    else
        add (fib (sub x 1)) (fib (sub x 2)) in
fib 15
",
    },
    Program {
        key: "bottles",
        title: "Ninety-nine Bottles",
        source: r#"
let getabeer = \x ->
    if int_equals x 0 then
        "Go to the store and buy some more,\n99 bottles of beer on the wall.\n"
    else if int_equals x 1 then
        concat "1 bottle of beer on the wall,\n1 bottle of beer,\nTake one down, pass it around,\n0 bottle of beer on the wall.\n\n" (getabeer 0)
    else
        let init = concat (int_to_string x) " bottles of beer on the wall,\n" in
        let middle = concat (int_to_string x) " bottles of beer,\nTake one down, pass it around,\n" in
        let end = concat (int_to_string (sub x 1)) " bottles of beer on the wall.\n\n" in
        concat init (concat middle (concat end (getabeer (sub x 1))))
in
getabeer 99
"#,
    },
];

pub fn find(key: &str) -> Option<&'static Program> {
    PROGRAMS.iter().find(|program| program.key == key)
}
