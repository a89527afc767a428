// Example parsing a handful of documents, or the ones given on the command line

use pjson::{parse_str, Value, STATUS_OK};

fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::True => "true".to_string(),
        Value::False => "false".to_string(),
        Value::Number(n) => format!("number {n}"),
        Value::String(bytes) => format!("string {:?}", String::from_utf8_lossy(bytes)),
    }
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let inputs: Vec<&str> = if args.is_empty() {
        vec![
            "null",
            "  true ",
            "-1.5e3",
            "1e-10000",
            "1e400",
            r#""Hello""#,
            r#""unterminated"#,
            "null x",
            "01",
            "",
        ]
    } else {
        args.iter().map(String::as_str).collect()
    };

    for input in inputs {
        let result = parse_str(input);
        let code = match &result {
            Ok(_) => STATUS_OK,
            Err(e) => e.code(),
        };
        match result {
            Ok(value) => println!("{input:?} -> [{code}] {}", describe(&value)),
            Err(e) => println!("{input:?} -> [{code}] error: {e}"),
        }
    }
}
