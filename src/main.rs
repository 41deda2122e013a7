use stack_shunting::{MathContext, ShuntingParser};

const DEMO: &[&str] = &[
    "(4 - 19) * (7 + 19) + 19 * (7 - 4 + 19)",
    "3 * 8 + 4",
    "4 - 2 * (6 - 3) / (3 * (11 - 3))",
    "72 / (12 - 6)",
    "1 * 1 * 1 * ((1 * 1) *",
];

fn run(cx: &MathContext, expr: &str) {
    let rpn = match ShuntingParser::parse_str(expr) {
        Ok(rpn) => rpn,
        Err(e) => {
            println!("{}: {}", expr, e);
            return;
        }
    };
    println!("converted: {}", rpn);
    match cx.eval(&rpn) {
        Ok(value) => println!("{} = {}", expr, value),
        Err(e) => println!("{}: {}", expr, e),
    }
}

fn main() {
    use tracing_subscriber::{fmt, EnvFilter};

    // RUST_LOG controls verbosity, warn when unset
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let cx = MathContext::new();
    if args.is_empty() {
        DEMO.iter().for_each(|expr| run(&cx, expr));
    } else {
        args.iter().for_each(|expr| run(&cx, expr));
    }
}
