use anyhow::Context;
use clap::Parser;
use shunt::{Settings, evaluate_with, interpreter, self_test};
use tracing_subscriber::EnvFilter;

/// shunt evaluates arithmetic expressions using the shunting-yard algorithm.
///
/// Run without an expression to execute the built-in self-test.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Reject division by zero and non-finite results instead of printing
    /// `inf` or `NaN`.
    #[arg(short, long)]
    strict: bool,

    /// Longest accepted expression, in characters.
    #[arg(short = 'm', long, value_name = "N")]
    max_length: Option<usize>,

    /// Print the lexed token table before the result.
    #[arg(short, long)]
    tokens: bool,

    /// Print the postfix form before the result.
    #[arg(short, long)]
    postfix: bool,

    /// The expression to evaluate, e.g. "3+3*(3-1)".
    expression: Option<String>,
}

impl Args {
    fn settings(&self) -> Settings {
        Settings { strict_arithmetic:  self.strict,
                   max_expression_len: self.max_length, }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr)
                             .with_env_filter(EnvFilter::from_default_env())
                             .init();

    let args = Args::parse();

    let Some(expression) = args.expression.as_deref() else {
        let passed = self_test().context("self-test failed")?;
        tracing::info!(passed, "self-test passed");
        println!("All tests passed!");
        return Ok(());
    };

    if args.tokens {
        let tokens = interpreter::lexer::lex(expression).context("failed to tokenize expression")?;
        print!("{}", interpreter::token::token_table(&tokens));
    }
    if args.postfix {
        let postfix = shunt::to_postfix(expression).context("failed to convert expression")?;
        println!("{}", interpreter::token::postfix_string(&postfix));
    }

    let result = evaluate_with(expression, &args.settings())
        .with_context(|| format!("failed to evaluate '{expression}'"))?;
    println!("{result:.6}");
    Ok(())
}
