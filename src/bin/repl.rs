use dice_expression::{Expression, RollContext, DEFAULT_MAX_ROLLS};
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

fn max_rolls() -> usize {
    std::env::var("DICE_MAX_ROLLS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_MAX_ROLLS)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut ctx = RollContext::new_bounded(max_rolls(), rand::thread_rng());
    let stdin = io::stdin();
    print!("> ");
    io::stdout().flush()?;
    for line in stdin.lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            ctx.reset();
            match line.parse::<Expression>() {
                Ok(expr) => match ctx.eval(&expr) {
                    Ok(r) => println!("{}", r),
                    Err(why) => eprintln!("Error: {}", why),
                },
                Err(why) => eprintln!("Error: {}", why),
            }
        }
        print!("> ");
        io::stdout().flush()?;
    }
    Ok(())
}
