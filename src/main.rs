use std::io;

use clap::Parser;
use ethiopian_date::{GregorianDate, PromptError, input::prompt_date};
use jiff::Zoned;
use jiff::civil::Date;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ethiopian-date")]
#[command(about = "Converts Gregorian calendar dates into Ethiopian calendar dates")]
#[command(version)]
struct Args {
    /// Gregorian date to convert, formatted as YYYY-MM-DD
    #[arg(conflicts_with_all = ["year", "month", "day", "today"])]
    date: Option<Date>,

    /// Gregorian year
    #[arg(long, allow_negative_numbers = true, requires_all = ["month", "day"])]
    year: Option<i32>,

    /// Gregorian month (not range checked)
    #[arg(long, allow_negative_numbers = true, requires = "year")]
    month: Option<i32>,

    /// Gregorian day of month (not range checked)
    #[arg(long, allow_negative_numbers = true, requires = "year")]
    day: Option<i32>,

    /// Convert the current local date
    #[arg(long, conflicts_with_all = ["year", "month", "day"])]
    today: bool,

    /// Also print the date with the Ethiopian month name
    #[arg(long)]
    long: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    let date = match resolve_date(&args) {
        Ok(date) => date,
        Err(PromptError::Conversion(e)) => {
            println!("Error: {e}");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    // Invalid input is reported but still exits successfully
    match date.to_ethiopian() {
        Ok(ethiopian) => {
            println!("Ethiopian Date: {ethiopian}");
            if args.long {
                println!("{}", ethiopian.to_long_string());
            }
        }
        Err(e) => println!("Error: {e}"),
    }

    Ok(())
}

fn resolve_date(args: &Args) -> Result<GregorianDate, PromptError> {
    if let Some(date) = args.date {
        return Ok(date.into());
    }

    if args.today {
        return Ok(Zoned::now().date().into());
    }

    if let (Some(year), Some(month), Some(day)) = (args.year, args.month, args.day) {
        return Ok(GregorianDate::new(year, month, day));
    }

    prompt_date(&mut io::stdin().lock(), &mut io::stdout())
}
