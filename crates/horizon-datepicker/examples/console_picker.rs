//! Horizon Datepicker Console Example
//!
//! Drives a date picker from the terminal, printing the calendar after
//! every command:
//!
//! ```text
//! toggle | prev | next | prev-year | next-year | month N | year N
//! day N | hour N | minute N | today | clear | esc | quit
//! ```
//!
//! An optional argument names a `.toml` or `.json` picker config.
//!
//! Run with: RUST_LOG=horizon_datepicker=debug cargo run -p horizon-datepicker --example console_picker

use std::io::{self, BufRead, Write};

use horizon_datepicker::config::DatePickerConfig;
use horizon_datepicker::widget::{DatePicker, Gesture};
use tracing_subscriber::EnvFilter;

fn parse_gesture(line: &str) -> Option<Gesture> {
    let mut words = line.split_whitespace();
    let command = words.next()?;
    let mut number = || words.next().and_then(|word| word.parse::<i64>().ok());

    Some(match command {
        "toggle" => Gesture::ToggleClicked,
        "prev" => Gesture::PrevMonth,
        "next" => Gesture::NextMonth,
        "prev-year" => Gesture::PrevYear,
        "next-year" => Gesture::NextYear,
        "month" => Gesture::MonthChosen(i32::try_from(number()? - 1).ok()?),
        "year" => Gesture::YearChosen(i32::try_from(number()?).ok()?),
        "day" => Gesture::DayClicked(u32::try_from(number()?).ok()?),
        "hour" => Gesture::HourChosen(u32::try_from(number()?).ok()?),
        "minute" => Gesture::MinuteChosen(u32::try_from(number()?).ok()?),
        "today" => Gesture::TodayClicked,
        "clear" => Gesture::ClearClicked,
        "esc" => Gesture::EscapePressed,
        _ => return None,
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut picker = match std::env::args().nth(1) {
        Some(path) => DatePicker::from_config(&DatePickerConfig::load(path)?),
        None => DatePicker::new().with_show_time(true).with_minute_step(15),
    };

    picker.value_changed.connect(|value| match value {
        Some(value) => println!(">> committed {value}"),
        None => println!(">> cleared"),
    });

    let stdin = io::stdin();
    loop {
        println!("[{}]", picker.trigger_label());
        if let Some(view) = picker.view() {
            print!("{view}");
        }
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 || line.trim() == "quit" {
            break;
        }
        match parse_gesture(&line) {
            Some(gesture) => {
                if !picker.handle(gesture) {
                    println!("(ignored)");
                }
            }
            None => println!("unknown command: {}", line.trim()),
        }
    }
    Ok(())
}
