use eyre::Result;
use inputer::utils::*;
use log::info;

fn main() -> Result<()> {
    env_logger::init();

    println!("------------------------------------------------------------");
    println!(" ██ ███    ██ ██████  ██    ██ ████████ ███████ ██████  ");
    println!(" ██ ████   ██ ██   ██ ██    ██    ██    ██      ██   ██ ");
    println!(" ██ ██ ██  ██ ██████  ██    ██    ██    █████   ██████  ");
    println!(" ██ ██  ██ ██ ██      ██    ██    ██    ██      ██   ██ ");
    println!(" ██ ██   ████ ██       ██████     ██    ███████ ██   ██ ");
    println!("                 VERSION:    {}", env!("CARGO_PKG_VERSION"));
    println!("------------------------------------------------------------");

    let mut reader = PromptReader::stdin();

    let agree = reader.get_string_with("Do you agree? (y,n) ", yes_or_no())?;
    reader.pause("")?;

    let age_range = int_range(0, 130)?;
    let genders = one_of_these(["m", "f", "t"])?;
    let extra_range = double_range(1.5, 9.5)?;

    let (name, age, number, gender, city, total, extra) = loop {
        let name = reader.get_string("Enter your name")?;
        let age = reader.get_int_with("Enter your age", age_range)?;
        let number = reader.get_int_with("Enter a positive integer", |i: &i32| *i > 0)?;
        let gender = reader.get_string_with("Enter gender (m/f/t) ", genders.clone())?;
        let city = reader.get_string_or("Enter your city", "Seattle")?;
        let total = reader.get_double_with("Enter a positive amount: ", |d: &f64| *d > 0.0)?;
        let extra = reader.get_double_with("Enter extra charge", extra_range)?;

        if reader.get_yn("Is this correct?")? == 'y' {
            break (name, age, number, gender, city, total, extra);
        }
        info!("answers discarded, asking again");
    };

    let note = reader.ask(Ask::new("Any note").default_value(String::new()))?;

    println!(
        "Name: {}, Age {}, Number: {}, Gender {}, City: {}",
        name, age, number, gender, city
    );
    println!("Extra charge: {:.2}, Total: {:>10.2}", extra, total);
    if !note.is_empty() {
        println!("Note: {}", note);
    }
    println!(
        "{}",
        if agree.to_lowercase().starts_with('y') {
            "User agreed"
        } else {
            "User didn't agree"
        }
    );

    Ok(())
}
