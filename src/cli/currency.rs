use crate::error::Result;
use crate::fmt::{money, CurrencyCode};
use crate::settings::{load_settings, save_settings};

pub fn run(code: Option<&str>) -> Result<()> {
    let mut settings = load_settings();
    match code {
        None => {
            let all: Vec<&str> = CurrencyCode::ALL.iter().map(|c| c.code()).collect();
            println!(
                "Currency: {} (e.g. {})",
                settings.currency,
                money(1234.5, settings.currency)
            );
            println!("Available: {}", all.join(", "));
        }
        Some(code) => {
            settings.currency = code.parse()?;
            save_settings(&settings)?;
            println!("Currency set to {}", settings.currency);
        }
    }
    Ok(())
}
