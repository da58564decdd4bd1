use colored::Colorize;

use ch_core::{Language, catalog};

pub async fn run(card: &str, lang: Language, seed: Option<u64>) -> Result<(), String> {
    if card.trim().is_empty() {
        return Err("card name must not be empty".into());
    }
    // Known cards are read under their name in the requested language.
    let name = catalog::find(card)
        .map(|c| c.name(lang).to_string())
        .unwrap_or_else(|_| card.trim().to_string());

    let service = super::service_from_env(seed)?;
    let fortune = service.generate_fortune(&name, lang).await;

    println!("{}", name.bold());
    println!("{fortune}");
    Ok(())
}
