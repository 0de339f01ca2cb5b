use anyhow::Result;
use wintrace_types::provider::known_providers;

pub fn handle() -> Result<()> {
    println!("{:<12} {:<38} USER_ID", "PROVIDER", "GUID");
    println!("{}", "-".repeat(60));

    for provider in known_providers() {
        println!(
            "{:<12} {:<38} {}",
            provider.name,
            provider.guid,
            provider.user_id.unwrap_or("-")
        );
    }

    Ok(())
}
