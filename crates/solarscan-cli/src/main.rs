// SolarScan CLI Entry Point

use solarscan_cli::{logging::VerbosityLevel, output, router::CommandRouter};

#[tokio::main]
async fn main() {
    // A missing .env file is normal.
    dotenv::dotenv().ok();

    if let Err(e) = CommandRouter::route().await {
        output::print_error(&e.user_message());
        if VerbosityLevel::current() == VerbosityLevel::Verbose {
            eprintln!("\n{}", e.technical_details());
        }
        std::process::exit(1);
    }
}
