//! Word Forge - interactive wordlist generation for password audits
//!
//! A simple and elegant CLI tool for building candidate password wordlists
//! from seed words, numbers, and special characters, with leet substitutions.

use std::env;
use std::process;

use word_forge::cli::Session;
use word_forge::Result;

fn main() -> Result<()> {
    // Initialize the library
    if let Err(e) = word_forge::init() {
        eprintln!("❌ Failed to initialize: {}", e);
        process::exit(1);
    }

    // Get command line arguments
    let args: Vec<String> = env::args().collect();

    // Check for help
    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        print_help();
        return Ok(());
    }

    if args.len() > 1 && (args[1] == "--version" || args[1] == "-V") {
        println!("word-forge {}", word_forge::VERSION);
        return Ok(());
    }

    // Run the interactive session
    if let Err(e) = Session::new().run() {
        eprintln!("{}", e.user_message());
        process::exit(1);
    }

    Ok(())
}

/// Print help information
fn print_help() {
    println!("🔨 Word Forge - interactive wordlist generation");
    println!("═══════════════════════════════════════════════");
    println!();
    println!("USAGE:");
    println!("    word-forge              # Start the interactive session");
    println!("    word-forge --help       # Show this help");
    println!("    word-forge --version    # Show the version");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    WORD_FORGE_OUTPUT_DIR   Output directory (default: wordlists)");
    println!();
    println!("FEATURES:");
    println!("    • Seed words, numbers, and special characters as raw material");
    println!("    • Case and leet-substitution variants (a→4/@, e→3, s→5/$, ...)");
    println!("    • Pairwise word combinations, number and symbol affixes");
    println!("    • Optional reversed forms, configurable length window");
    println!("    • Session save/load for repeatable audits");
    println!();
    println!("Intended for authorized password-guessing audits only.");
    println!();
    println!("Made with ❤️ and 🦀 Rust");
}
