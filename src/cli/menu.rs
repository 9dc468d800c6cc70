//! Interactive menu loop

use indicatif::{ProgressBar, ProgressStyle};
use inquire::{Confirm, CustomType, InquireError, Select, Text};
use std::time::Duration;

use crate::components::SeedValidator;
use crate::error::Result;
use crate::generator::generate_wordlist;
use crate::output::{SessionSnapshot, WordlistWriter};
use crate::types::{Category, GeneratorConfig, SeedComponents};

const MENU_OPTIONS: &[&str] = &[
    "Add components (words/numbers/special chars)",
    "Configure generator settings",
    "View current components",
    "Remove components",
    "Generate wordlist",
    "Save configuration",
    "Load configuration",
    "Exit",
];

/// One interactive session: seed components and settings live here, never in
/// process-wide state, and are passed by reference into the engine.
pub struct Session {
    components: SeedComponents,
    config: GeneratorConfig,
    validator: SeedValidator,
    writer: WordlistWriter,
}

/// Map prompt cancellation (Esc / Ctrl-C) to `None` instead of an error
fn prompt_or_cancel<T>(result: std::result::Result<T, InquireError>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

impl Session {
    /// Create a session with default settings
    pub fn new() -> Self {
        Self {
            components: SeedComponents::new(),
            config: GeneratorConfig::default(),
            validator: SeedValidator::new(),
            writer: WordlistWriter::new(),
        }
    }

    /// Run the menu loop until the user exits
    pub fn run(&mut self) -> Result<()> {
        loop {
            print_banner();

            let choice = match prompt_or_cancel(Select::new("Select option", MENU_OPTIONS.to_vec()).prompt())? {
                Some(choice) => choice,
                None => break,
            };

            match choice {
                "Add components (words/numbers/special chars)" => self.add_components()?,
                "Configure generator settings" => self.configure_settings()?,
                "View current components" => self.view_components(),
                "Remove components" => self.remove_components()?,
                "Generate wordlist" => self.generate()?,
                "Save configuration" => self.save_configuration()?,
                "Load configuration" => self.load_configuration()?,
                _ => break,
            }
        }

        println!();
        println!("👋 Goodbye!");
        Ok(())
    }

    fn add_components(&mut self) -> Result<()> {
        println!();
        println!("📥 Add Components");
        println!("   Enter 'x' to return to the menu, 'c' to change category");
        println!(
            "   Length window: {}..={} characters",
            self.config.min_length, self.config.max_length
        );

        let mut category = match self.select_category("Select category")? {
            Some(c) => c,
            None => return Ok(()),
        };

        loop {
            let prompt = format!("Enter {} (x:exit, c:change category)", category);
            let value = match prompt_or_cancel(Text::new(&prompt).prompt())? {
                Some(value) => value,
                None => return Ok(()),
            };

            match value.trim() {
                "" => continue,
                "x" | "X" => return Ok(()),
                "c" | "C" => {
                    category = match self.select_category("Select new category")? {
                        Some(c) => c,
                        None => return Ok(()),
                    };
                    continue;
                }
                entry => match self.validator.validate(entry, category, &self.config) {
                    Ok(seed) => {
                        if self.components.insert(category, seed.value.clone()) {
                            println!("✅ Added '{}' to {}", seed.value, category);
                        } else {
                            println!("ℹ️  '{}' is already in {}", seed.value, category);
                        }
                    }
                    Err(e) => println!("{}", e.user_message()),
                },
            }
        }
    }

    fn remove_components(&mut self) -> Result<()> {
        loop {
            self.view_components();

            println!();
            println!("🗑️  Remove Components");
            let category = match self.select_category("Select category to remove from")? {
                Some(c) => c,
                None => return Ok(()),
            };

            loop {
                let entries: Vec<String> = self.components.set(category).iter().cloned().collect();
                if entries.is_empty() {
                    println!("ℹ️  No items in {}", category);
                    break;
                }

                let picked = match prompt_or_cancel(
                    Select::new("Select value to remove", entries).prompt(),
                )? {
                    Some(value) => value,
                    None => break,
                };

                if self.components.remove(category, &picked) {
                    println!("✅ Removed '{}' from {}", picked, category);
                }

                let again = prompt_or_cancel(
                    Confirm::new("Remove another from this category?")
                        .with_default(false)
                        .prompt(),
                )?;
                if again != Some(true) {
                    break;
                }
            }

            let other = prompt_or_cancel(
                Confirm::new("Remove from another category?")
                    .with_default(false)
                    .prompt(),
            )?;
            if other != Some(true) {
                return Ok(());
            }
        }
    }

    fn configure_settings(&mut self) -> Result<()> {
        println!();
        println!("⚙️  Generator Configuration");

        let min_length = loop {
            let value = match prompt_or_cancel(
                CustomType::<usize>::new("Minimum length")
                    .with_default(self.config.min_length)
                    .with_error_message("Please enter a valid number")
                    .prompt(),
            )? {
                Some(value) => value,
                None => return Ok(()),
            };
            if value == 0 {
                println!("❌ Minimum length must be positive");
                continue;
            }
            break value;
        };

        let max_length = loop {
            let value = match prompt_or_cancel(
                CustomType::<usize>::new("Maximum length")
                    .with_default(self.config.max_length.max(min_length))
                    .with_error_message("Please enter a valid number")
                    .prompt(),
            )? {
                Some(value) => value,
                None => return Ok(()),
            };
            if value < min_length {
                println!(
                    "❌ Maximum length must be at least the minimum length ({})",
                    min_length
                );
                continue;
            }
            break value;
        };

        let capitalize = prompt_or_cancel(
            Confirm::new("Include capitalized versions?")
                .with_default(self.config.capitalize)
                .prompt(),
        )?
        .unwrap_or(self.config.capitalize);

        let include_reverse = prompt_or_cancel(
            Confirm::new("Include reversed combinations?")
                .with_default(self.config.include_reverse)
                .prompt(),
        )?
        .unwrap_or(self.config.include_reverse);

        self.config = GeneratorConfig {
            min_length,
            max_length,
            capitalize,
            include_reverse,
        };
        self.config.validate()?;

        println!("✅ Settings updated");
        Ok(())
    }

    fn view_components(&self) {
        println!();
        println!("📋 Total components: {}", self.components.total());

        for category in Category::ALL {
            let items = self.components.set(category);
            println!();
            println!("{} ({} items)", category.to_string().to_uppercase(), items.len());
            if items.is_empty() {
                println!("  (empty)");
            } else {
                for item in items {
                    println!("  • {}", item);
                }
            }
        }
    }

    fn generate(&self) -> Result<()> {
        println!();
        if self.components.is_empty() {
            println!("❌ No components to generate from!");
            return Ok(());
        }

        println!("🔨 Starting wordlist generation...");
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message("Combining seeds and expanding variants...");
        spinner.enable_steady_tick(Duration::from_millis(100));

        let candidates = generate_wordlist(&self.components, &self.config);
        spinner.finish_and_clear();

        if candidates.is_empty() {
            println!("😔 Nothing generated: no candidate fits the length window.");
            return Ok(());
        }

        match self.writer.write(&candidates, &self.components, &self.config) {
            Ok(report) => {
                println!();
                println!("✓ Completed! Generated {} combinations", report.count);
                println!("📄 Saved to: {}", report.output_file.display());
                println!("⏱️  Took {:.2}s", report.duration.as_secs_f32());
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to write wordlist");
                println!("{}", e.user_message());
            }
        }

        Ok(())
    }

    fn save_configuration(&self) -> Result<()> {
        let path = SessionSnapshot::default_path(self.writer.output_dir());
        let snapshot = SessionSnapshot::new(self.components.clone(), self.config.clone());
        match snapshot.save(&path) {
            Ok(()) => println!("✅ Configuration saved to {}", path.display()),
            Err(e) => println!("{}", e.user_message()),
        }
        Ok(())
    }

    fn load_configuration(&mut self) -> Result<()> {
        let path = SessionSnapshot::default_path(self.writer.output_dir());
        match SessionSnapshot::load(&path) {
            Ok(snapshot) => {
                self.components = snapshot.components;
                self.config = snapshot.config;
                println!("✅ Configuration loaded from {}", path.display());
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load configuration");
                println!("⚠️  No usable saved configuration found ({})", path.display());
            }
        }
        Ok(())
    }

    fn select_category(&self, prompt: &str) -> Result<Option<Category>> {
        prompt_or_cancel(Select::new(prompt, Category::ALL.to_vec()).prompt())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

fn print_banner() {
    println!();
    println!("🔨 Word Forge - wordlist generation for password audits");
    println!("═══════════════════════════════════════════════════════");
    println!();
}
