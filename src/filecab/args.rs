use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "filecab")]
#[command(about = "In-memory personnel record cabinet", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Validation rule set applied to every create/edit
    #[arg(short = 'v', long = "validation-rules", value_enum, default_value_t = ValidationRules::Default)]
    pub validation_rules: ValidationRules,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationRules {
    /// Lenient rules (date of birth from 1950 on)
    Default,
    /// Strict rules (uppercase first letter, date of birth from 1900 on)
    Custom,
}
