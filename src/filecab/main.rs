use clap::Parser;
use colored::*;
use filecab::api::{CabinetApi, CmdMessage, CmdResult, MessageLevel};
use filecab::error::{CabinetError, Result};
use filecab::input;
use filecab::model::{Record, RecordId, RecordInput};
use filecab::validation::{CustomValidator, DefaultValidator, RecordValidator};
use std::io::{self, BufRead, Write};

mod args;
use args::{Cli, ValidationRules};

const HINT: &str = "Enter a command, or 'help' to get help.";

const HELP_MESSAGES: &[[&str; 3]] = &[
    ["help", "prints this help screen", "The 'help' command prints the help screen."],
    ["exit", "exits the application", "The 'exit' command exits the application."],
    ["stat", "prints record statistics", "The 'stat' command prints the number of stored records."],
    ["create", "creates a new record", "The 'create' command prompts for each field and creates a new record."],
    ["list", "shows all records", "The 'list' command prints every record in creation order."],
    ["edit", "edits a record", "The 'edit' command prompts for an id and new field values."],
    ["find", "finds records", "Usage: find <firstname|lastname|dateofbirth> <value>."],
    ["export", "exports records to a file", "Usage: export <csv|json> <filename>."],
];

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    println!("filecab {}", version_string());
    match cli.validation_rules {
        ValidationRules::Default => {
            println!("Using default validation rules.");
            run_loop(CabinetApi::new(DefaultValidator))
        }
        ValidationRules::Custom => {
            println!("Using custom validation rules.");
            run_loop(CabinetApi::new(CustomValidator))
        }
    }
}

fn version_string() -> String {
    let hash = env!("GIT_HASH");
    if hash.is_empty() {
        env!("CARGO_PKG_VERSION").to_string()
    } else {
        format!("{} ({})", env!("CARGO_PKG_VERSION"), hash)
    }
}

fn run_loop<V: RecordValidator>(mut api: CabinetApi<V>) -> Result<()> {
    println!("{}", HINT);
    println!();

    let stdin = io::stdin();
    let mut reader = stdin.lock();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            // stdin closed
            println!();
            return Ok(());
        }
        let line = line.trim();
        if line.is_empty() {
            println!("{}", HINT);
            continue;
        }

        let (command, params) = match line.split_once(' ') {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line, ""),
        };

        let outcome = match command.to_lowercase().as_str() {
            "help" => {
                print_help(params);
                Ok(())
            }
            "exit" => {
                println!("Exiting the application...");
                return Ok(());
            }
            "stat" => api.stat().map(|r| print_result(&r)),
            "create" => handle_create(&mut api, &mut reader),
            "list" => api.list_records().map(|r| print_result(&r)),
            "edit" => handle_edit(&mut api, &mut reader),
            "find" => handle_find(&api, params),
            "export" => handle_export(&api, params),
            unknown => {
                println!("There is no '{}' command.", unknown);
                println!();
                Ok(())
            }
        };

        // Errors are reported and the session keeps going.
        if let Err(e) = outcome {
            println!("{}", e.to_string().red());
        }
    }
}

fn handle_create<V: RecordValidator>(
    api: &mut CabinetApi<V>,
    reader: &mut impl BufRead,
) -> Result<()> {
    let input = prompt_record_input(reader)?;
    let result = api.create_record(input)?;
    print_result(&result);
    Ok(())
}

fn handle_edit<V: RecordValidator>(
    api: &mut CabinetApi<V>,
    reader: &mut impl BufRead,
) -> Result<()> {
    let id = prompt_field(reader, "Record id to edit", parse_record_id)?;
    let input = prompt_record_input(reader)?;
    let result = api.edit_record(id, input)?;
    print_result(&result);
    Ok(())
}

fn handle_find<V: RecordValidator>(api: &CabinetApi<V>, params: &str) -> Result<()> {
    let parts: Vec<&str> = params.split_whitespace().collect();
    if parts.len() != 2 {
        println!("Usage: find <property> <value>");
        return Ok(());
    }
    let result = api.find_records(parts[0], parts[1])?;
    print_result(&result);
    Ok(())
}

fn handle_export<V: RecordValidator>(api: &CabinetApi<V>, params: &str) -> Result<()> {
    let parts: Vec<&str> = params.split_whitespace().collect();
    if parts.len() != 2 {
        println!("Usage: export <csv|json> <filename>");
        return Ok(());
    }
    let format = parts[0].parse().map_err(CabinetError::Api)?;
    let result = api.export_records(format, std::path::Path::new(parts[1]))?;
    print_result(&result);
    Ok(())
}

fn prompt_record_input(reader: &mut impl BufRead) -> Result<RecordInput> {
    let first_name = prompt_field(reader, "First name", input::parse_name)?;
    let last_name = prompt_field(reader, "Last name", input::parse_name)?;
    let date_of_birth = prompt_field(reader, "Date of birth (MM/dd/yyyy)", input::parse_date)?;
    let age = prompt_field(reader, "Age", input::parse_age)?;
    let salary = prompt_field(reader, "Salary", input::parse_salary)?;
    let gender = prompt_field(reader, "Gender (M/F/O)", input::parse_gender)?;

    Ok(RecordInput {
        first_name,
        last_name,
        date_of_birth,
        age,
        salary,
        gender,
    })
}

/// Prompts until the converter accepts a line. Each rejection reprints the
/// reason and asks again, so a typo never aborts the whole create/edit.
fn prompt_field<T>(
    reader: &mut impl BufRead,
    label: &str,
    parse: impl Fn(&str) -> std::result::Result<T, String>,
) -> Result<T> {
    loop {
        println!("{}...", label);
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Err(CabinetError::Api("Input ended mid-prompt".into()));
        }
        match parse(line.trim()) {
            Ok(value) => return Ok(value),
            Err(reason) => {
                println!("{}", format!("{}. Please, correct your input.", reason).red())
            }
        }
    }
}

fn parse_record_id(input: &str) -> std::result::Result<RecordId, String> {
    match input.trim().parse::<RecordId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err("Please enter a valid positive record id".to_string()),
    }
}

fn print_help(params: &str) {
    if !params.is_empty() {
        match HELP_MESSAGES
            .iter()
            .find(|entry| entry[0].eq_ignore_ascii_case(params))
        {
            Some(entry) => println!("{}", entry[2]),
            None => println!("There is no explanation for '{}' command.", params),
        }
    } else {
        println!("Available commands:");
        for entry in HELP_MESSAGES {
            println!("\t{}\t- {}", entry[0], entry[1]);
        }
    }
    println!();
}

fn print_result(result: &CmdResult) {
    print_records(&result.listed_records);
    print_messages(&result.messages);
}

fn print_records(records: &[Record]) {
    for record in records {
        println!(
            "{} {}, {}, {}, Age: {}, Salary: {}, Gender: {}",
            format!("#{}", record.id).yellow(),
            record.first_name,
            record.last_name,
            record.date_of_birth.format("%Y-%b-%d"),
            record.age,
            record.salary,
            record.gender,
        );
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}
