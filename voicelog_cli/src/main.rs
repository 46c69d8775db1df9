use clap::{Parser, Subcommand, ValueEnum};
use voicelog_core::config::OutputFormat;
use voicelog_core::{parse_command, Config, ParseResult, Result, INTENT_RULES};

#[derive(Parser)]
#[command(name = "voicelog")]
#[command(about = "Health voice-command parser", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Command text to parse (shorthand for the `parse` subcommand)
    #[arg(trailing_var_arg = true)]
    text: Vec<String>,

    /// Override the configured output format
    #[arg(long, global = true, value_enum)]
    format: Option<Format>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a transcribed voice command into a structured result
    Parse {
        /// The command text, e.g. "log 2 eggs and coffee for breakfast"
        text: Vec<String>,
    },

    /// Show the intent classification rules in evaluation order
    Intents,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Pretty,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => OutputFormat::Json,
            Format::Pretty => OutputFormat::Pretty,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load().unwrap_or_default();
    voicelog_core::logging::init_with_level(&config.logging.level);

    let format = cli
        .format
        .map(OutputFormat::from)
        .unwrap_or(config.output.format);

    match cli.command {
        Some(Commands::Parse { text }) => cmd_parse(&text.join(" "), format),
        Some(Commands::Intents) => {
            cmd_intents();
            Ok(())
        }
        None if !cli.text.is_empty() => cmd_parse(&cli.text.join(" "), format),
        None => {
            eprintln!("No command text given. Try: voicelog parse \"log water\"");
            std::process::exit(2);
        }
    }
}

fn cmd_parse(text: &str, format: OutputFormat) -> Result<()> {
    let result = parse_command(text);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Pretty => display_result(&result),
    }

    // ParseError means the intent was recognized but unusable; scripts can
    // tell it apart from Unknown (exit 0) by the exit code.
    if let ParseResult::ParseError { error_message, .. } = &result {
        eprintln!("error: {error_message}");
        std::process::exit(1);
    }

    Ok(())
}

fn cmd_intents() {
    println!("Intent rules, evaluated top to bottom; first match wins:\n");
    for (position, rule) in INTENT_RULES.iter().enumerate() {
        println!("  {}. {:<11} {}", position + 1, rule.intent.name(), rule.trigger);
    }
    println!("\nAnything unmatched is reported as unknown.");
}

fn display_result(result: &ParseResult) {
    match result {
        ParseResult::Meal(meal) => {
            match &meal.meal_type {
                Some(meal_type) => println!("Meal ({meal_type})"),
                None => println!("Meal"),
            }
            for food in &meal.foods {
                let mut line = String::from("  - ");
                if let Some(quantity) = &food.quantity {
                    line.push_str(quantity);
                    line.push(' ');
                }
                if let Some(unit) = &food.unit {
                    line.push_str(unit);
                    line.push(' ');
                }
                line.push_str(&food.name);
                println!("{line}");
            }
            if let Some(calories) = meal.total_calories {
                println!("  ~{calories} kcal");
            }
        }
        ParseResult::Supplement(supplement) => {
            println!("Supplement: {}", supplement.name);
            if let Some(quantity) = &supplement.quantity {
                println!("  Dose: {quantity}");
            }
            for (nutrient, value) in &supplement.nutrients {
                println!("  {nutrient}: {value}");
            }
        }
        ParseResult::Workout(workout) => {
            println!("Workout: {}", workout.workout_type);
            if let Some(minutes) = workout.duration_minutes {
                println!("  Duration: {minutes} min");
            }
            if let (Some(distance), Some(unit)) = (workout.distance, &workout.distance_unit) {
                println!("  Distance: {distance} {unit}");
            }
            if let Some(calories) = workout.calories_burned {
                println!("  Burned: {calories} kcal");
            }
        }
        ParseResult::Water(water) => println!("Water: {} ml", water.amount_ml),
        ParseResult::Weight(weight) => println!("Weight: {} {}", weight.weight, weight.unit),
        ParseResult::Sleep(sleep) => {
            println!("Sleep");
            if let Some(hours) = sleep.hours {
                println!("  Hours: {hours}");
            }
            if let Some(quality) = &sleep.quality {
                println!("  Quality: {quality}");
            }
        }
        ParseResult::Mood(mood) => {
            println!("Mood: {}/5", mood.level);
            if !mood.emotions.is_empty() {
                println!("  Emotions: {}", mood.emotions.join(", "));
            }
        }
        ParseResult::Meditation(meditation) => println!(
            "Meditation: {} min ({})",
            meditation.duration_minutes, meditation.meditation_type
        ),
        ParseResult::Habit(habit) => {
            println!("Habit completed: {}", habit.habit_name);
            if let Some(notes) = &habit.notes {
                println!("  Notes: {notes}");
            }
        }
        ParseResult::Journal(journal) => {
            println!("Journal entry:");
            println!("  {}", journal.content);
            if let Some(mood) = &journal.mood {
                println!("  Mood: {mood}");
            }
        }
        ParseResult::ParseError {
            original_command,
            error_message,
        } => {
            println!("Could not parse: {original_command}");
            println!("  {error_message}");
        }
        ParseResult::Unknown { command } => {
            println!("Unrecognized command: {command}");
            println!("  Try rephrasing, e.g. \"log water\" or \"slept 8 hours\"");
        }
    }
}
